/// Core functionality modules
///
/// Expense operations, their text rendering, and command dispatch.

pub mod dispatcher;
pub mod report;
pub mod tracker;

pub use dispatcher::{Command, Dispatcher};
pub use tracker::Tracker;
