//! Action records and their priority levels.

mod action;
mod priority;

pub use action::ActionRecord;
pub use priority::Priority;
