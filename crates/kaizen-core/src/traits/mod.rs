//! Collaborator seams.
//!
//! The engines are pure and never reach out to storage or the platform on
//! their own; these traits are how snapshots get to them.

mod health_provider;
mod record_store;

pub use health_provider::IHealthProvider;
pub use record_store::IRecordStore;
