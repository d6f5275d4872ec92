//! # kaizen-core
//!
//! Foundation crate for the kaizen reflection engine.
//! Defines all shared types, traits, errors, configuration, and constants.
//! Every other crate in the workspace depends on this one.

pub mod config;
pub mod constants;
pub mod errors;
pub mod health;
pub mod models;
pub mod query;
pub mod record;
pub mod retro;
pub mod traits;
pub mod validate;

pub use config::KaizenConfig;
pub use errors::{ConfigError, KaizenError, KaizenResult, StoreError};
pub use health::{HealthMetricsSample, WellnessLevel};
pub use models::{ActionStatistics, PriorityCounts};
pub use query::{CompletionFilter, DateRange, FilterCriteria, SortOrder};
pub use record::{ActionRecord, Priority};
pub use retro::{KptaCategory, KptaItem, RetroKind, Retrospective};
pub use traits::{IHealthProvider, IRecordStore};
