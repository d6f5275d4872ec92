//! Aggregated health metrics and wellness display bands.

mod level;
mod sample;

pub use level::WellnessLevel;
pub use sample::HealthMetricsSample;
