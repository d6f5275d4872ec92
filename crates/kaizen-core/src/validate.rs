//! Write-path invariant checks.
//!
//! The read engines never call these; they assume their inputs are sound.
//! The application layer consults the checks before persisting, so bad
//! data is rejected at the boundary instead of surfacing as wrong query
//! results later.

use thiserror::Error;

use crate::record::ActionRecord;
use crate::retro::Retrospective;

/// A structural invariant a value would violate if persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("start_date is after end_date")]
    PeriodInverted,

    #[error("title is empty")]
    EmptyTitle,

    #[error("text is empty")]
    EmptyText,

    #[error("try-origin flag set without a source item id")]
    OriginWithoutSource,
}

/// Check a retrospective before save. An empty result means valid.
pub fn check_retrospective(retro: &Retrospective) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    if retro.start_date > retro.end_date {
        violations.push(InvariantViolation::PeriodInverted);
    }
    if retro.title.trim().is_empty() {
        violations.push(InvariantViolation::EmptyTitle);
    }
    violations
}

/// Check an action record before save. An empty result means valid.
pub fn check_record(record: &ActionRecord) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    if record.text.trim().is_empty() {
        violations.push(InvariantViolation::EmptyText);
    }
    if record.from_try_item && record.source_item_id.is_none() {
        violations.push(InvariantViolation::OriginWithoutSource);
    }
    violations
}
