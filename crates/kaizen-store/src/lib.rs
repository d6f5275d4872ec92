//! # kaizen-store
//!
//! Arena-plus-index in-memory record store.
//!
//! Retrospectives own their children as ordered id lists; children carry
//! plain back-ids; three arenas resolve ids to records. The store keeps
//! that graph consistent: attaching maintains the parent's list, removal
//! detaches, and removing a retrospective cascades to everything it owns.

pub mod arena;

pub use arena::ArenaStore;
