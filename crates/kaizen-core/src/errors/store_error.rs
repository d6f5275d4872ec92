use thiserror::Error;

/// Errors raised by record-store implementations.
///
/// A `*NotFound` returned while resolving a retrospective's child-id list
/// means the ownership graph has a dangling id, which the store is supposed
/// to make impossible.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate id: {id}")]
    DuplicateId { id: String },

    #[error("action record not found: {id}")]
    RecordNotFound { id: String },

    #[error("kpta item not found: {id}")]
    ItemNotFound { id: String },

    #[error("retrospective not found: {id}")]
    RetrospectiveNotFound { id: String },
}
