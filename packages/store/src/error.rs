//! Error taxonomy shared by the store adapters and the screens.
//!
//! Every variant surfaces as an immediate user-visible notice on the
//! current screen; nothing is retried or queued, and nothing is fatal to
//! the session.

use thiserror::Error;

/// Transport or permission failure on a store read, write, or
/// subscription.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

/// The user confirmed a selection that is not valid yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Area confirm with nothing chosen. The message is shown verbatim.
    #[error("Selecione uma área")]
    EmptyArea,
}

/// A raw area tag read back from storage does not name any known area.
///
/// This indicates an internal inconsistency rather than a user mistake;
/// callers abort the current render instead of producing a malformed
/// form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("área desconhecida: {tag}")]
pub struct UnknownAreaError {
    pub tag: String,
}
