//! Error types for bandforge-core.

use std::fmt;

use thiserror::Error;

/// All errors that can arise from registry and band operations.
///
/// Every variant is recoverable: the failed operation leaves all state
/// unchanged, and the caller is expected to re-prompt or abort the sub-flow.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A position-based reference fell outside `[0, len)` for the sequence
    /// it addressed.
    #[error("index {index} is out of bounds for {sequence} (length {len})")]
    IndexOutOfRange {
        sequence: SequenceKind,
        index: usize,
        len: usize,
    },
}

/// Which ordered sequence rejected an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// The registry's band list.
    Bands,
    /// A band's member list.
    Members,
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceKind::Bands => write!(f, "bands"),
            SequenceKind::Members => write!(f, "members"),
        }
    }
}

/// Shared bounds check for every position-based operation: `index` must lie
/// within `[0, len)`. Indices are `usize`, so negative positions cannot be
/// expressed at all.
pub(crate) fn check_index(
    sequence: SequenceKind,
    index: usize,
    len: usize,
) -> Result<(), RegistryError> {
    if index < len {
        Ok(())
    } else {
        Err(RegistryError::IndexOutOfRange { sequence, index, len })
    }
}
