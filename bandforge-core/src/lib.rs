//! BandForge core library — domain types, registry operations, errors.
//!
//! Public API surface:
//! - [`types`] — [`Member`], [`Band`], and the [`BandName`] newtype
//! - [`error`] — [`RegistryError`]
//! - [`registry`] — the [`Registry`] root state
//!
//! The crate is pure in-memory state: no I/O, no terminal knowledge, no
//! persistence. The interactive shell in `bandforge-cli` drives it and
//! renders whatever the operations return.

pub mod error;
pub mod registry;
pub mod types;

pub use error::{RegistryError, SequenceKind};
pub use registry::Registry;
pub use types::{Band, BandName, Member};
