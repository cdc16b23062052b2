//! Domain types for the BandForge registry.
//!
//! Two levels of ownership: a [`Band`] exclusively owns its ordered
//! [`Member`] sequence, and the registry exclusively owns the bands. Every
//! position-based reference (menu listings, removals) uses an entity's
//! current index, which stays dense — 0-based, contiguous, renumbered on
//! removal.

use std::fmt;

use crate::error::{check_index, RegistryError, SequenceKind};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed band name — the one field listings display and
/// confirmations echo back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BandName(pub String);

impl fmt::Display for BandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for BandName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BandName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Member
// ---------------------------------------------------------------------------

/// One person in a band.
///
/// Pure data: all three fields are opaque text, fixed at construction. A
/// member has no identity outside the band that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub role: String,
    pub origin: String,
}

impl Member {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            origin: origin.into(),
        }
    }

    /// Human-readable one-liner. The leading ": " is part of the format —
    /// the menu prints it directly after the member's index.
    pub fn describe(&self) -> String {
        format!(": {} is the {}, and is from {}.", self.name, self.role, self.origin)
    }
}

// ---------------------------------------------------------------------------
// Band
// ---------------------------------------------------------------------------

/// A band: four descriptive fields plus the ordered member sequence.
///
/// `members` is private on purpose. The sequence is only ever mutated
/// through [`Band::add_member`] and [`Band::remove_member`], which is what
/// keeps member indices dense and the contents well-formed — the parameter
/// type of `add_member` is the entire "is a member" check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    pub name: BandName,
    pub genre: String,
    pub location: String,
    pub status: String,
    members: Vec<Member>,
}

impl Band {
    /// A new band starts with an empty member sequence.
    pub fn new(
        name: impl Into<BandName>,
        genre: impl Into<String>,
        location: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
            location: location.into(),
            status: status.into(),
            members: Vec::new(),
        }
    }

    /// Human-readable summary including the current member count.
    ///
    /// Always says "members", even for a count of 1 — the wording never
    /// pluralises and the exact sentence is pinned by tests.
    pub fn describe(&self) -> String {
        format!(
            "{} is a {} band based in {}. The band is currently {} and has {} members.",
            self.name,
            self.genre,
            self.location,
            self.status,
            self.members.len()
        )
    }

    /// Append `member` to the end of the sequence, preserving insertion
    /// order. Never fails.
    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Remove and return the member at `index`.
    ///
    /// Every member after `index` shifts down one position — callers holding
    /// previously displayed indices must re-read them. Fails with
    /// [`RegistryError::IndexOutOfRange`] when `index` is not within
    /// `0..members().len()`, leaving the sequence untouched.
    pub fn remove_member(&mut self, index: usize) -> Result<Member, RegistryError> {
        check_index(SequenceKind::Members, index, self.members.len())?;
        Ok(self.members.remove(index))
    }

    /// Read-only view of the member sequence, in display order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
