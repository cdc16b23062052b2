//! Root application state — every band plus the transient selection.
//!
//! # Index addressing
//!
//! Bands are referenced by their current 0-based position, exactly as the
//! menu displays them. Removal renumbers: deleting position `i` shifts every
//! later band down by one. The stored selection follows the same renumbering
//! so that it keeps designating the band the user picked — see
//! [`Registry::delete_band`].

use crate::error::{check_index, RegistryError, SequenceKind};
use crate::types::{Band, BandName};

/// The root collection: all bands in creation order, plus which one is
/// currently selected for member-level operations.
#[derive(Debug, Default)]
pub struct Registry {
    bands: Vec<Band>,
    /// Index into `bands`; always `< bands.len()` while `Some`. `None` until
    /// a [`Registry::select_band`] succeeds.
    selected: Option<usize>,
}

impl Registry {
    /// An empty registry with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Append a new band with an empty member sequence. Never fails; the
    /// four fields are opaque text and accepted as-is.
    pub fn create_band(
        &mut self,
        name: impl Into<BandName>,
        genre: impl Into<String>,
        location: impl Into<String>,
        status: impl Into<String>,
    ) {
        self.bands.push(Band::new(name, genre, location, status));
    }

    /// Remove and return the band at `index`; every later band shifts down
    /// one position.
    ///
    /// The selection is repaired rather than left dangling: deleting the
    /// selected band clears it, and deleting an earlier band decrements the
    /// stored index so it still designates the same band. Fails with
    /// [`RegistryError::IndexOutOfRange`] when `index` is not within
    /// `0..bands().len()`, leaving bands and selection untouched.
    pub fn delete_band(&mut self, index: usize) -> Result<Band, RegistryError> {
        check_index(SequenceKind::Bands, index, self.bands.len())?;
        let removed = self.bands.remove(index);
        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            keep => keep,
        };
        Ok(removed)
    }

    /// Record `index` as the current selection and hand back the live band.
    ///
    /// The reference is to the registry's own band, not a copy: mutations
    /// through it (adding a member, say) are visible on every later read.
    /// Fails with [`RegistryError::IndexOutOfRange`] when `index` is not
    /// within `0..bands().len()`; a prior selection survives the failure.
    pub fn select_band(&mut self, index: usize) -> Result<&mut Band, RegistryError> {
        check_index(SequenceKind::Bands, index, self.bands.len())?;
        self.selected = Some(index);
        Ok(&mut self.bands[index])
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The currently selected band, if any.
    pub fn selected_band(&self) -> Option<&Band> {
        self.selected.map(|index| &self.bands[index])
    }

    /// Mutable access to the selected band — how member-level operations
    /// reach it while the menu sits in the band sub-menu.
    pub fn selected_band_mut(&mut self) -> Option<&mut Band> {
        self.selected.map(|index| &mut self.bands[index])
    }

    /// Lazily enumerate `(position, name)` pairs in display order.
    ///
    /// Pure read; call again for a fresh pass.
    pub fn list_bands(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.bands
            .iter()
            .enumerate()
            .map(|(index, band)| (index, band.name.0.as_str()))
    }

    /// Read-only view of all bands, in display order.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Member;

    fn seeded() -> Registry {
        let mut registry = Registry::new();
        registry.create_band("Echoes", "Rock", "Austin", "Active");
        registry.create_band("Driftwood", "Folk", "Portland", "On Hiatus");
        registry.create_band("Neon Veldt", "Synthwave", "Berlin", "Touring");
        registry
    }

    fn names(registry: &Registry) -> Vec<(usize, &str)> {
        registry.list_bands().collect()
    }

    #[test]
    fn new_registry_is_empty_with_no_selection() {
        let registry = Registry::new();
        assert!(registry.bands().is_empty());
        assert!(registry.selected_band().is_none());
    }

    #[test]
    fn create_band_appends_with_empty_members() {
        let registry = seeded();
        assert_eq!(registry.bands().len(), 3);
        assert!(registry.bands().iter().all(|band| band.members().is_empty()));
    }

    #[test]
    fn list_bands_pairs_position_with_name() {
        let registry = seeded();
        assert_eq!(names(&registry), [(0, "Echoes"), (1, "Driftwood"), (2, "Neon Veldt")]);
    }

    #[test]
    fn list_bands_is_restartable() {
        let registry = seeded();
        assert_eq!(names(&registry), names(&registry));
    }

    #[test]
    fn delete_band_shifts_later_indices_down() {
        let mut registry = seeded();
        let removed = registry.delete_band(0).expect("index 0 is in range");
        assert_eq!(removed.name, BandName::from("Echoes"));
        assert_eq!(names(&registry), [(0, "Driftwood"), (1, "Neon Veldt")]);
    }

    #[test]
    fn delete_band_out_of_range_leaves_bands_unchanged() {
        let mut registry = seeded();
        let before = registry.bands().to_vec();

        let err = registry.delete_band(3).unwrap_err();
        assert!(
            matches!(
                err,
                RegistryError::IndexOutOfRange { sequence: SequenceKind::Bands, index: 3, len: 3 }
            ),
            "got: {err}"
        );
        assert_eq!(registry.bands(), &before[..]);
    }

    #[test]
    fn select_band_records_selection_and_returns_live_reference() {
        let mut registry = seeded();
        let band = registry.select_band(1).expect("index 1 is in range");
        band.add_member(Member::new("Sam", "Drummer", "NYC"));

        let selected = registry.selected_band().expect("selection was recorded");
        assert_eq!(selected.name, BandName::from("Driftwood"));
        assert_eq!(selected.members().len(), 1, "mutation through the reference must stick");
    }

    #[test]
    fn select_band_out_of_range_keeps_prior_selection() {
        let mut registry = seeded();
        registry.select_band(0).expect("select");

        let err = registry.select_band(9).unwrap_err();
        assert!(matches!(err, RegistryError::IndexOutOfRange { index: 9, len: 3, .. }), "got: {err}");
        let selected = registry.selected_band().expect("prior selection survives");
        assert_eq!(selected.name, BandName::from("Echoes"));
    }

    #[test]
    fn select_band_on_empty_registry_fails() {
        let mut registry = Registry::new();
        let err = registry.select_band(0).unwrap_err();
        assert!(matches!(err, RegistryError::IndexOutOfRange { len: 0, .. }), "got: {err}");
        assert!(registry.selected_band().is_none());
    }

    // Selection repair on deletion — the resolution of the stale-selection
    // question: a surviving selection always designates the band the user
    // picked, and deleting that band clears it.

    #[test]
    fn deleting_selected_band_clears_selection() {
        let mut registry = seeded();
        registry.select_band(1).expect("select");
        registry.delete_band(1).expect("delete");
        assert!(registry.selected_band().is_none());
    }

    #[test]
    fn deleting_earlier_band_keeps_selection_on_same_band() {
        let mut registry = seeded();
        registry.select_band(2).expect("select");
        registry.delete_band(0).expect("delete");

        let selected = registry.selected_band().expect("selection survives");
        assert_eq!(selected.name, BandName::from("Neon Veldt"));
    }

    #[test]
    fn deleting_later_band_leaves_selection_untouched() {
        let mut registry = seeded();
        registry.select_band(0).expect("select");
        registry.delete_band(2).expect("delete");

        let selected = registry.selected_band().expect("selection survives");
        assert_eq!(selected.name, BandName::from("Echoes"));
    }

    #[test]
    fn index_error_message_names_the_band_sequence() {
        let mut registry = seeded();
        let msg = registry.delete_band(7).unwrap_err().to_string();
        assert!(msg.contains("bands"), "must name the sequence, got: {msg}");
        assert!(msg.contains('7'), "must name the index, got: {msg}");
    }
}
