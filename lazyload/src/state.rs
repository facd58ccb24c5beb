use crate::InstanceId;

/// What a single [`crate::LazyLoader::scan_and_reveal`] pass did.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanReport {
    pub images_revealed: usize,
    pub fragments_revealed: usize,
    /// Candidates dropped unrevealed because their element is no longer attached.
    pub skipped_detached: usize,
    /// Both pending sequences are empty after this pass.
    pub drained: bool,
}

impl ScanReport {
    pub fn revealed(&self) -> usize {
        self.images_revealed + self.fragments_revealed
    }
}

/// A lightweight snapshot of a loader's progress, useful for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoaderState {
    pub instance: InstanceId,
    pub pending_images: usize,
    pub pending_fragments: usize,
}

impl LoaderState {
    pub fn is_drained(&self) -> bool {
        self.pending_images == 0 && self.pending_fragments == 0
    }
}
