use alloc::vec::Vec;

use crate::{Error, ItemLayout, Result};

/// Decides when a row counts as viewable.
///
/// With neither threshold set, any visible pixel makes a row viewable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewabilityConfig {
    /// Percent of the *row* that must be visible (0-100).
    pub item_visible_percent_threshold: Option<f32>,
    /// Percent of the *viewport* the row must cover (0-100). A row that is entirely visible
    /// is always viewable.
    pub view_area_coverage_percent_threshold: Option<f32>,
    /// Report nothing until the user scrolls or `record_interaction` is called.
    pub wait_for_interaction: bool,
}

impl ViewabilityConfig {
    pub fn with_item_visible_percent_threshold(mut self, percent: f32) -> Self {
        self.item_visible_percent_threshold = Some(percent);
        self
    }

    pub fn with_view_area_coverage_percent_threshold(mut self, percent: f32) -> Self {
        self.view_area_coverage_percent_threshold = Some(percent);
        self
    }

    pub fn with_wait_for_interaction(mut self, wait: bool) -> Self {
        self.wait_for_interaction = wait;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.item_visible_percent_threshold.is_some()
            && self.view_area_coverage_percent_threshold.is_some()
        {
            return Err(Error::ConflictingViewabilityThresholds);
        }
        Ok(())
    }

    /// Whether a row at `layout` is viewable in the viewport `[offset, offset + visible_length)`.
    pub fn is_viewable(&self, layout: ItemLayout, offset: u64, visible_length: u32) -> bool {
        let view_start = offset;
        let view_end = offset.saturating_add(visible_length as u64);
        let top = layout.offset;
        let bottom = layout.end();

        let pixels = bottom.min(view_end).saturating_sub(top.max(view_start));
        if pixels == 0 {
            return false;
        }
        if top >= view_start && bottom <= view_end {
            return true;
        }

        let (percent, threshold) = match (
            self.view_area_coverage_percent_threshold,
            self.item_visible_percent_threshold,
        ) {
            (Some(threshold), _) => (percent_of(pixels, visible_length as u64), threshold),
            (None, Some(threshold)) => (percent_of(pixels, layout.length as u64), threshold),
            (None, None) => return true,
        };
        if threshold <= 0.0 {
            return true;
        }
        percent >= threshold
    }
}

fn percent_of(part: u64, whole: u64) -> f32 {
    if whole == 0 {
        return 0.0;
    }
    100.0 * part as f32 / whole as f32
}

/// Tracks which rows are viewable between updates and reports the difference.
#[derive(Clone, Debug, Default)]
pub(crate) struct ViewabilityTracker {
    viewable: Vec<usize>,
    has_interacted: bool,
}

/// Row-level result of a viewability update: rows currently viewable, and rows whose state
/// flipped (`true` = became viewable).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RowViewability {
    pub(crate) viewable: Vec<usize>,
    pub(crate) changed: Vec<(usize, bool)>,
}

impl ViewabilityTracker {
    pub(crate) fn record_interaction(&mut self) {
        self.has_interacted = true;
    }

    pub(crate) fn reset(&mut self) {
        self.viewable.clear();
    }

    /// Computes viewable rows among `candidates` (ascending) and diffs against the last update.
    ///
    /// Returns `None` when nothing changed.
    pub(crate) fn update(
        &mut self,
        config: &ViewabilityConfig,
        candidates: impl IntoIterator<Item = ItemLayout>,
        offset: u64,
        visible_length: u32,
    ) -> Option<RowViewability> {
        let next: Vec<usize> = if visible_length == 0
            || (config.wait_for_interaction && !self.has_interacted)
        {
            Vec::new()
        } else {
            candidates
                .into_iter()
                .filter(|layout| config.is_viewable(*layout, offset, visible_length))
                .map(|layout| layout.index)
                .collect()
        };

        let mut changed = Vec::new();
        for &row in &next {
            if self.viewable.binary_search(&row).is_err() {
                changed.push((row, true));
            }
        }
        for &row in &self.viewable {
            if next.binary_search(&row).is_err() {
                changed.push((row, false));
            }
        }
        if changed.is_empty() {
            return None;
        }

        self.viewable = next.clone();
        Some(RowViewability {
            viewable: next,
            changed,
        })
    }
}
