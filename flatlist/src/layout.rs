use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::ItemLayout;

#[cfg(feature = "std")]
type KeyLengthMap = HashMap<String, u32>;
#[cfg(not(feature = "std"))]
type KeyLengthMap = BTreeMap<String, u32>;

/// Per-row frames in the scroll axis.
///
/// Frames come either from the caller's `get_item_layout` (authoritative) or from estimates
/// refined by measurements. Measurements are cached by row key so they follow rows across data
/// changes.
#[derive(Clone, Debug, Default)]
pub(crate) struct RowFrames {
    frames: Vec<ItemLayout>,
    measured_by_key: KeyLengthMap,
    from_layout: bool,
}

impl RowFrames {
    /// Rebuilds frames from the caller's layout callback.
    pub(crate) fn rebuild_from_layout(
        &mut self,
        count: usize,
        mut layout: impl FnMut(usize) -> ItemLayout,
    ) {
        self.from_layout = true;
        self.frames.clear();
        self.frames.reserve_exact(count);
        for index in 0..count {
            let mut frame = layout(index);
            frame.index = index;
            self.frames.push(frame);
        }
    }

    /// Rebuilds frames from cached measurements, falling back to `estimate`.
    ///
    /// Measurements of keys no longer present are dropped.
    pub(crate) fn rebuild_estimated(
        &mut self,
        keys: impl IntoIterator<Item = String>,
        estimate: u32,
    ) {
        self.from_layout = false;
        self.frames.clear();
        let mut previous = core::mem::take(&mut self.measured_by_key);
        let mut offset = 0u64;
        for (index, key) in keys.into_iter().enumerate() {
            let length = match previous.remove(&key) {
                Some(length) => {
                    self.measured_by_key.insert(key, length);
                    length
                }
                None => self.measured_by_key.get(&key).copied().unwrap_or(estimate),
            };
            self.frames.push(ItemLayout {
                length,
                offset,
                index,
            });
            offset = offset.saturating_add(length as u64);
        }
    }

    /// Records a measured row length. Ignored when frames come from `get_item_layout`.
    ///
    /// Returns `true` when any frame moved.
    pub(crate) fn measure(&mut self, index: usize, key: String, length: u32) -> bool {
        if self.from_layout || index >= self.frames.len() {
            return false;
        }
        self.measured_by_key.insert(key, length);
        if self.frames[index].length == length {
            return false;
        }
        self.frames[index].length = length;
        let mut offset = self.frames[index].end();
        for frame in &mut self.frames[index + 1..] {
            frame.offset = offset;
            offset = offset.saturating_add(frame.length as u64);
        }
        true
    }

    #[cfg(test)]
    pub(crate) fn measured_len(&self) -> usize {
        self.measured_by_key.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.frames.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<ItemLayout> {
        self.frames.get(index).copied()
    }

    pub(crate) fn content_length(&self) -> u64 {
        self.frames.last().map_or(0, |frame| frame.end())
    }

    /// Index of the row containing `offset`, clamped to the last row.
    pub(crate) fn index_at_offset(&self, offset: u64) -> Option<usize> {
        if self.frames.is_empty() {
            return None;
        }
        let index = self.frames.partition_point(|frame| frame.end() <= offset);
        Some(index.min(self.frames.len() - 1))
    }
}
