use alloc::string::String;
use alloc::vec::Vec;

/// Viewability state of one entry, as reported to `on_viewable_items_changed`.
///
/// The list engine produces tokens per logical row (`I = LogicalRow`); the column adapter expands
/// them to one token per flat item (`I = &T`) before they reach the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewToken<I> {
    pub item: I,
    pub key: String,
    pub index: Option<usize>,
    pub is_viewable: bool,
}

impl<I> ViewToken<I> {
    /// Returns a copy of this token carrying a different item, key and index.
    pub fn with_item<J>(&self, item: J, key: String, index: usize) -> ViewToken<J> {
        ViewToken {
            item,
            key,
            index: Some(index),
            is_viewable: self.is_viewable,
        }
    }
}

/// One viewability change event: everything currently viewable plus what just changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewabilityChange<I> {
    pub viewable_items: Vec<ViewToken<I>>,
    pub changed: Vec<ViewToken<I>>,
}

impl<I> Default for ViewabilityChange<I> {
    fn default() -> Self {
        Self {
            viewable_items: Vec::new(),
            changed: Vec::new(),
        }
    }
}

/// Layout of a logical row in the scroll axis, as returned by `get_item_layout`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLayout {
    pub length: u32,
    /// Start offset in the scroll axis (separators included, if any).
    pub offset: u64,
    pub index: usize,
}

impl ItemLayout {
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.length as u64)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndReachedInfo {
    /// Distance between the trailing edge of the viewport and the end of the content. May be
    /// negative when the content is shorter than the viewport.
    pub distance_from_end: i64,
}

/// Arguments passed to the item separator renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeparatorProps {
    pub highlighted: bool,
    pub leading_index: usize,
    pub trailing_index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToEnd {
    pub animated: bool,
}

impl Default for ScrollToEnd {
    fn default() -> Self {
        Self { animated: true }
    }
}

/// Scrolls so that the item at flat `index` sits at `view_position` of the viewport
/// (`0.0` leading edge, `0.5` centered, `1.0` trailing edge), shifted by `view_offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToIndex {
    pub index: usize,
    pub animated: bool,
    pub view_position: f32,
    pub view_offset: i64,
}

impl ScrollToIndex {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            animated: true,
            view_position: 0.0,
            view_offset: 0,
        }
    }

    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn with_view_position(mut self, view_position: f32) -> Self {
        self.view_position = view_position;
        self
    }

    pub fn with_view_offset(mut self, view_offset: i64) -> Self {
        self.view_offset = view_offset;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollToItem<'a, T> {
    pub item: &'a T,
    pub animated: bool,
    pub view_position: f32,
}

impl<'a, T> ScrollToItem<'a, T> {
    pub fn new(item: &'a T) -> Self {
        Self {
            item,
            animated: true,
            view_position: 0.0,
        }
    }

    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn with_view_position(mut self, view_position: f32) -> Self {
        self.view_position = view_position;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToOffset {
    pub offset: u64,
    pub animated: bool,
}

impl ScrollToOffset {
    pub fn new(offset: u64) -> Self {
        Self {
            offset,
            animated: true,
        }
    }

    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }
}

/// Section-relative scroll target (legacy sectioned lists only).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToLocation {
    pub section_index: usize,
    pub item_index: usize,
    pub animated: bool,
    pub view_position: f32,
    pub view_offset: i64,
}
