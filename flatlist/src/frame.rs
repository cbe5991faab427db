use alloc::string::String;
use alloc::vec::Vec;

use crate::{ItemLayout, OnRefresh, Rendered};

/// Refresh wiring a list asks its host to attach to the scroll container.
#[derive(Clone)]
pub struct RefreshBinding {
    pub refreshing: bool,
    pub progress_view_offset: Option<u32>,
    pub on_refresh: OnRefresh,
}

impl core::fmt::Debug for RefreshBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RefreshBinding")
            .field("refreshing", &self.refreshing)
            .field("progress_view_offset", &self.progress_view_offset)
            .finish_non_exhaustive()
    }
}

/// A rendered logical row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowCell<E, S> {
    pub key: String,
    /// Row index (equal to the flat index for single column lists).
    pub index: usize,
    /// Position in the scroll axis; `None` when the backend does not lay rows out.
    pub layout: Option<ItemLayout>,
    pub content: Option<Rendered<E, S>>,
    /// Separator rendered after this row, if any.
    pub separator: Option<E>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameCell<E, S> {
    Row(RowCell<E, S>),
    SectionHeader {
        key: String,
        section: usize,
        element: Option<E>,
    },
}

/// Everything a list produced for one render pass, in display order.
#[derive(Clone, Debug)]
pub struct ListFrame<E, S> {
    pub header: Option<E>,
    pub cells: Vec<FrameCell<E, S>>,
    pub footer: Option<E>,
    /// Rendered instead of rows when there is no data.
    pub empty: Option<E>,
    pub content_length: u64,
    pub horizontal: bool,
    pub inverted: bool,
    pub refresh_control: Option<RefreshBinding>,
}

impl<E, S> ListFrame<E, S> {
    pub fn rows(&self) -> impl Iterator<Item = &RowCell<E, S>> {
        self.cells.iter().filter_map(|cell| match cell {
            FrameCell::Row(row) => Some(row),
            FrameCell::SectionHeader { .. } => None,
        })
    }

    pub fn row_keys(&self) -> Vec<&str> {
        self.rows().map(|row| row.key.as_str()).collect()
    }
}
