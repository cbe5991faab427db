//! A headless FlatList layer.
//!
//! `flatlist` sits between a host UI and a windowed list engine. It owns the list-level
//! contract: prop validation, grouping flat data into multi-column rows, deriving stable row
//! keys, rendering rows through a per-item callback and translating row viewability back into
//! per-item events. A legacy sequential list is available behind `legacy_implementation`.
//!
//! The crate is UI-agnostic. The host is expected to provide:
//! - element values (`E`) produced by the render callbacks
//! - viewport length and scroll offset
//! - measured row lengths, unless `get_item_layout` is given
//!
//! For pull-to-refresh, see the `flatlist-refresh` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adapter;
mod backend;
mod columns;
mod error;
mod flat_list;
mod frame;
mod key;
mod layout;
mod legacy;
mod props;
mod row;
mod scroll;
mod types;
mod viewability;
mod viewable;
mod virtualized;
mod window;

#[cfg(test)]
mod tests;

pub use adapter::ColumnAdapter;
pub use backend::{ListBackend, ScrollHandle};
pub use columns::{Columns, LogicalRow};
pub use error::{Error, Result};
pub use flat_list::FlatList;
pub use frame::{FrameCell, ListFrame, RefreshBinding, RowCell};
pub use key::{ItemKey, KeyExtractor, key_for, member_key};
pub use legacy::{LegacyList, LegacyListProps, LegacySection, LegacySource, RenderSectionHeader};
pub use props::{
    DEFAULT_ESTIMATED_ITEM_LENGTH, DEFAULT_INITIAL_NUM_TO_RENDER,
    DEFAULT_ON_END_REACHED_THRESHOLD, DEFAULT_WINDOW_SIZE, FlatListProps, GetItem, GetItemCount,
    GetItemLayout, OnEndReached, OnRefresh, RenderSeparator, RenderStatic, check_props,
};
pub use row::{
    ColumnCell, ColumnRow, RenderInfo, RenderItem, Rendered, SeparatorHighlights, Separators,
    render_row,
};
pub use scroll::{NativeProps, ScrollView, ScrollableNode};
pub use types::{
    EndReachedInfo, ItemLayout, ScrollToEnd, ScrollToIndex, ScrollToItem, ScrollToLocation,
    ScrollToOffset, SeparatorProps, ViewToken, ViewabilityChange,
};
pub use viewability::ViewabilityConfig;
pub use viewable::{OnViewableItemsChanged, dispatch, remap};
pub use virtualized::VirtualizedList;
