use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::key::{index_key_extractor, item_key_extractor};
use crate::{
    EndReachedInfo, Error, ItemKey, ItemLayout, KeyExtractor, OnViewableItemsChanged, RenderInfo,
    RenderItem, Result, SeparatorProps, ViewabilityChange, ViewabilityConfig,
};

/// Returns the layout of a logical row: `(data, row_index) -> layout`.
pub type GetItemLayout<T> = Arc<dyn Fn(Option<&[T]>, usize) -> ItemLayout + Send + Sync>;
/// Custom item accessor. Always rejected by [`check_props`]; rows come from `data`.
pub type GetItem<T> = Arc<dyn Fn(&[T], usize) -> Option<T> + Send + Sync>;
/// Custom item count accessor. Always rejected by [`check_props`].
pub type GetItemCount<T> = Arc<dyn Fn(Option<&[T]>) -> usize + Send + Sync>;
pub type OnEndReached = Arc<dyn Fn(EndReachedInfo) + Send + Sync>;
pub type OnRefresh = Arc<dyn Fn() + Send + Sync>;
/// Renders a header, footer or empty-state element.
pub type RenderStatic<E> = Arc<dyn Fn() -> E + Send + Sync>;
pub type RenderSeparator<E> = Arc<dyn Fn(SeparatorProps) -> E + Send + Sync>;

pub const DEFAULT_INITIAL_NUM_TO_RENDER: usize = 10;
pub const DEFAULT_WINDOW_SIZE: usize = 21;
pub const DEFAULT_ON_END_REACHED_THRESHOLD: f32 = 2.0;
pub const DEFAULT_ESTIMATED_ITEM_LENGTH: u32 = 50;

static WARNED_LEGACY: AtomicBool = AtomicBool::new(false);

/// Configuration for [`crate::FlatList`].
///
/// Like the engine options it feeds, this type is cheap to clone: callbacks and data live in
/// `Arc`s, so a host can tweak a few fields and call `FlatList::set_props` each frame.
///
/// `E` is the host's element type produced by the render callbacks, `S` the opaque style
/// applied to the horizontal container of multi-column rows.
pub struct FlatListProps<T, E, S = ()> {
    pub data: Option<Arc<[T]>>,
    pub render_item: RenderItem<T, E>,
    pub key_extractor: KeyExtractor<T>,
    /// Fixed for the lifetime of a list instance.
    pub num_columns: usize,
    /// Only valid with `num_columns > 1`.
    pub column_wrapper_style: Option<S>,
    /// Mutually exclusive with `num_columns > 1`.
    pub horizontal: bool,
    /// Renders through the legacy sequential list. Only valid with `num_columns == 1`.
    pub legacy_implementation: bool,
    pub on_viewable_items_changed: Option<OnViewableItemsChanged<T>>,
    pub viewability_config: ViewabilityConfig,

    /// Rows rendered before the viewport is known. Unless `initial_scroll_index` is set these
    /// rows are never windowed out.
    pub initial_num_to_render: usize,
    pub initial_scroll_index: Option<usize>,
    pub get_item_layout: Option<GetItemLayout<T>>,
    /// Row length used until a row is measured, when `get_item_layout` is not provided.
    pub estimated_item_length: u32,
    /// Render window, in units of visible length (centered on the viewport).
    pub window_size: usize,
    pub on_end_reached: Option<OnEndReached>,
    /// Distance from the end, in units of visible length, that triggers `on_end_reached`.
    pub on_end_reached_threshold: f32,

    /// Required whenever `on_refresh` is set.
    pub refreshing: Option<bool>,
    pub on_refresh: Option<OnRefresh>,
    pub progress_view_offset: Option<u32>,

    pub inverted: bool,
    pub remove_clipped_subviews: bool,

    pub list_header: Option<RenderStatic<E>>,
    pub list_footer: Option<RenderStatic<E>>,
    pub list_empty: Option<RenderStatic<E>>,
    pub item_separator: Option<RenderSeparator<E>>,

    /// Revision marker for state outside of `data` that render callbacks depend on.
    pub extra_data: u64,

    pub get_item: Option<GetItem<T>>,
    pub get_item_count: Option<GetItemCount<T>>,
}

impl<T, E, S> FlatListProps<T, E, S> {
    /// Creates props with no data, one column and items keyed by index.
    pub fn new(
        render_item: impl Fn(RenderInfo<'_, &T>) -> Option<E> + Send + Sync + 'static,
    ) -> Self {
        Self {
            data: None,
            render_item: Arc::new(render_item),
            key_extractor: index_key_extractor(),
            num_columns: 1,
            column_wrapper_style: None,
            horizontal: false,
            legacy_implementation: false,
            on_viewable_items_changed: None,
            viewability_config: ViewabilityConfig::default(),
            initial_num_to_render: DEFAULT_INITIAL_NUM_TO_RENDER,
            initial_scroll_index: None,
            get_item_layout: None,
            estimated_item_length: DEFAULT_ESTIMATED_ITEM_LENGTH,
            window_size: DEFAULT_WINDOW_SIZE,
            on_end_reached: None,
            on_end_reached_threshold: DEFAULT_ON_END_REACHED_THRESHOLD,
            refreshing: None,
            on_refresh: None,
            progress_view_offset: None,
            inverted: false,
            remove_clipped_subviews: false,
            list_header: None,
            list_footer: None,
            list_empty: None,
            item_separator: None,
            extra_data: 0,
            get_item: None,
            get_item_count: None,
        }
    }

    pub fn with_data(mut self, data: impl Into<Arc<[T]>>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn without_data(mut self) -> Self {
        self.data = None;
        self
    }

    pub fn data(&self) -> Option<&[T]> {
        self.data.as_deref()
    }

    pub fn with_render_item(
        mut self,
        render_item: impl Fn(RenderInfo<'_, &T>) -> Option<E> + Send + Sync + 'static,
    ) -> Self {
        self.render_item = Arc::new(render_item);
        self
    }

    pub fn with_key_extractor(
        mut self,
        key_extractor: impl Fn(&T, usize) -> alloc::string::String + Send + Sync + 'static,
    ) -> Self {
        self.key_extractor = Arc::new(key_extractor);
        self
    }

    /// Keys items by [`ItemKey::item_key`], falling back to the flat index.
    pub fn with_item_keys(mut self) -> Self
    where
        T: ItemKey,
    {
        self.key_extractor = item_key_extractor();
        self
    }

    pub fn with_num_columns(mut self, num_columns: usize) -> Self {
        self.num_columns = num_columns;
        self
    }

    pub fn with_column_wrapper_style(mut self, style: Option<S>) -> Self {
        self.column_wrapper_style = style;
        self
    }

    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn with_legacy_implementation(mut self, legacy_implementation: bool) -> Self {
        self.legacy_implementation = legacy_implementation;
        self
    }

    pub fn with_on_viewable_items_changed(
        mut self,
        f: Option<impl Fn(ViewabilityChange<&T>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_viewable_items_changed = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_viewability_config(mut self, config: ViewabilityConfig) -> Self {
        self.viewability_config = config;
        self
    }

    pub fn with_initial_num_to_render(mut self, initial_num_to_render: usize) -> Self {
        self.initial_num_to_render = initial_num_to_render;
        self
    }

    pub fn with_initial_scroll_index(mut self, initial_scroll_index: Option<usize>) -> Self {
        self.initial_scroll_index = initial_scroll_index;
        self
    }

    pub fn with_get_item_layout(
        mut self,
        f: Option<impl Fn(Option<&[T]>, usize) -> ItemLayout + Send + Sync + 'static>,
    ) -> Self {
        self.get_item_layout = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_estimated_item_length(mut self, length: u32) -> Self {
        self.estimated_item_length = length;
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_on_end_reached(
        mut self,
        f: Option<impl Fn(EndReachedInfo) + Send + Sync + 'static>,
    ) -> Self {
        self.on_end_reached = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_end_reached_threshold(mut self, threshold: f32) -> Self {
        self.on_end_reached_threshold = threshold;
        self
    }

    pub fn with_refreshing(mut self, refreshing: Option<bool>) -> Self {
        self.refreshing = refreshing;
        self
    }

    pub fn with_on_refresh(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_refresh = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_progress_view_offset(mut self, offset: Option<u32>) -> Self {
        self.progress_view_offset = offset;
        self
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn with_remove_clipped_subviews(mut self, remove_clipped_subviews: bool) -> Self {
        self.remove_clipped_subviews = remove_clipped_subviews;
        self
    }

    pub fn with_list_header(mut self, f: Option<impl Fn() -> E + Send + Sync + 'static>) -> Self {
        self.list_header = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_list_footer(mut self, f: Option<impl Fn() -> E + Send + Sync + 'static>) -> Self {
        self.list_footer = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_list_empty(mut self, f: Option<impl Fn() -> E + Send + Sync + 'static>) -> Self {
        self.list_empty = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_item_separator(
        mut self,
        f: Option<impl Fn(SeparatorProps) -> E + Send + Sync + 'static>,
    ) -> Self {
        self.item_separator = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_extra_data(mut self, extra_data: u64) -> Self {
        self.extra_data = extra_data;
        self
    }

    pub fn with_get_item(
        mut self,
        f: Option<impl Fn(&[T], usize) -> Option<T> + Send + Sync + 'static>,
    ) -> Self {
        self.get_item = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_get_item_count(
        mut self,
        f: Option<impl Fn(Option<&[T]>) -> usize + Send + Sync + 'static>,
    ) -> Self {
        self.get_item_count = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl<T, E, S: Clone> Clone for FlatListProps<T, E, S> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            render_item: Arc::clone(&self.render_item),
            key_extractor: Arc::clone(&self.key_extractor),
            num_columns: self.num_columns,
            column_wrapper_style: self.column_wrapper_style.clone(),
            horizontal: self.horizontal,
            legacy_implementation: self.legacy_implementation,
            on_viewable_items_changed: self.on_viewable_items_changed.clone(),
            viewability_config: self.viewability_config,
            initial_num_to_render: self.initial_num_to_render,
            initial_scroll_index: self.initial_scroll_index,
            get_item_layout: self.get_item_layout.clone(),
            estimated_item_length: self.estimated_item_length,
            window_size: self.window_size,
            on_end_reached: self.on_end_reached.clone(),
            on_end_reached_threshold: self.on_end_reached_threshold,
            refreshing: self.refreshing,
            on_refresh: self.on_refresh.clone(),
            progress_view_offset: self.progress_view_offset,
            inverted: self.inverted,
            remove_clipped_subviews: self.remove_clipped_subviews,
            list_header: self.list_header.clone(),
            list_footer: self.list_footer.clone(),
            list_empty: self.list_empty.clone(),
            item_separator: self.item_separator.clone(),
            extra_data: self.extra_data,
            get_item: self.get_item.clone(),
            get_item_count: self.get_item_count.clone(),
        }
    }
}

impl<T, E, S> core::fmt::Debug for FlatListProps<T, E, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatListProps")
            .field("len", &self.data.as_ref().map(|data| data.len()))
            .field("num_columns", &self.num_columns)
            .field("has_column_wrapper_style", &self.column_wrapper_style.is_some())
            .field("horizontal", &self.horizontal)
            .field("legacy_implementation", &self.legacy_implementation)
            .field("viewability_config", &self.viewability_config)
            .field("initial_num_to_render", &self.initial_num_to_render)
            .field("initial_scroll_index", &self.initial_scroll_index)
            .field("estimated_item_length", &self.estimated_item_length)
            .field("window_size", &self.window_size)
            .field("on_end_reached_threshold", &self.on_end_reached_threshold)
            .field("refreshing", &self.refreshing)
            .field("progress_view_offset", &self.progress_view_offset)
            .field("inverted", &self.inverted)
            .field("remove_clipped_subviews", &self.remove_clipped_subviews)
            .field("extra_data", &self.extra_data)
            .finish_non_exhaustive()
    }
}

/// Validates a configuration before anything is rendered.
pub fn check_props<T, E, S>(props: &FlatListProps<T, E, S>) -> Result<()> {
    if props.get_item.is_some() || props.get_item_count.is_some() {
        return Err(Error::CustomDataFormat);
    }
    if props.num_columns == 0 {
        return Err(Error::InvalidNumColumns);
    }
    if props.num_columns > 1 {
        if props.horizontal {
            return Err(Error::HorizontalColumns);
        }
    } else if props.column_wrapper_style.is_some() {
        return Err(Error::ColumnWrapperStyleSingleColumn);
    }
    if props.on_refresh.is_some() && props.refreshing.is_none() {
        return Err(Error::RefreshingRequired);
    }
    props.viewability_config.validate()?;

    if props.legacy_implementation {
        if props.num_columns != 1 {
            return Err(Error::LegacyMultipleColumns);
        }
        if !WARNED_LEGACY.swap(true, Ordering::Relaxed) {
            lwarn!(
                "FlatList: using legacy_implementation - some features are not supported and \
                 performance may suffer"
            );
        }
    }
    Ok(())
}
