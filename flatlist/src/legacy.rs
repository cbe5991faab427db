use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::key::index_key_extractor;
use crate::{
    Error, FlatListProps, FrameCell, KeyExtractor, ListFrame, NativeProps, OnRefresh,
    RefreshBinding, RenderInfo, RenderItem, RenderSeparator, RenderStatic, Rendered, Result,
    RowCell, ScrollHandle, ScrollToEnd, ScrollToIndex, ScrollToItem, ScrollToLocation,
    ScrollToOffset, ScrollView, ScrollableNode, SeparatorHighlights, SeparatorProps,
};

/// Renders a section header in the legacy list.
pub type RenderSectionHeader<T, E> = Arc<dyn Fn(&LegacySection<T>) -> Option<E> + Send + Sync>;

/// A titled group of items for [`LegacySource::Sections`].
#[derive(Debug)]
pub struct LegacySection<T> {
    pub key: String,
    pub data: Arc<[T]>,
}

impl<T> Clone for LegacySection<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            data: Arc::clone(&self.data),
        }
    }
}

impl<T> LegacySection<T> {
    pub fn new(key: impl Into<String>, data: impl Into<Arc<[T]>>) -> Self {
        Self {
            key: key.into(),
            data: data.into(),
        }
    }
}

/// What the legacy list renders: a flat item list or sections.
#[derive(Debug)]
pub enum LegacySource<T> {
    Items(Option<Arc<[T]>>),
    Sections(Vec<LegacySection<T>>),
}

impl<T> Clone for LegacySource<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Items(items) => Self::Items(items.clone()),
            Self::Sections(sections) => Self::Sections(sections.clone()),
        }
    }
}

/// Props of the legacy sequential list.
pub struct LegacyListProps<T, E> {
    pub source: LegacySource<T>,
    pub render_item: RenderItem<T, E>,
    pub key_extractor: KeyExtractor<T>,
    pub render_section_header: Option<RenderSectionHeader<T, E>>,
    pub footer: Option<RenderStatic<E>>,
    pub separator: Option<RenderSeparator<E>>,
    pub horizontal: bool,
    pub refreshing: Option<bool>,
    pub on_refresh: Option<OnRefresh>,
    pub progress_view_offset: Option<u32>,
}

impl<T, E> LegacyListProps<T, E> {
    pub fn new(
        source: LegacySource<T>,
        render_item: impl Fn(RenderInfo<'_, &T>) -> Option<E> + Send + Sync + 'static,
    ) -> Self {
        Self {
            source,
            render_item: Arc::new(render_item),
            key_extractor: index_key_extractor(),
            render_section_header: None,
            footer: None,
            separator: None,
            horizontal: false,
            refreshing: None,
            on_refresh: None,
            progress_view_offset: None,
        }
    }

    /// Maps list props onto the legacy list.
    ///
    /// Only the footer and the item separator carry over; the legacy list has no header or
    /// empty-state slot.
    pub fn from_flat<S>(props: &FlatListProps<T, E, S>) -> Self {
        Self {
            source: LegacySource::Items(props.data.clone()),
            render_item: Arc::clone(&props.render_item),
            key_extractor: Arc::clone(&props.key_extractor),
            render_section_header: None,
            footer: props.list_footer.clone(),
            separator: props.item_separator.clone(),
            horizontal: props.horizontal,
            refreshing: props.refreshing,
            on_refresh: props.on_refresh.clone(),
            progress_view_offset: props.progress_view_offset,
        }
    }

    pub fn with_key_extractor(
        mut self,
        key_extractor: impl Fn(&T, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.key_extractor = Arc::new(key_extractor);
        self
    }

    pub fn with_render_section_header(
        mut self,
        f: Option<impl Fn(&LegacySection<T>) -> Option<E> + Send + Sync + 'static>,
    ) -> Self {
        self.render_section_header = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_footer(mut self, f: Option<impl Fn() -> E + Send + Sync + 'static>) -> Self {
        self.footer = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_separator(
        mut self,
        f: Option<impl Fn(SeparatorProps) -> E + Send + Sync + 'static>,
    ) -> Self {
        self.separator = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn with_refresh(
        mut self,
        refreshing: bool,
        on_refresh: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.refreshing = Some(refreshing);
        self.on_refresh = Some(Arc::new(on_refresh));
        self
    }

    fn check(&self) -> Result<()> {
        if matches!(self.source, LegacySource::Sections(_)) && self.render_section_header.is_none()
        {
            return Err(Error::MissingSectionHeaderRenderer);
        }
        Ok(())
    }
}

impl<T, E> Clone for LegacyListProps<T, E> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            render_item: Arc::clone(&self.render_item),
            key_extractor: Arc::clone(&self.key_extractor),
            render_section_header: self.render_section_header.clone(),
            footer: self.footer.clone(),
            separator: self.separator.clone(),
            horizontal: self.horizontal,
            refreshing: self.refreshing,
            on_refresh: self.on_refresh.clone(),
            progress_view_offset: self.progress_view_offset,
        }
    }
}

impl<T, E> core::fmt::Debug for LegacyListProps<T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (items, sections) = match &self.source {
            LegacySource::Items(items) => (items.as_ref().map(|items| items.len()), None),
            LegacySource::Sections(sections) => (None, Some(sections.len())),
        };
        f.debug_struct("LegacyListProps")
            .field("items", &items)
            .field("sections", &sections)
            .field("horizontal", &self.horizontal)
            .field("refreshing", &self.refreshing)
            .finish_non_exhaustive()
    }
}

/// Sequential, non-windowed list.
///
/// Every row is rendered on every pass. Only the scroll operations that need no layout
/// knowledge are available; the others fail with [`Error::Unsupported`].
pub struct LegacyList<T, E> {
    props: LegacyListProps<T, E>,
    scroll: ScrollView,
    highlights: SeparatorHighlights,
}

impl<T, E> LegacyList<T, E> {
    pub fn new(props: LegacyListProps<T, E>) -> Result<Self> {
        props.check()?;
        let scroll = ScrollView::new(props.horizontal);
        Ok(Self {
            props,
            scroll,
            highlights: SeparatorHighlights::new(),
        })
    }

    pub fn from_flat_props<S>(props: &FlatListProps<T, E, S>) -> Result<Self> {
        Self::new(LegacyListProps::from_flat(props))
    }

    pub fn props(&self) -> &LegacyListProps<T, E> {
        &self.props
    }

    pub fn set_props(&mut self, props: LegacyListProps<T, E>) -> Result<()> {
        props.check()?;
        self.scroll.set_horizontal(props.horizontal);
        self.props = props;
        Ok(())
    }

    pub fn set_flat_props<S>(&mut self, props: &FlatListProps<T, E, S>) -> Result<()> {
        self.set_props(LegacyListProps::from_flat(props))
    }

    pub fn on_layout(&mut self, visible_length: u32) {
        self.scroll.set_visible_length(visible_length);
    }

    pub fn on_content_size_change(&mut self, content_length: u64) {
        self.scroll.set_content_length(content_length);
    }

    pub fn on_scroll(&mut self, offset: u64) {
        self.scroll.on_scroll(offset);
    }

    pub fn scroll_to_location(&mut self, _params: ScrollToLocation) -> Result<()> {
        Err(unsupported("scroll_to_location"))
    }

    pub fn render<S>(&self) -> Result<ListFrame<E, S>> {
        let props = &self.props;
        let mut cells = Vec::new();
        let mut position = 0;
        match &props.source {
            LegacySource::Items(items) => {
                let items = items.as_deref().unwrap_or_default();
                self.render_rows(None, items, &mut position, &mut cells);
            }
            LegacySource::Sections(sections) => {
                let render_header = props
                    .render_section_header
                    .as_ref()
                    .ok_or(Error::MissingSectionHeaderRenderer)?;
                for (index, section) in sections.iter().enumerate() {
                    cells.push(FrameCell::SectionHeader {
                        key: section.key.clone(),
                        section: index,
                        element: render_header(section),
                    });
                    self.render_rows(
                        Some(section.key.as_str()),
                        &section.data,
                        &mut position,
                        &mut cells,
                    );
                }
            }
        }

        Ok(ListFrame {
            header: None,
            cells,
            footer: props.footer.as_ref().map(|render| render()),
            empty: None,
            content_length: self.scroll.content_length(),
            horizontal: props.horizontal,
            inverted: false,
            refresh_control: props.on_refresh.as_ref().map(|on_refresh| RefreshBinding {
                refreshing: props.refreshing.unwrap_or(false),
                progress_view_offset: props.progress_view_offset,
                on_refresh: Arc::clone(on_refresh),
            }),
        })
    }

    /// Renders one run of rows. Separators go between rows of the same run only.
    ///
    /// Rows of a section are keyed `{section}:{key}` so keys stay unique across sections.
    fn render_rows<S>(
        &self,
        section: Option<&str>,
        items: &[T],
        position: &mut usize,
        cells: &mut Vec<FrameCell<E, S>>,
    ) {
        for (index, item) in items.iter().enumerate() {
            let slot = *position + index;
            let content = (self.props.render_item)(RenderInfo {
                item,
                index,
                separators: self.highlights.separators(slot),
            })
            .map(Rendered::Item);
            let separator = match &self.props.separator {
                Some(render) if index + 1 < items.len() => Some(render(SeparatorProps {
                    highlighted: self.highlights.is_separator_highlighted(slot),
                    leading_index: index,
                    trailing_index: index + 1,
                })),
                _ => None,
            };
            let key = (self.props.key_extractor)(item, index);
            cells.push(FrameCell::Row(RowCell {
                key: match section {
                    Some(section) => format!("{section}:{key}"),
                    None => key,
                },
                index,
                layout: None,
                content,
                separator,
            }));
        }
        *position += items.len();
    }
}

fn unsupported(operation: &'static str) -> Error {
    lwarn!(operation, "unsupported by the legacy list");
    Error::Unsupported { operation }
}

impl<T, E> ScrollHandle<T> for LegacyList<T, E> {
    fn scroll_to_end(&mut self, _params: ScrollToEnd) -> Result<()> {
        Err(unsupported("scroll_to_end"))
    }

    fn scroll_to_index(&mut self, _params: ScrollToIndex) -> Result<()> {
        Err(unsupported("scroll_to_index"))
    }

    fn scroll_to_item(&mut self, _params: ScrollToItem<'_, T>) -> Result<()>
    where
        T: PartialEq,
    {
        Err(unsupported("scroll_to_item"))
    }

    fn scroll_to_offset(&mut self, params: ScrollToOffset) -> Result<()> {
        self.scroll.scroll_to(params.offset, params.animated);
        Ok(())
    }

    fn record_interaction(&mut self) -> Result<()> {
        Err(unsupported("record_interaction"))
    }

    fn flash_scroll_indicators(&mut self) {
        self.scroll.flash_indicators();
    }

    fn scroll_responder(&self) -> &ScrollView {
        &self.scroll
    }

    fn scrollable_node(&self) -> ScrollableNode {
        self.scroll.node()
    }

    fn set_native_props(&mut self, props: NativeProps) {
        self.scroll.apply_native_props(props);
    }
}

impl<T, E> core::fmt::Debug for LegacyList<T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LegacyList")
            .field("props", &self.props)
            .field("scroll", &self.scroll)
            .finish_non_exhaustive()
    }
}
