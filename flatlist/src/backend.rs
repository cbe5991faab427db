use crate::{
    FlatListProps, LegacyList, ListFrame, NativeProps, Result, ScrollToEnd, ScrollToIndex,
    ScrollToItem, ScrollToOffset, ScrollView, ScrollableNode, VirtualizedList,
};

/// Imperative operations a mounted list exposes to its owner.
pub trait ScrollHandle<T> {
    /// Scrolls to the end of the content.
    fn scroll_to_end(&mut self, params: ScrollToEnd) -> Result<()>;

    /// Scrolls so the item at `params.index` sits at `params.view_position` of the viewport
    /// (0 = start, 0.5 = middle, 1 = end), shifted back by `params.view_offset`.
    fn scroll_to_index(&mut self, params: ScrollToIndex) -> Result<()>;

    /// Like [`ScrollHandle::scroll_to_index`], locating the item by a linear equality scan.
    fn scroll_to_item(&mut self, params: ScrollToItem<'_, T>) -> Result<()>
    where
        T: PartialEq;

    fn scroll_to_offset(&mut self, params: ScrollToOffset) -> Result<()>;

    /// Marks that the user interacted with the list, for `wait_for_interaction` viewability.
    fn record_interaction(&mut self) -> Result<()>;

    fn flash_scroll_indicators(&mut self);

    fn scroll_responder(&self) -> &ScrollView;

    fn scrollable_node(&self) -> ScrollableNode;

    fn set_native_props(&mut self, props: NativeProps);
}

/// The list implementation backing a [`crate::FlatList`], chosen by `legacy_implementation`.
pub enum ListBackend<T, E, S = ()> {
    Virtualized(VirtualizedList<T, E, S>),
    Legacy(LegacyList<T, E>),
}

impl<T, E, S> core::fmt::Debug for ListBackend<T, E, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Virtualized(list) => f.debug_tuple("Virtualized").field(list).finish(),
            Self::Legacy(list) => f.debug_tuple("Legacy").field(list).finish(),
        }
    }
}

impl<T, E, S: Clone> ListBackend<T, E, S> {
    pub fn new(props: FlatListProps<T, E, S>) -> Result<Self> {
        if props.legacy_implementation {
            LegacyList::from_flat_props(&props).map(Self::Legacy)
        } else {
            VirtualizedList::new(props).map(Self::Virtualized)
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }

    pub fn set_props(&mut self, props: FlatListProps<T, E, S>) -> Result<()> {
        match self {
            Self::Virtualized(list) => list.set_props(props),
            Self::Legacy(list) => list.set_flat_props(&props),
        }
    }

    pub fn on_layout(&mut self, visible_length: u32) -> Result<()> {
        match self {
            Self::Virtualized(list) => list.on_layout(visible_length),
            Self::Legacy(list) => {
                list.on_layout(visible_length);
                Ok(())
            }
        }
    }

    pub fn on_scroll(&mut self, offset: u64) -> Result<()> {
        match self {
            Self::Virtualized(list) => list.on_scroll(offset),
            Self::Legacy(list) => {
                list.on_scroll(offset);
                Ok(())
            }
        }
    }

    /// Row measurements only feed the virtualized engine; the legacy list takes its content
    /// length as a whole through [`LegacyList::on_content_size_change`].
    pub fn measure_row(&mut self, row: usize, length: u32) -> Result<()> {
        match self {
            Self::Virtualized(list) => list.measure_row(row, length),
            Self::Legacy(_) => Ok(()),
        }
    }

    pub fn render(&self) -> Result<ListFrame<E, S>> {
        match self {
            Self::Virtualized(list) => list.render(),
            Self::Legacy(list) => list.render(),
        }
    }
}

impl<T, E, S: Clone> ScrollHandle<T> for ListBackend<T, E, S> {
    fn scroll_to_end(&mut self, params: ScrollToEnd) -> Result<()> {
        match self {
            Self::Virtualized(list) => list.scroll_to_end(params),
            Self::Legacy(list) => list.scroll_to_end(params),
        }
    }

    fn scroll_to_index(&mut self, params: ScrollToIndex) -> Result<()> {
        match self {
            Self::Virtualized(list) => list.scroll_to_index(params),
            Self::Legacy(list) => list.scroll_to_index(params),
        }
    }

    fn scroll_to_item(&mut self, params: ScrollToItem<'_, T>) -> Result<()>
    where
        T: PartialEq,
    {
        match self {
            Self::Virtualized(list) => list.scroll_to_item(params),
            Self::Legacy(list) => list.scroll_to_item(params),
        }
    }

    fn scroll_to_offset(&mut self, params: ScrollToOffset) -> Result<()> {
        match self {
            Self::Virtualized(list) => list.scroll_to_offset(params),
            Self::Legacy(list) => list.scroll_to_offset(params),
        }
    }

    fn record_interaction(&mut self) -> Result<()> {
        match self {
            Self::Virtualized(list) => list.record_interaction(),
            Self::Legacy(list) => list.record_interaction(),
        }
    }

    fn flash_scroll_indicators(&mut self) {
        match self {
            Self::Virtualized(list) => list.flash_scroll_indicators(),
            Self::Legacy(list) => list.flash_scroll_indicators(),
        }
    }

    fn scroll_responder(&self) -> &ScrollView {
        match self {
            Self::Virtualized(list) => list.scroll_responder(),
            Self::Legacy(list) => list.scroll_responder(),
        }
    }

    fn scrollable_node(&self) -> ScrollableNode {
        match self {
            Self::Virtualized(list) => list.scrollable_node(),
            Self::Legacy(list) => list.scrollable_node(),
        }
    }

    fn set_native_props(&mut self, props: NativeProps) {
        match self {
            Self::Virtualized(list) => list.set_native_props(props),
            Self::Legacy(list) => list.set_native_props(props),
        }
    }
}
