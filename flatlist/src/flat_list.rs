use crate::{
    Error, FlatListProps, ListBackend, ListFrame, NativeProps, Result, ScrollHandle, ScrollToEnd,
    ScrollToIndex, ScrollToItem, ScrollToOffset, ScrollView, ScrollableNode, check_props,
};

/// A list of `T` rendered into host elements `E`, optionally grouped into columns.
///
/// `FlatList` validates its props, picks a backend once and forwards everything else. The
/// number of columns is fixed for the lifetime of an instance.
///
/// # Example
///
/// ```rust
/// use flatlist::{FlatList, FlatListProps};
///
/// let props = FlatListProps::<u32, u32>::new(|info| Some(*info.item * 10))
///     .with_data(vec![1, 2, 3, 4, 5])
///     .with_num_columns(2);
/// let mut list = FlatList::new(props).unwrap();
/// list.on_layout(400).unwrap();
///
/// let frame = list.render().unwrap();
/// assert_eq!(frame.row_keys(), ["0:1", "2:3", "4"]);
/// ```
pub struct FlatList<T, E, S = ()> {
    props: FlatListProps<T, E, S>,
    backend: ListBackend<T, E, S>,
}

impl<T, E, S: Clone> FlatList<T, E, S> {
    pub fn new(props: FlatListProps<T, E, S>) -> Result<Self> {
        check_props(&props)?;
        let backend = ListBackend::new(props.clone())?;
        ldebug!(
            len = props.data().map(<[T]>::len),
            num_columns = props.num_columns,
            legacy = backend.is_legacy(),
            "flat list created"
        );
        Ok(Self { props, backend })
    }

    pub fn props(&self) -> &FlatListProps<T, E, S> {
        &self.props
    }

    pub fn backend(&self) -> &ListBackend<T, E, S> {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut ListBackend<T, E, S> {
        &mut self.backend
    }

    /// Applies new props.
    ///
    /// Fails without touching the current state if `num_columns` changed or the new props do
    /// not validate. Flipping `legacy_implementation` replaces the backend.
    pub fn set_props(&mut self, props: FlatListProps<T, E, S>) -> Result<()> {
        if props.num_columns != self.props.num_columns {
            return Err(Error::NumColumnsChanged {
                from: self.props.num_columns,
                to: props.num_columns,
            });
        }
        check_props(&props)?;

        if props.legacy_implementation != self.backend.is_legacy() {
            ldebug!(legacy = props.legacy_implementation, "switching backend");
            self.backend = ListBackend::new(props.clone())?;
        } else {
            self.backend.set_props(props.clone())?;
        }
        self.props = props;
        Ok(())
    }

    pub fn on_layout(&mut self, visible_length: u32) -> Result<()> {
        self.backend.on_layout(visible_length)
    }

    pub fn on_scroll(&mut self, offset: u64) -> Result<()> {
        self.backend.on_scroll(offset)
    }

    pub fn measure_row(&mut self, row: usize, length: u32) -> Result<()> {
        self.backend.measure_row(row, length)
    }

    pub fn render(&self) -> Result<ListFrame<E, S>> {
        self.backend.render()
    }
}

impl<T, E, S: Clone> ScrollHandle<T> for FlatList<T, E, S> {
    fn scroll_to_end(&mut self, params: ScrollToEnd) -> Result<()> {
        self.backend.scroll_to_end(params)
    }

    fn scroll_to_index(&mut self, params: ScrollToIndex) -> Result<()> {
        self.backend.scroll_to_index(params)
    }

    fn scroll_to_item(&mut self, params: ScrollToItem<'_, T>) -> Result<()>
    where
        T: PartialEq,
    {
        self.backend.scroll_to_item(params)
    }

    fn scroll_to_offset(&mut self, params: ScrollToOffset) -> Result<()> {
        self.backend.scroll_to_offset(params)
    }

    fn record_interaction(&mut self) -> Result<()> {
        self.backend.record_interaction()
    }

    fn flash_scroll_indicators(&mut self) {
        self.backend.flash_scroll_indicators();
    }

    fn scroll_responder(&self) -> &ScrollView {
        self.backend.scroll_responder()
    }

    fn scrollable_node(&self) -> ScrollableNode {
        self.backend.scrollable_node()
    }

    fn set_native_props(&mut self, props: NativeProps) {
        self.backend.set_native_props(props);
    }
}

impl<T, E, S> core::fmt::Debug for FlatList<T, E, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatList")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}
