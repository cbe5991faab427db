use crate::*;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use alloc::{format, vec};
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use pretty_assertions::assert_eq;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Keyed {
    key: Option<&'static str>,
    value: u32,
}

impl ItemKey for Keyed {
    fn item_key(&self) -> Option<&str> {
        self.key
    }
}

fn numbers(n: u32) -> Vec<u32> {
    (0..n).collect()
}

fn label_props(n: u32) -> FlatListProps<u32, String> {
    FlatListProps::new(|info| Some(format!("item-{}", info.item))).with_data(numbers(n))
}

fn fixed_rows(length: u32) -> impl Fn(Option<&[u32]>, usize) -> ItemLayout + Send + Sync {
    move |_, row| ItemLayout {
        length,
        offset: row as u64 * length as u64,
        index: row,
    }
}

type Recorded = (Vec<usize>, Vec<(usize, bool)>);

fn record_viewability(
    events: &Arc<Mutex<Vec<Recorded>>>,
) -> impl Fn(ViewabilityChange<&u32>) + Send + Sync + 'static {
    let events = Arc::clone(events);
    move |change| {
        let viewable = change
            .viewable_items
            .iter()
            .filter_map(|token| token.index)
            .collect();
        let changed = change
            .changed
            .iter()
            .filter_map(|token| token.index.map(|index| (index, token.is_viewable)))
            .collect();
        events.lock().unwrap().push((viewable, changed));
    }
}

#[test]
fn row_count_rounds_up() {
    let data = numbers(31);
    let columns = Columns::new(2).unwrap();
    assert_eq!(columns.row_count(Some(&data)), 16);
    assert_eq!(columns.item_at(&data, 15).unwrap().len(), 1);
    assert_eq!(columns.item_at(&data, 16), None);

    assert_eq!(columns.row_count::<u32>(None), 0);
    assert_eq!(columns.row_count::<u32>(Some(&[])), 0);
    assert_eq!(Columns::new(0), Err(Error::InvalidNumColumns));
}

#[test]
fn single_column_rows_are_items() {
    let data = numbers(3);
    let columns = Columns::single();
    assert_eq!(columns.row_count(Some(&data)), 3);
    assert_eq!(columns.item_at(&data, 1), Some(LogicalRow::Single(&1)));
}

#[test]
fn rows_cover_flat_indexes_in_order() {
    let mut rng = Lcg::new(0x5eed_f1a7);
    for _ in 0..200 {
        let len = rng.gen_range_usize(0, 64);
        let num_columns = rng.gen_range_usize(2, 7);
        let data: Vec<usize> = (0..len).collect();
        let columns = Columns::new(num_columns).unwrap();

        let mut flat = Vec::new();
        for row in 0..columns.row_count(Some(&data)) {
            let items = columns.item_at(&data, row).unwrap().as_columns().unwrap();
            assert!(!items.is_empty() && items.len() <= num_columns);
            assert_eq!(items.first(), Some(&(row * num_columns)));
            for (column, item) in items.iter().enumerate() {
                assert_eq!(columns.row_of(*item), (row, column));
            }
            flat.extend_from_slice(items);
        }
        assert_eq!(flat, data);
    }
}

#[test]
fn item_keys_pass_through_for_single_column() {
    let data = [
        Keyed { key: Some("i1"), value: 0 },
        Keyed { key: Some("i2"), value: 1 },
        Keyed { key: Some("i3"), value: 2 },
    ];
    let props = FlatListProps::<Keyed, u32>::new(|info| Some(info.item.value))
        .with_data(data.to_vec())
        .with_item_keys();
    let list = FlatList::new(props).unwrap();
    let frame = list.render().unwrap();
    assert_eq!(frame.row_keys(), ["i1", "i2", "i3"]);
}

#[test]
fn item_keys_fall_back_to_flat_index() {
    let data = vec![
        Keyed { key: Some("a"), value: 0 },
        Keyed { key: None, value: 1 },
        Keyed { key: None, value: 2 },
    ];
    let props = FlatListProps::<Keyed, u32>::new(|info| Some(info.item.value))
        .with_data(data)
        .with_num_columns(2)
        .with_item_keys();
    let list = FlatList::new(props).unwrap();
    assert_eq!(list.render().unwrap().row_keys(), ["a:1", "2"]);
}

#[test]
fn multi_column_row_keys_join_members() {
    let list = FlatList::new(label_props(5).with_num_columns(2)).unwrap();
    assert_eq!(list.render().unwrap().row_keys(), ["0:1", "2:3", "4"]);
}

#[test]
fn key_for_rejects_mismatched_rows() {
    let key_extractor: KeyExtractor<u32> = Arc::new(|item, _| item.to_string());
    let data = numbers(4);

    let single = Columns::single().item_at(&data, 0).unwrap();
    assert_eq!(
        key_for(Columns::new(2).unwrap(), &key_extractor, &single, 0),
        Err(Error::ExpectedColumns { num_columns: 2 })
    );

    let pair = Columns::new(2).unwrap().item_at(&data, 0).unwrap();
    assert_eq!(
        key_for(Columns::single(), &key_extractor, &pair, 0),
        Err(Error::ExpectedSingleItem)
    );
}

#[test]
fn remap_expands_row_tokens_per_member() {
    let data = ["w", "x", "a", "b"];
    let columns = Columns::new(2).unwrap();
    let key_extractor: KeyExtractor<&str> = Arc::new(|item, _| item.to_string());
    let row = columns.item_at(&data, 1).unwrap();

    let info = ViewabilityChange {
        viewable_items: vec![ViewToken {
            item: row,
            key: "a:b".to_string(),
            index: Some(1),
            is_viewable: true,
        }],
        changed: vec![ViewToken {
            item: row,
            key: "a:b".to_string(),
            index: Some(1),
            is_viewable: true,
        }],
    };
    let out = remap(columns, &key_extractor, &info).unwrap();

    let expected = vec![
        ViewToken {
            item: &"a",
            key: "a".to_string(),
            index: Some(2),
            is_viewable: true,
        },
        ViewToken {
            item: &"b",
            key: "b".to_string(),
            index: Some(3),
            is_viewable: true,
        },
    ];
    assert_eq!(out.viewable_items, expected);
    assert_eq!(out.changed, expected);
}

#[test]
fn remap_requires_row_index_and_columns() {
    let data = numbers(4);
    let columns = Columns::new(2).unwrap();
    let key_extractor: KeyExtractor<u32> = Arc::new(|item, _| item.to_string());

    let missing_index = ViewabilityChange {
        viewable_items: vec![ViewToken {
            item: columns.item_at(&data, 0).unwrap(),
            key: "0:1".to_string(),
            index: None,
            is_viewable: true,
        }],
        changed: Vec::new(),
    };
    assert_eq!(
        remap(columns, &key_extractor, &missing_index),
        Err(Error::MissingIndex)
    );

    let single = ViewabilityChange {
        viewable_items: vec![ViewToken {
            item: LogicalRow::Single(&data[0]),
            key: "0".to_string(),
            index: Some(0),
            is_viewable: true,
        }],
        changed: Vec::new(),
    };
    assert_eq!(
        remap(columns, &key_extractor, &single),
        Err(Error::ExpectedColumns { num_columns: 2 })
    );
}

#[test]
fn dispatch_without_callback_is_a_no_op() {
    let key_extractor: KeyExtractor<u32> = Arc::new(|item, _| item.to_string());
    // A malformed event would fail expansion; without a callback nothing is expanded.
    let info = ViewabilityChange {
        viewable_items: vec![ViewToken {
            item: LogicalRow::Single(&1u32),
            key: "1".to_string(),
            index: None,
            is_viewable: true,
        }],
        changed: Vec::new(),
    };
    assert_eq!(
        dispatch(Columns::new(3).unwrap(), &key_extractor, None, info),
        Ok(())
    );
}

#[test]
fn dispatch_passes_single_column_tokens_through() {
    let key_extractor: KeyExtractor<u32> = Arc::new(|item, _| format!("k{item}"));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let callback: OnViewableItemsChanged<u32> = {
        let seen = Arc::clone(&seen);
        Arc::new(move |change: ViewabilityChange<&u32>| {
            let keys: Vec<String> = change.changed.iter().map(|t| t.key.clone()).collect();
            seen.lock().unwrap().push(keys);
        })
    };
    let info = ViewabilityChange {
        viewable_items: Vec::new(),
        changed: vec![ViewToken {
            item: LogicalRow::Single(&7u32),
            key: "row-key".to_string(),
            index: Some(4),
            is_viewable: false,
        }],
    };
    dispatch(Columns::single(), &key_extractor, Some(&callback), info).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![vec!["row-key".to_string()]]);
}

#[test]
fn engine_validates_props_on_its_own() {
    assert_eq!(
        VirtualizedList::new(label_props(4).with_num_columns(2).with_horizontal(true)).err(),
        Some(Error::HorizontalColumns)
    );
    assert_eq!(
        VirtualizedList::new(label_props(4).with_get_item(Some(
            |data: &[u32], index: usize| data.get(index).copied()
        )))
        .err(),
        Some(Error::CustomDataFormat)
    );

    let mut list = VirtualizedList::new(label_props(4)).unwrap();
    assert_eq!(
        list.set_props(label_props(4).with_on_refresh(Some(|| {}))),
        Err(Error::RefreshingRequired)
    );
    assert_eq!(list.row_count(), 4);
}

#[test]
fn invalid_configurations_are_rejected() {
    assert_eq!(
        FlatList::new(label_props(4).with_num_columns(2).with_horizontal(true)).err(),
        Some(Error::HorizontalColumns)
    );
    assert_eq!(
        FlatList::<u32, String, &str>::new(
            FlatListProps::new(|info: RenderInfo<'_, &u32>| Some(info.item.to_string()))
                .with_column_wrapper_style(Some("row"))
        )
        .err(),
        Some(Error::ColumnWrapperStyleSingleColumn)
    );
    assert_eq!(
        FlatList::new(label_props(4).with_num_columns(0)).err(),
        Some(Error::InvalidNumColumns)
    );
    assert_eq!(
        FlatList::new(label_props(4).with_get_item_count(Some(|data: Option<&[u32]>| {
            data.map_or(0, <[u32]>::len)
        })))
        .err(),
        Some(Error::CustomDataFormat)
    );
    assert_eq!(
        FlatList::new(label_props(4).with_on_refresh(Some(|| {}))).err(),
        Some(Error::RefreshingRequired)
    );
    assert_eq!(
        FlatList::new(
            label_props(4).with_viewability_config(
                ViewabilityConfig::default()
                    .with_item_visible_percent_threshold(50.0)
                    .with_view_area_coverage_percent_threshold(50.0)
            )
        )
        .err(),
        Some(Error::ConflictingViewabilityThresholds)
    );
    assert_eq!(
        FlatList::new(
            label_props(4)
                .with_num_columns(2)
                .with_legacy_implementation(true)
        )
        .err(),
        Some(Error::LegacyMultipleColumns)
    );
}

#[test]
fn column_wrapper_style_is_applied_to_rows() {
    let props = FlatListProps::<u32, u32, &str>::new(|info| Some(*info.item))
        .with_data(numbers(3))
        .with_num_columns(2)
        .with_column_wrapper_style(Some("row"));
    let frame = FlatList::new(props).unwrap().render().unwrap();
    let contents: Vec<_> = frame.rows().map(|row| row.content.clone()).collect();
    assert_eq!(
        contents,
        vec![
            Some(Rendered::Row(ColumnRow {
                style: Some("row"),
                cells: vec![
                    ColumnCell { ordinal: 0, element: 0 },
                    ColumnCell { ordinal: 1, element: 1 },
                ],
            })),
            Some(Rendered::Row(ColumnRow {
                style: Some("row"),
                cells: vec![ColumnCell { ordinal: 0, element: 2 }],
            })),
        ]
    );
}

#[test]
fn render_item_receives_flat_indexes_and_may_skip() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let props = {
        let seen = Arc::clone(&seen);
        FlatListProps::<u32, u32>::new(move |info| {
            seen.lock().unwrap().push(info.index);
            (info.item % 2 == 0).then_some(*info.item)
        })
        .with_data(numbers(6))
        .with_num_columns(3)
    };
    let frame = FlatList::new(props).unwrap().render().unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3, 4, 5]);

    let ordinals: Vec<Vec<usize>> = frame
        .rows()
        .map(|row| match &row.content {
            Some(Rendered::Row(row)) => row.cells.iter().map(|cell| cell.ordinal).collect(),
            other => panic!("expected a column row, got {other:?}"),
        })
        .collect();
    assert_eq!(ordinals, vec![vec![0, 2], vec![1]]);
}

#[test]
fn changing_num_columns_is_rejected() {
    let mut list = FlatList::new(label_props(4).with_num_columns(2)).unwrap();
    assert_eq!(
        list.set_props(label_props(4).with_num_columns(3)),
        Err(Error::NumColumnsChanged { from: 2, to: 3 })
    );
    assert_eq!(list.props().num_columns, 2);
    assert_eq!(list.render().unwrap().row_keys(), ["0:1", "2:3"]);

    list.set_props(label_props(6).with_num_columns(2)).unwrap();
    assert_eq!(list.render().unwrap().row_keys(), ["0:1", "2:3", "4:5"]);
}

#[test]
fn empty_data_renders_only_static_parts() {
    for data in [None, Some(Vec::<u32>::new())] {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut props = {
            let calls = Arc::clone(&calls);
            FlatListProps::<u32, &str>::new(move |_| {
                calls.fetch_add(1, Ordering::Relaxed);
                Some("item")
            })
        }
        .with_num_columns(2)
        .with_list_header(Some(|| "header"))
        .with_list_footer(Some(|| "footer"))
        .with_list_empty(Some(|| "empty"));
        if let Some(data) = data {
            props = props.with_data(data);
        }

        let mut list = FlatList::new(props).unwrap();
        list.on_layout(300).unwrap();
        let frame = list.render().unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 0);
        assert!(frame.cells.is_empty());
        assert_eq!(frame.header, Some("header"));
        assert_eq!(frame.footer, Some("footer"));
        assert_eq!(frame.empty, Some("empty"));
        assert_eq!(frame.content_length, 0);
    }
}

#[test]
fn empty_component_is_skipped_when_there_are_rows() {
    let props = label_props(2).with_list_empty(Some(|| "empty".to_string()));
    let frame = FlatList::new(props).unwrap().render().unwrap();
    assert_eq!(frame.empty, None);
    assert_eq!(frame.rows().count(), 2);
}

#[test]
fn separators_follow_highlights() {
    let props = FlatListProps::<u32, String>::new(|info| {
        if *info.item == 1 {
            info.separators.highlight();
        }
        Some(info.item.to_string())
    })
    .with_data(numbers(3))
    .with_item_separator(Some(|props: SeparatorProps| {
        format!(
            "{}-{}{}",
            props.leading_index,
            props.trailing_index,
            if props.highlighted { "*" } else { "" }
        )
    }));
    let list = FlatList::new(props).unwrap();

    let first = list.render().unwrap();
    let separators: Vec<_> = first.rows().map(|row| row.separator.clone()).collect();
    // Row 0's separator is produced before row 1 highlights itself.
    assert_eq!(
        separators,
        vec![Some("0-1".to_string()), Some("1-2*".to_string()), None]
    );

    let second = list.render().unwrap();
    let separators: Vec<_> = second.rows().map(|row| row.separator.clone()).collect();
    assert_eq!(
        separators,
        vec![Some("0-1*".to_string()), Some("1-2*".to_string()), None]
    );
}

#[test]
fn window_keeps_the_initial_rows() {
    let mut list = FlatList::new(label_props(100).with_window_size(3)).unwrap();
    let rows: Vec<usize> = list.render().unwrap().rows().map(|row| row.index).collect();
    assert_eq!(rows, (0..10).collect::<Vec<_>>());

    list.on_layout(500).unwrap();
    let rows: Vec<usize> = list.render().unwrap().rows().map(|row| row.index).collect();
    assert_eq!(rows, (0..20).collect::<Vec<_>>());

    list.on_scroll(2500).unwrap();
    let rows: Vec<usize> = list.render().unwrap().rows().map(|row| row.index).collect();
    let expected: Vec<usize> = (0..10).chain(40..70).collect();
    assert_eq!(rows, expected);
}

#[test]
fn initial_scroll_index_starts_the_window() {
    let mut list = FlatList::new(label_props(100).with_initial_scroll_index(Some(20))).unwrap();
    let rows: Vec<usize> = list.render().unwrap().rows().map(|row| row.index).collect();
    assert_eq!(rows, (20..30).collect::<Vec<_>>());

    list.on_layout(500).unwrap();
    assert_eq!(list.scrollable_node().offset, 1000);
    assert_eq!(list.scroll_responder().last_scroll_animated(), Some(false));
}

#[test]
fn measurements_follow_row_keys() {
    let data = vec![
        Keyed { key: Some("a"), value: 0 },
        Keyed { key: Some("b"), value: 1 },
        Keyed { key: Some("c"), value: 2 },
    ];
    let props = FlatListProps::<Keyed, u32>::new(|info| Some(info.item.value))
        .with_data(data.clone())
        .with_item_keys();
    let mut list = FlatList::new(props.clone()).unwrap();
    list.on_layout(400).unwrap();
    list.measure_row(1, 80).unwrap();

    let frame = list.render().unwrap();
    assert_eq!(frame.content_length, 180);
    let offsets: Vec<_> = frame.rows().map(|row| row.layout.unwrap().offset).collect();
    assert_eq!(offsets, vec![0, 50, 130]);

    let reordered: Vec<Keyed> = data.into_iter().rev().collect();
    list.set_props(props.with_data(reordered)).unwrap();
    let frame = list.render().unwrap();
    let lengths: Vec<_> = frame.rows().map(|row| row.layout.unwrap().length).collect();
    assert_eq!(frame.row_keys(), ["c", "b", "a"]);
    assert_eq!(lengths, vec![50, 80, 50]);

    assert_eq!(
        list.measure_row(3, 10),
        Err(Error::IndexOutOfRange { index: 3, count: 3 })
    );
}

#[test]
fn measurements_of_removed_rows_are_dropped() {
    let keys = |keys: &[&str]| keys.iter().map(|key| key.to_string()).collect::<Vec<_>>();
    let mut frames = crate::layout::RowFrames::default();
    frames.rebuild_estimated(keys(&["a", "b", "c"]), 50);
    assert!(frames.measure(0, "a".to_string(), 20));
    assert!(frames.measure(2, "c".to_string(), 70));
    assert_eq!(frames.measured_len(), 2);

    frames.rebuild_estimated(keys(&["b", "c"]), 50);
    assert_eq!(frames.measured_len(), 1);
    assert_eq!(frames.get(1).map(|frame| frame.length), Some(70));

    frames.rebuild_estimated(keys(&["a", "b", "c"]), 50);
    assert_eq!(frames.get(0).map(|frame| frame.length), Some(50));
    assert_eq!(frames.content_length(), 170);
}

#[test]
fn item_layout_is_authoritative() {
    let props = label_props(4).with_get_item_layout(Some(fixed_rows(30)));
    let mut list = FlatList::new(props).unwrap();
    list.measure_row(0, 500).unwrap();
    let frame = list.render().unwrap();
    assert_eq!(frame.content_length, 120);
    assert_eq!(
        frame.rows().nth(2).and_then(|row| row.layout),
        Some(ItemLayout {
            length: 30,
            offset: 60,
            index: 2
        })
    );
}

#[test]
fn viewability_is_reported_per_item() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let props = label_props(20)
        .with_num_columns(2)
        .with_get_item_layout(Some(fixed_rows(100)))
        .with_on_viewable_items_changed(Some(record_viewability(&events)));
    let mut list = FlatList::new(props).unwrap();
    assert!(events.lock().unwrap().is_empty());

    list.on_layout(250).unwrap();
    list.on_scroll(300).unwrap();

    let events = events.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            (
                (0..6).collect::<Vec<_>>(),
                (0..6).map(|index| (index, true)).collect::<Vec<_>>(),
            ),
            (
                (6..12).collect(),
                (6..12)
                    .map(|index| (index, true))
                    .chain((0..6).map(|index| (index, false)))
                    .collect(),
            ),
        ]
    );
}

#[test]
fn viewability_thresholds_filter_partial_rows() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let props = label_props(10)
        .with_get_item_layout(Some(fixed_rows(100)))
        .with_viewability_config(
            ViewabilityConfig::default().with_item_visible_percent_threshold(60.0),
        )
        .with_on_viewable_items_changed(Some(record_viewability(&events)));
    let mut list = FlatList::new(props).unwrap();
    list.on_layout(250).unwrap();
    assert_eq!(events.lock().unwrap()[0].0, vec![0, 1]);
}

#[test]
fn viewability_can_wait_for_interaction() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let props = label_props(10)
        .with_get_item_layout(Some(fixed_rows(100)))
        .with_viewability_config(ViewabilityConfig::default().with_wait_for_interaction(true))
        .with_on_viewable_items_changed(Some(record_viewability(&events)));
    let mut list = FlatList::new(props).unwrap();
    list.on_layout(250).unwrap();
    assert!(events.lock().unwrap().is_empty());

    list.record_interaction().unwrap();
    assert_eq!(events.lock().unwrap().len(), 1);
    assert_eq!(events.lock().unwrap()[0].0, vec![0, 1, 2]);
}

#[test]
fn data_change_resets_viewable_items() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let props = label_props(10)
        .with_get_item_layout(Some(fixed_rows(100)))
        .with_on_viewable_items_changed(Some(record_viewability(&events)));
    let mut list = FlatList::new(props.clone()).unwrap();
    list.on_layout(150).unwrap();

    list.set_props(props.with_data(numbers(10))).unwrap();
    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1], (vec![0, 1], vec![(0, true), (1, true)]));
}

#[test]
fn end_reached_fires_once_per_content_length() {
    let distances = Arc::new(Mutex::new(Vec::new()));
    let props = {
        let distances = Arc::clone(&distances);
        label_props(10)
            .with_on_end_reached_threshold(0.5)
            .with_on_end_reached(Some(move |info: EndReachedInfo| {
                distances.lock().unwrap().push(info.distance_from_end);
            }))
    };
    let mut list = FlatList::new(props).unwrap();
    list.on_layout(200).unwrap();
    assert!(distances.lock().unwrap().is_empty());

    list.on_scroll(250).unwrap();
    list.on_scroll(260).unwrap();
    assert_eq!(*distances.lock().unwrap(), vec![50]);

    list.on_scroll(0).unwrap();
    list.on_scroll(300).unwrap();
    assert_eq!(*distances.lock().unwrap(), vec![50, 0]);
}

#[test]
fn scroll_to_index_maps_flat_index_to_row() {
    let mut list = FlatList::new(label_props(20).with_num_columns(2)).unwrap();
    list.on_layout(100).unwrap();

    list.scroll_to_index(ScrollToIndex::new(7)).unwrap();
    assert_eq!(list.scrollable_node().offset, 150);

    list.scroll_to_index(ScrollToIndex::new(7).with_view_position(0.5))
        .unwrap();
    assert_eq!(list.scrollable_node().offset, 125);

    list.scroll_to_index(ScrollToIndex::new(6).with_view_offset(25))
        .unwrap();
    assert_eq!(list.scrollable_node().offset, 125);

    assert_eq!(
        list.scroll_to_index(ScrollToIndex::new(20)),
        Err(Error::IndexOutOfRange {
            index: 20,
            count: 20
        })
    );
}

#[test]
fn scroll_operations_drive_the_scroll_view() {
    let mut list = FlatList::new(label_props(20).with_num_columns(2)).unwrap();
    list.on_layout(100).unwrap();

    list.scroll_to_item(ScrollToItem::new(&9)).unwrap();
    assert_eq!(list.scrollable_node().offset, 200);
    assert_eq!(
        list.scroll_to_item(ScrollToItem::new(&99)),
        Err(Error::ItemNotFound)
    );

    list.scroll_to_end(ScrollToEnd::default()).unwrap();
    assert_eq!(list.scrollable_node().offset, 400);

    list.scroll_to_offset(ScrollToOffset::new(10_000).with_animated(false))
        .unwrap();
    assert_eq!(
        list.scrollable_node(),
        ScrollableNode {
            horizontal: false,
            offset: 400,
            visible_length: 100,
            content_length: 500,
        }
    );
    assert_eq!(list.scroll_responder().last_scroll_animated(), Some(false));

    list.flash_scroll_indicators();
    list.set_native_props(NativeProps {
        scroll_enabled: Some(false),
        ..NativeProps::default()
    });
    assert_eq!(list.scroll_responder().indicator_flashes(), 1);
    assert!(!list.scroll_responder().scroll_enabled());
    assert!(list.scroll_responder().shows_scroll_indicator());
}

#[test]
fn refresh_binding_is_attached_when_on_refresh_is_set() {
    let calls = Arc::new(AtomicUsize::new(0));
    let props = {
        let calls = Arc::clone(&calls);
        label_props(3)
            .with_refreshing(Some(true))
            .with_progress_view_offset(Some(40))
            .with_on_refresh(Some(move || {
                calls.fetch_add(1, Ordering::Relaxed);
            }))
    };
    let frame = FlatList::new(props).unwrap().render().unwrap();
    let binding = frame.refresh_control.unwrap();
    assert!(binding.refreshing);
    assert_eq!(binding.progress_view_offset, Some(40));
    (binding.on_refresh)();
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    let frame = FlatList::new(label_props(3)).unwrap().render().unwrap();
    assert!(frame.refresh_control.is_none());
}

#[test]
fn frame_carries_orientation() {
    let frame = FlatList::new(label_props(2).with_horizontal(true).with_inverted(true))
        .unwrap()
        .render()
        .unwrap();
    assert!(frame.horizontal);
    assert!(frame.inverted);
}

#[test]
fn legacy_backend_renders_everything() {
    let props = label_props(30)
        .with_legacy_implementation(true)
        .with_list_footer(Some(|| "footer".to_string()));
    let mut list = FlatList::new(props.clone()).unwrap();
    assert!(list.backend().is_legacy());

    let frame = list.render().unwrap();
    assert_eq!(frame.rows().count(), 30);
    assert_eq!(frame.footer.as_deref(), Some("footer"));
    assert!(frame.rows().all(|row| row.layout.is_none()));

    list.set_props(props.with_legacy_implementation(false))
        .unwrap();
    assert!(!list.backend().is_legacy());
    assert_eq!(list.render().unwrap().rows().count(), 10);
}

#[test]
fn legacy_backend_rejects_layout_dependent_scrolls() {
    let mut list = FlatList::new(label_props(5).with_legacy_implementation(true)).unwrap();
    assert_eq!(
        list.scroll_to_end(ScrollToEnd::default()),
        Err(Error::Unsupported {
            operation: "scroll_to_end"
        })
    );
    assert_eq!(
        list.scroll_to_index(ScrollToIndex::new(1)),
        Err(Error::Unsupported {
            operation: "scroll_to_index"
        })
    );
    assert_eq!(
        list.scroll_to_item(ScrollToItem::new(&1)),
        Err(Error::Unsupported {
            operation: "scroll_to_item"
        })
    );
    assert_eq!(
        list.record_interaction(),
        Err(Error::Unsupported {
            operation: "record_interaction"
        })
    );

    list.on_layout(100).unwrap();
    if let ListBackend::Legacy(legacy) = list.backend_mut() {
        legacy.on_content_size_change(300);
        assert_eq!(
            legacy.scroll_to_location(ScrollToLocation {
                section_index: 0,
                item_index: 0,
                animated: true,
                view_position: 0.0,
                view_offset: 0,
            }),
            Err(Error::Unsupported {
                operation: "scroll_to_location"
            })
        );
    }
    list.scroll_to_offset(ScrollToOffset::new(150)).unwrap();
    list.flash_scroll_indicators();
    assert_eq!(list.scrollable_node().offset, 150);
    assert_eq!(list.scroll_responder().indicator_flashes(), 1);
}

#[test]
fn legacy_sections_need_a_header_renderer() {
    let source = LegacySource::Sections(vec![
        LegacySection::new("odd", vec![1u32, 3]),
        LegacySection::new("even", vec![2u32]),
    ]);
    let props = LegacyListProps::new(source, |info| Some(info.item.to_string()));
    assert!(matches!(
        LegacyList::new(props.clone()),
        Err(Error::MissingSectionHeaderRenderer)
    ));

    let list = LegacyList::new(
        props
            .with_render_section_header(Some(|section: &LegacySection<u32>| {
                Some(section.key.to_uppercase())
            }))
            .with_separator(Some(|props: SeparatorProps| {
                format!("{}|{}", props.leading_index, props.trailing_index)
            })),
    )
    .unwrap();
    let frame: ListFrame<String, ()> = list.render().unwrap();

    let summary: Vec<String> = frame
        .cells
        .iter()
        .map(|cell| match cell {
            FrameCell::SectionHeader { element, .. } => format!("[{}]", element.clone().unwrap()),
            FrameCell::Row(row) => format!(
                "{}{}",
                row.key,
                row.separator.as_deref().map(|s| format!(" {s}")).unwrap_or_default()
            ),
        })
        .collect();
    assert_eq!(summary, ["[ODD]", "odd:0 0|1", "odd:1", "[EVEN]", "even:0"]);
}

#[test]
fn legacy_section_row_keys_are_unique() {
    let source = LegacySource::Sections(vec![
        LegacySection::new("a", vec![10u32, 11]),
        LegacySection::new("b", vec![20u32, 21]),
    ]);
    let props = LegacyListProps::new(source, |info| Some(info.item.to_string()))
        .with_render_section_header(Some(|section: &LegacySection<u32>| {
            Some(section.key.clone())
        }));
    let list = LegacyList::new(props).unwrap();
    let frame: ListFrame<String, ()> = list.render().unwrap();

    let keys = frame.row_keys();
    assert_eq!(keys, ["a:0", "a:1", "b:0", "b:1"]);
    let unique: alloc::collections::BTreeSet<&str> = keys.iter().copied().collect();
    assert_eq!(unique.len(), keys.len());
}
