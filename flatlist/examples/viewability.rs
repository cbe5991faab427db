// Example: per-item viewability events from a multi-column list, and end-reached paging.
use flatlist::{
    EndReachedInfo, FlatList, FlatListProps, ItemLayout, ViewabilityChange, ViewabilityConfig,
};

fn main() -> flatlist::Result<()> {
    let props = FlatListProps::<u32, u32>::new(|info| Some(*info.item))
        .with_data((0..60).collect::<Vec<_>>())
        .with_num_columns(3)
        .with_get_item_layout(Some(|_: Option<&[u32]>, row: usize| ItemLayout {
            length: 100,
            offset: row as u64 * 100,
            index: row,
        }))
        .with_viewability_config(
            ViewabilityConfig::default().with_item_visible_percent_threshold(50.0),
        )
        .with_on_viewable_items_changed(Some(|change: ViewabilityChange<&u32>| {
            let appeared: Vec<_> = change
                .changed
                .iter()
                .filter(|token| token.is_viewable)
                .map(|token| token.key.as_str())
                .collect();
            let gone: Vec<_> = change
                .changed
                .iter()
                .filter(|token| !token.is_viewable)
                .map(|token| token.key.as_str())
                .collect();
            println!("appeared={appeared:?} gone={gone:?}");
        }))
        .with_on_end_reached_threshold(0.5)
        .with_on_end_reached(Some(|info: EndReachedInfo| {
            println!("end reached, distance={}", info.distance_from_end);
        }));

    let mut list = FlatList::new(props)?;
    list.on_layout(350)?;
    for offset in [120, 600, 1_400, 1_650] {
        println!("scroll to {offset}");
        list.on_scroll(offset)?;
    }
    Ok(())
}
