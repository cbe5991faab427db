// Example: a two-column grid, windowing and scroll-to-index.
use flatlist::{FlatList, FlatListProps, Rendered, ScrollHandle, ScrollToIndex};

fn main() -> flatlist::Result<()> {
    let data: Vec<u32> = (0..1_000).collect();
    let props = FlatListProps::<u32, String, &str>::new(|info| Some(format!("#{}", info.item)))
        .with_data(data)
        .with_num_columns(2)
        .with_column_wrapper_style(Some("grid-row"))
        .with_window_size(3);
    let mut list = FlatList::new(props)?;
    list.on_layout(400)?;

    let frame = list.render()?;
    println!("content_length={}", frame.content_length);
    println!("rendered rows={}", frame.rows().count());
    if let Some(Rendered::Row(row)) = frame.rows().next().and_then(|row| row.content.as_ref()) {
        println!("first row style={:?} cells={}", row.style, row.cells.len());
    }

    // Flat index 777 lives in row 388.
    list.scroll_to_index(ScrollToIndex::new(777).with_view_position(0.5))?;
    let frame = list.render()?;
    println!("after scroll_to_index: offset={}", list.scrollable_node().offset);
    println!(
        "window: first={:?} last={:?}",
        frame.row_keys().get(10),
        frame.row_keys().last()
    );
    Ok(())
}
