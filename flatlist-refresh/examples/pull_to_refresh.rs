// Example: a relaying refresh control driving a FlatList.
use flatlist::{FlatList, FlatListProps};
use flatlist_refresh::{RefreshControl, RefreshControlProps};

fn main() -> flatlist::Result<()> {
    let props = FlatListProps::<u32, String>::new(|info| Some(format!("row {}", info.item)))
        .with_data((0..20).collect::<Vec<_>>());
    let list = FlatList::new(props)?;

    let mut control = RefreshControl::<String, FlatList<u32, String>>::new(
        RefreshControlProps::relay().with_on_refresh(Some(|| println!("on_refresh: fetching"))),
    )
    .with_target("feed", list)?;

    for distance in [10, 40, 70, 90] {
        control.pull(distance);
    }
    println!("release started refresh: {}", control.release()?);

    if let Some(target) = control.target() {
        let binding = target.child.render()?.refresh_control;
        println!(
            "list refreshing={:?} binding={:?}",
            target.child.props().refreshing,
            binding
        );
    }

    // The host finishes loading and clears the flag.
    control.set_props(
        RefreshControlProps::relay().with_on_refresh(Some(|| println!("on_refresh: fetching"))),
    )?;
    println!("state after load: {:?}", control.state());
    Ok(())
}
