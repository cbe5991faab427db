// Example: a standalone refresh control drawing its own indicator.
use flatlist_refresh::{IndicatorVisibility, RefreshControl, RefreshControlProps};

fn main() -> flatlist::Result<()> {
    let mut control = RefreshControl::<&str>::new(
        RefreshControlProps::standalone()
            .with_indicator(IndicatorVisibility::WhileRefreshing)
            .with_on_refresh(Some(|| println!("refreshing"))),
    )
    .with_children(["title", "content"]);

    println!("idle: {:?}", control.render().indicator);
    control.pull(30);
    println!("pulling: {:?}", control.render().indicator);
    control.pull(80);
    control.release()?;
    println!("refreshing: {:?}", control.render().indicator);

    control.set_props(RefreshControlProps::standalone().with_refreshing(true))?;
    control.set_props(RefreshControlProps::standalone())?;
    println!("done: {:?} children={:?}", control.state(), control.render().children);
    Ok(())
}
