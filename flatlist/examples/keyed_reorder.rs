// Example: row measurements follow item keys after a reorder.
use flatlist::{FlatList, FlatListProps, ItemKey};

#[derive(Clone)]
struct Message {
    id: &'static str,
    text: &'static str,
}

impl ItemKey for Message {
    fn item_key(&self) -> Option<&str> {
        Some(self.id)
    }
}

fn main() -> flatlist::Result<()> {
    let messages = vec![
        Message { id: "m1", text: "hi" },
        Message { id: "m2", text: "a much longer message that wraps" },
        Message { id: "m3", text: "bye" },
    ];
    let props = FlatListProps::<Message, &str>::new(|info| Some(info.item.text))
        .with_data(messages.clone())
        .with_item_keys();
    let mut list = FlatList::new(props.clone())?;
    list.on_layout(600)?;
    list.measure_row(1, 120)?;

    let print = |list: &FlatList<Message, &str>| -> flatlist::Result<()> {
        for row in list.render()?.rows() {
            println!("  {} -> {:?}", row.key, row.layout.map(|l| (l.offset, l.length)));
        }
        Ok(())
    };
    println!("before reorder:");
    print(&list)?;

    let reversed: Vec<Message> = messages.into_iter().rev().collect();
    list.set_props(props.with_data(reversed))?;
    println!("after reorder:");
    print(&list)?;
    Ok(())
}
