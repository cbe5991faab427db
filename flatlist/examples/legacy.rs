// Example: the legacy sequential list with sections.
use flatlist::{FrameCell, LegacyList, LegacyListProps, LegacySection, LegacySource, ListFrame};

fn main() -> flatlist::Result<()> {
    let source = LegacySource::Sections(vec![
        LegacySection::new("fruit", vec!["apple", "pear"]),
        LegacySection::new("veg", vec!["leek"]),
    ]);
    let props = LegacyListProps::new(source, |info| Some(info.item.to_uppercase()))
        .with_key_extractor(|item: &&str, _| item.to_string())
        .with_render_section_header(Some(|section: &LegacySection<&str>| {
            Some(format!("== {} ==", section.key))
        }))
        .with_footer(Some(|| "end".to_string()));
    let list = LegacyList::new(props)?;

    let frame: ListFrame<String, ()> = list.render()?;
    for cell in &frame.cells {
        match cell {
            FrameCell::SectionHeader { element, .. } => {
                println!("{}", element.as_deref().unwrap_or(""))
            }
            FrameCell::Row(row) => println!("  [{}] {:?}", row.key, row.content),
        }
    }
    println!("{:?}", frame.footer);
    Ok(())
}
