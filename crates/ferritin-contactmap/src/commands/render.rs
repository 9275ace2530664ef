use anyhow::Result;
use ferritin_contactmap::{load_contacts, ContactMap, PlotStyle};
use log::info;
use std::path::PathBuf;

pub fn execute(
    input: PathBuf,
    output: Option<PathBuf>,
    style: Option<PathBuf>,
    show: bool,
) -> Result<()> {
    let contacts = load_contacts(&input)?;
    let style = match style {
        Some(path) => PlotStyle::from_json_file(path)?,
        None => PlotStyle::pf00014(),
    };
    let map = ContactMap::new(contacts, style)?;

    if let Some(output) = &output {
        map.save(output)?;
    }
    if show || output.is_none() {
        let path = map.show()?;
        info!("Showing {}", path.display());
    }
    Ok(())
}
