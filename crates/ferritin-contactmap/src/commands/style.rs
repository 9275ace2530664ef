use anyhow::Result;
use ferritin_contactmap::PlotStyle;

pub fn execute() -> Result<()> {
    let style = serde_json::to_string_pretty(&PlotStyle::pf00014())?;
    println!("{style}");
    Ok(())
}
