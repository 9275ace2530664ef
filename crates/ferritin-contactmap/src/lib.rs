//! # ferritin-contactmap
//!
//! Render residue contact maps for a protein family alignment as SVG.
//!
//! __ferritin-contactmap__ provides:
//! * [`ContactSet`]: background contacts, true positives and false positives as zero-based site pairs
//! * [`PlotStyle`]: axis limits, ticks, labels, marker and color settings (PF00014 by default)
//! * [`ContactMap`]: the mirrored scatter plot with its inline legend, saved or shown as SVG
//!
//! ```no_run
//! use ferritin_contactmap::{render_contact_map, ContactPair};
//!
//! let map = render_contact_map(
//!     vec![ContactPair(0, 1)],
//!     vec![],
//!     vec![ContactPair(2, 3)],
//! );
//! map.save("pf00014.svg")?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
mod colors;
mod contactmap;
mod contacts;
mod io;
mod style;

pub use self::colors::{ColorScheme, C_CONTACT, C_FALSEPOS, C_TRUEPOS};
pub use self::contactmap::{
    draw_axes, draw_legend_markers, draw_scatter_layer, legend_markers, render_contact_map, Axes,
    ContactMap, LegendMarker, ScatterLayer,
};
pub use self::contacts::{mirror_pairs, ContactCategory, ContactPair, ContactSet};
pub use self::io::{load_contacts, read_contact_set, read_contact_table, Reader as ContactReader};
pub use self::style::{LabelProps, LegendStyle, MarkerProps, MarkerShape, PlotStyle, Theme};
