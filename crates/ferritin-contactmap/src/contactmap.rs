//! Contact Map
//!
//! Mirrored scatter plot of a [`ContactSet`] with an inline legend, rendered to SVG.
//!
//! Each category becomes one [`ScatterLayer`], drawn in category order, so where points coincide
//! the later category is the one that stays visible. Points are never deduplicated.
//!
use crate::contacts::{mirror_pairs, ContactCategory, ContactPair, ContactSet};
use crate::style::{MarkerShape, PlotStyle, Theme};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::process::Command;
use strum::IntoEnumIterator;
use svg::node::element::{Circle, ClipPath, Definitions, Group, Line, Rectangle, Text};
use svg::Document;

const AXES_CLIP_ID: &str = "axes-clip";
/// Gap between a tick and its label, in points.
const TICK_PAD: f64 = 2.0;
/// Gap between tick labels and the axis label, in points.
const LABEL_PAD: f64 = 4.0;

// Layers ---------------------------------------------------------------------------------------

/// One category's points in 1-based display coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLayer {
    pub category: ContactCategory,
    pub color: String,
    pub xs: Vec<u64>,
    pub ys: Vec<u64>,
}

impl ScatterLayer {
    pub fn new(category: ContactCategory, color: &str, pairs: &[ContactPair]) -> Self {
        let (xs, ys) = mirror_pairs(pairs);
        Self {
            category,
            color: color.to_string(),
            xs,
            ys,
        }
    }

    pub fn points(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// A legend entry: marker position in display coordinates plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendMarker {
    pub category: ContactCategory,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub label: &'static str,
}

// Axes -----------------------------------------------------------------------------------------

/// Maps display coordinates onto the SVG canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axes {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub xlim: [f64; 2],
    pub ylim: [f64; 2],
}

impl Axes {
    pub fn from_style(style: &PlotStyle) -> Self {
        let (canvas_width, canvas_height) = style.canvas_size();
        let [left, bottom, width, height] = style.axes_rect;
        Self {
            left: left * canvas_width,
            top: (1.0 - bottom - height) * canvas_height,
            width: width * canvas_width,
            height: height * canvas_height,
            xlim: style.xlim,
            ylim: style.ylim,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Display coordinates to pixels. SVG y grows downward.
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        let fx = (x - self.xlim[0]) / (self.xlim[1] - self.xlim[0]);
        let fy = (y - self.ylim[0]) / (self.ylim[1] - self.ylim[0]);
        (self.left + fx * self.width, self.bottom() - fy * self.height)
    }
}

// Drawing --------------------------------------------------------------------------------------

fn add_marker(group: Group, style: &PlotStyle, (cx, cy): (f64, f64), color: &str) -> Group {
    let radius = style.marker_radius_px();
    let stroke_width = style.points_to_px(style.marker.line_width);
    match style.marker.shape {
        MarkerShape::Circle => group.add(
            Circle::new()
                .set("cx", cx)
                .set("cy", cy)
                .set("r", radius)
                .set("fill", color)
                .set("stroke", color)
                .set("stroke-width", stroke_width),
        ),
        MarkerShape::Square => group.add(
            Rectangle::new()
                .set("x", cx - radius)
                .set("y", cy - radius)
                .set("width", 2.0 * radius)
                .set("height", 2.0 * radius)
                .set("fill", color)
                .set("stroke", color)
                .set("stroke-width", stroke_width),
        ),
    }
}

fn label_text(content: &str, style: &PlotStyle, (x, y): (f64, f64)) -> Text {
    let props = &style.label_props;
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("font-family", props.family.as_str())
        .set("font-size", style.points_to_px(props.size))
        .set("fill", props.color.as_str())
}

/// Draw one category layer, one marker per point, in order.
pub fn draw_scatter_layer(axes: &Axes, layer: &ScatterLayer, style: &PlotStyle) -> Group {
    let mut group = Group::new().set("class", format!("layer {}", layer.category));
    if style.marker.clip {
        group = group.set("clip-path", format!("url(#{AXES_CLIP_ID})"));
    }
    layer.points().fold(group, |group, (x, y)| {
        let pixel = axes.to_pixel(x as f64, y as f64);
        add_marker(group, style, pixel, &layer.color)
    })
}

/// Legend entries for `style`. Their placement never depends on the contacts.
pub fn legend_markers(style: &PlotStyle) -> Vec<LegendMarker> {
    ContactCategory::iter()
        .zip(style.legend.rows)
        .map(|(category, y)| LegendMarker {
            category,
            color: style.colors.get_color(category).to_string(),
            x: style.legend.x,
            y,
            label: category.label(),
        })
        .collect()
}

/// Draw the legend markers and their left-aligned, vertically centered labels.
pub fn draw_legend_markers(axes: &Axes, style: &PlotStyle) -> Group {
    legend_markers(style)
        .iter()
        .fold(Group::new().set("class", "legend"), |group, marker| {
            let pixel = axes.to_pixel(marker.x, marker.y);
            let group = add_marker(group, style, pixel, &marker.color);
            let anchor = axes.to_pixel(marker.x + style.legend.text_offset, marker.y);
            group.add(
                label_text(marker.label, style, anchor)
                    .set("text-anchor", "start")
                    .set("dominant-baseline", "middle"),
            )
        })
}

fn spine(stroke_width: f64, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", "black")
        .set("stroke-width", stroke_width)
        .set("stroke-linecap", "square")
}

/// Draw the axes frame, outward ticks with labels, and both axis labels.
pub fn draw_axes(axes: &Axes, style: &PlotStyle) -> Group {
    let stroke_width = style.points_to_px(style.axis_width);
    let tick_length = style.points_to_px(style.tick_length);
    let tick_pad = style.points_to_px(TICK_PAD);
    let font_size = style.points_to_px(style.label_props.size);
    let mut group = Group::new().set("class", "axes");

    // spines
    let (left, right, top, bottom) = (axes.left, axes.right(), axes.top, axes.bottom());
    group = group
        .add(spine(stroke_width, (left, bottom), (left, top)))
        .add(spine(stroke_width, (left, bottom), (right, bottom)));
    if style.theme == Theme::Boxed {
        group = group
            .add(spine(stroke_width, (right, bottom), (right, top)))
            .add(spine(stroke_width, (left, top), (right, top)));
    }

    // x ticks
    for tick in style.visible_xticks() {
        let (x, _) = axes.to_pixel(tick, axes.ylim[0]);
        group = group
            .add(spine(stroke_width, (x, bottom), (x, bottom + tick_length)))
            .add(
                label_text(&tick.to_string(), style, (x, bottom + tick_length + tick_pad))
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "hanging"),
            );
    }

    // y ticks
    for tick in style.visible_yticks() {
        let (_, y) = axes.to_pixel(axes.xlim[0], tick);
        group = group
            .add(spine(stroke_width, (left - tick_length, y), (left, y)))
            .add(
                label_text(&tick.to_string(), style, (left - tick_length - tick_pad, y))
                    .set("text-anchor", "end")
                    .set("dominant-baseline", "middle"),
            );
    }

    // axis labels sit past the tick labels
    let offset = tick_length + tick_pad + font_size + style.points_to_px(LABEL_PAD);
    let center_x = left + axes.width / 2.0;
    let center_y = top + axes.height / 2.0;
    let (ylabel_x, ylabel_y) = (left - offset - font_size, center_y);
    group
        .add(
            label_text(&style.xlabel, style, (center_x, bottom + offset))
                .set("text-anchor", "middle")
                .set("dominant-baseline", "hanging"),
        )
        .add(
            label_text(&style.ylabel, style, (ylabel_x, ylabel_y))
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle")
                .set("transform", format!("rotate(-90 {ylabel_x} {ylabel_y})")),
        )
}

// ContactMap -----------------------------------------------------------------------------------

/// A contact map ready to be drawn.
///
/// Building one is cheap; the SVG is only produced by [`ContactMap::to_document`],
/// [`ContactMap::save`] or [`ContactMap::show`].
#[derive(Debug, Clone)]
pub struct ContactMap {
    contacts: ContactSet,
    style: PlotStyle,
}

/// Contact map of the three categories with the PF00014 style.
///
/// Nothing is drawn or displayed here: call [`ContactMap::show`] to open the figure in a viewer,
/// or [`ContactMap::save`] to write it.
pub fn render_contact_map(
    other_contacts: Vec<ContactPair>,
    true_positives: Vec<ContactPair>,
    false_positives: Vec<ContactPair>,
) -> ContactMap {
    let contacts = ContactSet {
        other_contacts,
        true_positives,
        false_positives,
    };
    ContactMap {
        contacts,
        style: PlotStyle::pf00014(),
    }
}

impl ContactMap {
    /// Fails if `style` does not pass [`PlotStyle::validate`], e.g. empty axis limits.
    pub fn new(contacts: ContactSet, style: PlotStyle) -> Result<Self> {
        style.validate().context("Invalid plot style")?;
        Ok(Self { contacts, style })
    }

    pub fn contacts(&self) -> &ContactSet {
        &self.contacts
    }

    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    pub fn axes(&self) -> Axes {
        Axes::from_style(&self.style)
    }

    /// Mirrored layers in draw order. Empty categories give empty layers.
    pub fn layers(&self) -> Vec<ScatterLayer> {
        self.contacts
            .iter_categories()
            .map(|(category, pairs)| {
                ScatterLayer::new(category, self.style.colors.get_color(category), pairs)
            })
            .collect()
    }

    pub fn legend_markers(&self) -> Vec<LegendMarker> {
        legend_markers(&self.style)
    }

    pub fn to_document(&self) -> Document {
        let (width, height) = self.style.canvas_size();
        let axes = self.axes();

        let mut document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0, 0.0, width, height))
            .add(
                Rectangle::new()
                    .set("width", width)
                    .set("height", height)
                    .set("fill", "white"),
            );

        if self.style.marker.clip {
            let clip = ClipPath::new().set("id", AXES_CLIP_ID).add(
                Rectangle::new()
                    .set("x", axes.left)
                    .set("y", axes.top)
                    .set("width", axes.width)
                    .set("height", axes.height),
            );
            document = document.add(Definitions::new().add(clip));
        }

        for layer in self.layers() {
            debug!("Drawing {} layer with {} points", layer.category, layer.len());
            document = document.add(draw_scatter_layer(&axes, &layer, &self.style));
        }

        document
            .add(draw_axes(&axes, &self.style))
            .add(draw_legend_markers(&axes, &self.style))
    }

    /// Write the figure as SVG.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        svg::save(path, &self.to_document())
            .with_context(|| format!("Failed to write contact map to {}", path.display()))?;
        info!("Contact map written to {}", path.display());
        Ok(())
    }

    /// Write the figure to a temporary SVG that outlives the process and open it in the
    /// platform viewer. Returns the file path.
    ///
    /// A viewer that fails to launch is logged rather than returned as an error.
    pub fn show(&self) -> Result<PathBuf> {
        let path = tempfile::Builder::new()
            .prefix("contactmap-")
            .suffix(".svg")
            .tempfile()
            .context("Failed to create temporary SVG file")?
            .into_temp_path()
            .keep()
            .context("Failed to keep temporary SVG file")?;
        self.save(&path)?;

        if let Err(e) = viewer_command(&path).spawn() {
            warn!("Could not open a viewer for {}: {e}", path.display());
        }
        Ok(path)
    }
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
