//! Plot Style
//!
//! Everything about the figure that does not depend on the contacts themselves.
//! The defaults reproduce the PF00014 (Kunitz/BPTI domain, 55 sites) contact map.
use crate::colors::ColorScheme;
use anyhow::{bail, Context, Result};
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Points per inch. Font sizes, marker sizes and line widths are given in points.
const POINTS_PER_INCH: f64 = 72.0;

const PF00014_LIMITS: [f64; 2] = [1.0, 55.0];
const PF00014_TICKS: [f64; 7] = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 55.0];
const PF00014_LABEL: &str = "PF00014 sites";

/// Axis frame styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// All four spines.
    #[default]
    Boxed,
    /// Left and bottom spines only.
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    #[default]
    Circle,
    Square,
}

/// Scatter marker properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerProps {
    /// Marker area in points², as matplotlib's `s`.
    pub size: f64,
    /// Edge width in points. Zero draws no edge.
    pub line_width: f64,
    pub shape: MarkerShape,
    /// Clip markers to the axes area. Off so that edge points are drawn whole.
    pub clip: bool,
}

impl Default for MarkerProps {
    fn default() -> Self {
        Self {
            size: 25.0,
            line_width: 0.0,
            shape: MarkerShape::Circle,
            clip: false,
        }
    }
}

/// Text properties shared by tick labels, axis labels and legend labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelProps {
    pub family: String,
    /// Font size in points.
    pub size: f64,
    pub color: String,
}

impl Default for LabelProps {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            size: 6.0,
            color: "#252525".to_string(),
        }
    }
}

/// Placement of the inline legend, in display coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendStyle {
    /// Marker column, right of the x limit.
    pub x: f64,
    /// One row per category, in draw order.
    pub rows: [f64; 3],
    /// Distance from marker to the start of its label.
    pub text_offset: f64,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            x: 56.0,
            rows: [52.0, 48.0, 44.0],
            text_offset: 1.0,
        }
    }
}

/// Figure configuration.
///
/// The builder does not check its input; [`PlotStyle::validate`] runs when the style is loaded
/// from JSON or handed to [`ContactMap::new`](crate::ContactMap::new).
///
/// ```
/// use ferritin_contactmap::{PlotStyle, Theme};
///
/// let style = PlotStyle::builder().theme(Theme::Open).dpi(300.0).build();
/// assert_eq!(style.xlim, [1.0, 55.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    #[builder(default = PF00014_LIMITS)]
    pub xlim: [f64; 2],
    #[builder(default = PF00014_LIMITS)]
    pub ylim: [f64; 2],
    #[builder(default = PF00014_TICKS.to_vec())]
    pub xticks: Vec<f64>,
    #[builder(default = PF00014_TICKS.to_vec())]
    pub yticks: Vec<f64>,
    #[builder(into, default = PF00014_LABEL.to_string())]
    pub xlabel: String,
    #[builder(into, default = PF00014_LABEL.to_string())]
    pub ylabel: String,
    #[builder(default)]
    pub marker: MarkerProps,
    #[builder(default)]
    pub colors: ColorScheme,
    #[builder(default)]
    pub theme: Theme,
    #[builder(default)]
    pub label_props: LabelProps,
    #[builder(default)]
    pub legend: LegendStyle,
    /// Figure size in inches.
    #[builder(default = [5.0, 5.0])]
    pub figsize: [f64; 2],
    #[builder(default = 100.0)]
    pub dpi: f64,
    /// Axes rectangle as figure fractions: left, bottom, width, height.
    #[builder(default = [0.14, 0.14, 0.62, 0.62])]
    pub axes_rect: [f64; 4],
    /// Spine and tick width in points.
    #[builder(default = 0.5)]
    pub axis_width: f64,
    /// Outward tick length in points.
    #[builder(default = 3.0)]
    pub tick_length: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self::pf00014()
    }
}

impl PlotStyle {
    /// The PF00014 contact map style.
    pub fn pf00014() -> Self {
        Self::builder().build()
    }

    /// Load a style override from JSON. Fields left out keep their PF00014 defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read style file {}", path.display()))?;
        let style: PlotStyle = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse style file {}", path.display()))?;
        style.validate()?;
        Ok(style)
    }

    pub fn validate(&self) -> Result<()> {
        self.colors.validate()?;
        if self.xlim[0] >= self.xlim[1] || self.ylim[0] >= self.ylim[1] {
            bail!(
                "Axis limits must be increasing: xlim {:?}, ylim {:?}",
                self.xlim,
                self.ylim
            );
        }
        if self.dpi <= 0.0 || self.figsize.iter().any(|&s| s <= 0.0) {
            bail!(
                "Figure size and dpi must be positive: figsize {:?}, dpi {}",
                self.figsize,
                self.dpi
            );
        }
        Ok(())
    }

    /// Convert a length in points to pixels.
    pub fn points_to_px(&self, points: f64) -> f64 {
        points * self.dpi / POINTS_PER_INCH
    }

    /// Canvas width and height in pixels.
    pub fn canvas_size(&self) -> (f64, f64) {
        (self.figsize[0] * self.dpi, self.figsize[1] * self.dpi)
    }

    /// Marker radius in pixels. `size` is an area, so the diameter is its square root.
    pub fn marker_radius_px(&self) -> f64 {
        self.points_to_px(self.marker.size.sqrt() / 2.0)
    }

    /// Ticks within the x limits. Ticks outside the view are configured but never drawn.
    pub fn visible_xticks(&self) -> Vec<f64> {
        visible_ticks(&self.xticks, self.xlim)
    }

    pub fn visible_yticks(&self) -> Vec<f64> {
        visible_ticks(&self.yticks, self.ylim)
    }
}

fn visible_ticks(ticks: &[f64], lim: [f64; 2]) -> Vec<f64> {
    ticks
        .iter()
        .copied()
        .filter(|t| (lim[0]..=lim[1]).contains(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_pf00014_defaults() {
        let style = PlotStyle::pf00014();
        assert_eq!(style, PlotStyle::default());
        assert_eq!(style.xlim, [1.0, 55.0]);
        assert_eq!(style.ylim, [1.0, 55.0]);
        assert_eq!(style.xticks, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 55.0]);
        assert_eq!(style.yticks, style.xticks);
        assert_eq!(style.xlabel, "PF00014 sites");
        assert_eq!(style.ylabel, "PF00014 sites");
        assert_eq!(style.theme, Theme::Boxed);
        assert_eq!(style.marker.size, 25.0);
        assert_eq!(style.marker.line_width, 0.0);
        assert!(!style.marker.clip);
        assert_eq!(style.colors, ColorScheme::default());
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_visible_ticks() {
        let style = PlotStyle::pf00014();
        let expected = vec![10.0, 20.0, 30.0, 40.0, 50.0, 55.0];
        assert_eq!(style.visible_xticks(), expected);
        assert_eq!(style.visible_yticks(), expected);
    }

    #[test]
    fn test_pixel_conversions() {
        let style = PlotStyle::builder().dpi(72.0).build();
        assert_eq!(style.points_to_px(6.0), 6.0);
        assert_eq!(style.marker_radius_px(), 2.5);
        assert_eq!(style.canvas_size(), (360.0, 360.0));

        let style = PlotStyle::pf00014();
        assert_eq!(style.canvas_size(), (500.0, 500.0));
    }

    #[test]
    fn test_builder_overrides() {
        let style = PlotStyle::builder()
            .xlabel("PF00076 sites")
            .theme(Theme::Open)
            .build();
        assert_eq!(style.xlabel, "PF00076 sites");
        assert_eq!(style.ylabel, "PF00014 sites");
        assert_eq!(style.theme, Theme::Open);
    }

    #[test]
    fn test_validate_rejects_bad_style() {
        let style = PlotStyle::builder().xlim([55.0, 1.0]).build();
        assert!(style.validate().is_err());

        let style = PlotStyle::builder().dpi(0.0).build();
        assert!(style.validate().is_err());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"theme": "open", "marker": {{"size": 16.0}}, "label_props": {{"size": 8.0}}}}"#
        )
        .unwrap();

        let style = PlotStyle::from_json_file(file.path()).unwrap();
        assert_eq!(style.theme, Theme::Open);
        assert_eq!(style.marker.size, 16.0);
        assert!(!style.marker.clip);
        assert_eq!(style.label_props.size, 8.0);
        assert_eq!(style.label_props.family, "Arial");
        assert_eq!(style.xlim, [1.0, 55.0]);
    }

    #[test]
    fn test_from_json_file_errors() {
        assert!(PlotStyle::from_json_file("does/not/exist.json").is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"colors": {{"solid": "blue"}}}}"#).unwrap();
        assert!(PlotStyle::from_json_file(file.path()).is_err());
    }
}
