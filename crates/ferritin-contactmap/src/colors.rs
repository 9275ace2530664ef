//! Colors
//!
//! This module defines the color mapping used for rendering contact categories.
use crate::contacts::ContactCategory;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

pub const C_CONTACT: &str = "#f0f0f0";
pub const C_TRUEPOS: &str = "#fd8d3c";
pub const C_FALSEPOS: &str = "#6baed6";

/// Represents different color schemes for rendering contacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// A solid, single color for all categories.
    Solid(String),
    /// One color per contact category.
    ByCategory {
        other: String,
        true_positive: String,
        false_positive: String,
    },
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::ByCategory {
            other: C_CONTACT.to_string(),
            true_positive: C_TRUEPOS.to_string(),
            false_positive: C_FALSEPOS.to_string(),
        }
    }
}

impl ColorScheme {
    pub fn get_color(&self, category: ContactCategory) -> &str {
        match self {
            ColorScheme::Solid(color) => color,
            ColorScheme::ByCategory {
                other,
                true_positive,
                false_positive,
            } => match category {
                ContactCategory::Other => other,
                ContactCategory::TruePositive => true_positive,
                ContactCategory::FalsePositive => false_positive,
            },
        }
    }

    /// Colors in draw order.
    pub fn colors(&self) -> Vec<&str> {
        ContactCategory::iter().map(|c| self.get_color(c)).collect()
    }

    /// Every color must be a `#rrggbb` hex string.
    pub fn validate(&self) -> Result<()> {
        for (category, color) in ContactCategory::iter().map(|c| (c, self.get_color(c))) {
            if !is_hex_color(color) {
                bail!("Invalid color {color:?} for {category}: expected #rrggbb");
            }
        }
        Ok(())
    }
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_color() {
        let scheme = ColorScheme::default();
        assert_eq!(scheme.get_color(ContactCategory::Other), "#f0f0f0");
        assert_eq!(scheme.get_color(ContactCategory::TruePositive), "#fd8d3c");
        assert_eq!(scheme.get_color(ContactCategory::FalsePositive), "#6baed6");
        assert_eq!(scheme.colors(), vec![C_CONTACT, C_TRUEPOS, C_FALSEPOS]);

        let solid = ColorScheme::Solid("#000000".to_string());
        assert_eq!(solid.get_color(ContactCategory::TruePositive), "#000000");
    }

    #[test]
    fn test_validate() {
        assert!(ColorScheme::default().validate().is_ok());
        assert!(ColorScheme::Solid("red".to_string()).validate().is_err());
        assert!(ColorScheme::Solid("#12345g".to_string()).validate().is_err());
        assert!(ColorScheme::Solid("#ABCDEF".to_string()).validate().is_ok());
    }

    #[test]
    fn test_scheme_json() {
        let scheme: ColorScheme = serde_json::from_str(r##"{"solid": "#252525"}"##).unwrap();
        assert_eq!(scheme, ColorScheme::Solid("#252525".to_string()));
    }
}
