//! Display styles for buckets and the text input
//!
//! Built once from configuration and passed to rendering. Bucket styles are
//! kept in a sorted map so the legend order never depends on configuration
//! order.

use crate::config::Config;
use crate::utils::color::parse_hex_color;
use anyhow::{Context, Result};
use ratatui::style::Style;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    bucket_styles: BTreeMap<String, Style>,
    input_style: Style,
}

impl Theme {
    pub fn new(bucket_styles: BTreeMap<String, Style>, input_style: Style) -> Self {
        Self {
            bucket_styles,
            input_style,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let mut bucket_styles = BTreeMap::new();
        for bucket in &config.buckets {
            let color =
                parse_hex_color(&bucket.color).with_context(|| format!("Bucket '{}': invalid color", bucket.name))?;
            bucket_styles.insert(bucket.name.clone(), Style::default().fg(color));
        }

        let input_color = parse_hex_color(&config.ui.input_color).context("Invalid input_color")?;

        Ok(Self::new(bucket_styles, Style::default().fg(input_color)))
    }

    /// Style of a bucket, the default style for unknown names
    pub fn bucket_style(&self, name: &str) -> Style {
        self.bucket_styles.get(name).copied().unwrap_or_default()
    }

    pub fn input_style(&self) -> Style {
        self.input_style
    }

    /// Bucket names with their styles, sorted by name
    pub fn legend(&self) -> impl Iterator<Item = (&str, Style)> {
        self.bucket_styles.iter().map(|(name, style)| (name.as_str(), *style))
    }
}
