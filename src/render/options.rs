use std::{fmt, str::FromStr};

use anyhow::{anyhow, Error};

/// How data coordinates reach the SVG viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Projection {
    /// Geometry is already in screen coordinates (pre-projected topology).
    #[default]
    Identity,
    /// Longitude/latitude geometry scaled to fit the viewport.
    Fit,
}

/// Output document kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Standalone page with title, description, tooltip and legend.
    #[default]
    Html,
    /// Bare SVG document with the map and legend.
    Svg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Svg => "svg",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" | "htm" => Ok(Self::Html),
            "svg" => Ok(Self::Svg),
            other => Err(anyhow!("unknown output format {other:?} (expected html or svg)")),
        }
    }
}

/// Layout and text of the rendered map.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: f64,
    pub height: f64,
    /// Inset used by [`Projection::Fit`].
    pub margin: f64,
    pub projection: Projection,
    pub title: String,
    pub description: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            margin: 10.0,
            projection: Projection::Identity,
            title: "United States Educational Attainment".to_string(),
            description: "Percentage of adults age 25 and older with a bachelor's degree or higher (2010-2014)".to_string(),
        }
    }
}
