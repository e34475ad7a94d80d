//! World-space layout used for tile placement and the strike-through line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Spacing and strike-through dimensions.
///
/// Missing keys in a TOML source fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Distance between neighbouring tile centres.
    tile_offset: f32,
    /// Width of the strike-through line.
    line_thickness: f32,
    /// Length of a row or column strike-through.
    straight_length: f32,
    /// Length of a diagonal strike-through.
    diagonal_length: f32,
    /// Z coordinate of the line, in front of the tiles.
    depth: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            tile_offset: 2.0,
            line_thickness: 0.2,
            straight_length: 6.0,
            diagonal_length: 8.5,
            depth: -1.0,
        }
    }
}

impl Layout {
    /// Parses a layout from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, LayoutError> {
        let layout: Self = toml::from_str(content)
            .map_err(|e| LayoutError::new(format!("Failed to parse layout: {}", e)))?;
        layout.validate()?;
        debug!(?layout, "Layout parsed");
        Ok(layout)
    }

    /// Loads a layout from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        debug!("Loading layout from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| LayoutError::new(format!("Failed to read layout file: {}", e)))?;

        let layout = Self::from_toml_str(&content)?;
        info!(tile_offset = layout.tile_offset, "Layout loaded");
        Ok(layout)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        let lengths = [
            ("tile_offset", self.tile_offset),
            ("line_thickness", self.line_thickness),
            ("straight_length", self.straight_length),
            ("diagonal_length", self.diagonal_length),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::new(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !self.depth.is_finite() {
            return Err(LayoutError::new("depth must be finite".to_string()));
        }
        Ok(())
    }
}

/// Layout loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Layout error: {} at {}:{}", message, file, line)]
pub struct LayoutError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LayoutError {
    /// Creates a new layout error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
