//! Configuration types for the Constellation canvas.
//!
//! This module provides configuration structures for the connection view and
//! for initial diagram placement. All types implement [`serde::Deserialize`]
//! for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining view and placement settings.
//! - [`ViewConfig`] - Initial connection-visibility settings for the materializer.
//! - [`PlacementConfig`] - Geometry defaults for the placement cursor.
//!
//! # Example
//!
//! ```
//! # use constellation::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.view().min_shared_labels(), 0);
//! ```

use serde::Deserialize;

use constellation_core::geometry::{Point, Size};

use crate::relation::visible::ConnectionMode;

/// Top-level application configuration combining view and placement settings.
///
/// Groups [`ViewConfig`] and [`PlacementConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// View configuration section.
    #[serde(default)]
    view: ViewConfig,

    /// Placement configuration section.
    #[serde(default)]
    placement: PlacementConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified view and placement configurations.
    ///
    /// # Arguments
    ///
    /// * `view` - Initial connection-visibility settings.
    /// * `placement` - Geometry defaults for newly loaded diagrams.
    pub fn new(view: ViewConfig, placement: PlacementConfig) -> Self {
        Self { view, placement }
    }

    /// Returns the view configuration.
    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    /// Returns the placement configuration.
    pub fn placement(&self) -> &PlacementConfig {
        &self.placement
    }
}

/// Initial connection-visibility settings.
///
/// These seed the canvas's runtime view state; the corresponding setters on
/// the canvas change them afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewConfig {
    /// Initial [`ConnectionMode`].
    #[serde(default)]
    mode: ConnectionMode,

    /// Shared connections must share strictly more labels than this.
    #[serde(default)]
    min_shared_labels: usize,

    /// Whether subset edges implied by a two-hop path start hidden.
    #[serde(default)]
    hide_transitive: bool,
}

impl ViewConfig {
    /// Creates a new [`ViewConfig`] with the specified settings.
    pub fn new(mode: ConnectionMode, min_shared_labels: usize, hide_transitive: bool) -> Self {
        Self {
            mode,
            min_shared_labels,
            hide_transitive,
        }
    }

    /// Returns the initial [`ConnectionMode`].
    pub fn mode(&self) -> ConnectionMode {
        self.mode
    }

    /// Returns the minimum shared-label threshold.
    pub fn min_shared_labels(&self) -> usize {
        self.min_shared_labels
    }

    /// Returns whether transitive subset edges start hidden.
    pub fn hide_transitive(&self) -> bool {
        self.hide_transitive
    }
}

/// Geometry defaults for the placement cursor.
///
/// Fields that are not set fall back to the canvas defaults: origin
/// `(50, 50)`, gap `30`, row width `1400`, diagram size `400 × 300`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacementConfig {
    /// X-coordinate of the first diagram slot.
    #[serde(default = "default_origin")]
    origin_x: f32,

    /// Y-coordinate of the first diagram slot.
    #[serde(default = "default_origin")]
    origin_y: f32,

    /// Horizontal and vertical gap between diagram slots.
    #[serde(default = "default_gap")]
    gap: f32,

    /// Canvas width after which the cursor wraps to a new row.
    #[serde(default = "default_row_width")]
    row_width: f32,

    /// Width assumed for a diagram until the renderer reports real bounds.
    #[serde(default = "default_width")]
    default_width: f32,

    /// Height assumed for a diagram until the renderer reports real bounds.
    #[serde(default = "default_height")]
    default_height: f32,
}

fn default_origin() -> f32 {
    50.0
}

fn default_gap() -> f32 {
    30.0
}

fn default_row_width() -> f32 {
    1400.0
}

fn default_width() -> f32 {
    400.0
}

fn default_height() -> f32 {
    300.0
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            origin_x: default_origin(),
            origin_y: default_origin(),
            gap: default_gap(),
            row_width: default_row_width(),
            default_width: default_width(),
            default_height: default_height(),
        }
    }
}

impl PlacementConfig {
    /// Returns the first diagram slot.
    pub fn origin(&self) -> Point {
        Point::new(self.origin_x, self.origin_y)
    }

    /// Returns the gap between diagram slots.
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Returns the row width the cursor wraps against.
    pub fn row_width(&self) -> f32 {
        self.row_width
    }

    /// Returns the size assumed for diagrams without reported bounds.
    pub fn default_size(&self) -> Size {
        Size::new(self.default_width, self.default_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.view().mode(), ConnectionMode::All);
        assert_eq!(config.view().min_shared_labels(), 0);
        assert!(!config.view().hide_transitive());
        assert_eq!(config.placement().origin(), Point::new(50.0, 50.0));
        assert_eq!(config.placement().default_size(), Size::new(400.0, 300.0));
    }

    #[test]
    fn test_deserialize_partial_view_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [view]
            mode = "subset-only"
            min_shared_labels = 2
        "#,
        )
        .expect("config should deserialize");

        assert_eq!(config.view().mode(), ConnectionMode::SubsetOnly);
        assert_eq!(config.view().min_shared_labels(), 2);
        assert!(!config.view().hide_transitive());
        // Untouched section keeps its defaults.
        assert_eq!(config.placement().gap(), 30.0);
    }

    #[test]
    fn test_deserialize_placement_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [placement]
            origin_x = 10.0
            row_width = 800.0
        "#,
        )
        .expect("config should deserialize");

        assert_eq!(config.placement().origin(), Point::new(10.0, 50.0));
        assert_eq!(config.placement().row_width(), 800.0);
    }

    #[test]
    fn test_deserialize_empty_source_is_all_defaults() {
        let config: AppConfig = toml::from_str("").expect("config should deserialize");

        assert_eq!(config.view().mode(), ConnectionMode::All);
        assert_eq!(config.placement().row_width(), 1400.0);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [view]
            mode = "everything"
        "#,
        );
        assert!(result.is_err());
    }
}
