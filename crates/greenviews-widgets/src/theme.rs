//! Switch sizing and appearance, loadable from YAML or TOML.
//!
//! ```yaml
//! track_width: 100
//! track_height: 40
//! corner_radius: 20
//! density: 2.0
//! background_asset: grass.webp
//! padding: { left: 8, top: 4, right: 8, bottom: 4 }
//! ```

use crate::error::ThemeError;
use greenviews_core::{Color, Insets};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Thumb inset from the track edge, in density-independent units.
pub const THUMB_INSET_DP: f32 = 2.2;
/// Track height minus thumb diameter, in density-independent units.
pub const THUMB_SHRINK_DP: f32 = 4.4;
/// Outline width, in density-independent units.
pub const STROKE_WIDTH_DP: f32 = 2.0;
/// Outline shadow blur radius, in density-independent units.
pub const SHADOW_BLUR_DP: f32 = 2.0;
/// Length of the on/off slide.
pub const TOGGLE_DURATION: Duration = Duration::from_millis(400);
/// Asset tiled behind the track.
pub const DEFAULT_BACKGROUND_ASSET: &str = "grass.webp";

/// Pixel dimensions of the switch track plus the display density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwitchDimensions {
    /// Track width in pixels
    pub track_width: f32,
    /// Track height in pixels
    pub track_height: f32,
    /// Corner radius of the track in pixels
    pub corner_radius: f32,
    /// Pixels per density-independent unit
    pub density: f32,
}

impl Default for SwitchDimensions {
    fn default() -> Self {
        Self {
            track_width: 100.0,
            track_height: 40.0,
            corner_radius: 20.0,
            density: 2.0,
        }
    }
}

impl SwitchDimensions {
    /// Create dimensions.
    #[must_use]
    pub const fn new(track_width: f32, track_height: f32, corner_radius: f32, density: f32) -> Self {
        Self {
            track_width,
            track_height,
            corner_radius,
            density,
        }
    }

    /// Replace values that would make the geometry degenerate.
    ///
    /// Non-finite or negative lengths become 0; a non-finite or non-positive
    /// density becomes 1.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let length = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            track_width: length(self.track_width),
            track_height: length(self.track_height),
            corner_radius: length(self.corner_radius),
            density: if self.density.is_finite() && self.density > 0.0 {
                self.density
            } else {
                1.0
            },
        }
    }

    /// Distance the thumb's left edge travels between off and on.
    #[must_use]
    pub fn track_distance(&self) -> f32 {
        (self.track_width - self.track_height).max(0.0)
    }

    /// Pixels travelled per millisecond of the toggle animation.
    #[must_use]
    pub fn step(&self) -> f32 {
        self.track_distance() / TOGGLE_DURATION.as_millis() as f32
    }

    /// Gap between the track edge and the thumb.
    #[must_use]
    pub fn thumb_inset(&self) -> f32 {
        THUMB_INSET_DP * self.density
    }

    /// Thumb diameter.
    #[must_use]
    pub fn thumb_diameter(&self) -> f32 {
        THUMB_SHRINK_DP.mul_add(-self.density, self.track_height).max(0.0)
    }

    /// Outline width.
    #[must_use]
    pub fn stroke_width(&self) -> f32 {
        STROKE_WIDTH_DP * self.density
    }

    /// Outline shadow blur radius.
    #[must_use]
    pub fn shadow_blur(&self) -> f32 {
        SHADOW_BLUR_DP * self.density
    }
}

/// Paint colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchColors {
    /// Overlay and thumb face
    pub fill: Color,
    /// Track and thumb outline
    pub stroke: Color,
    /// Outline shadow
    pub shadow: Color,
}

impl Default for SwitchColors {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
            stroke: Color::WHITE,
            shadow: Color::BLACK,
        }
    }
}

/// Everything needed to build a switch from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwitchTheme {
    /// Track width in pixels
    pub track_width: f32,
    /// Track height in pixels
    pub track_height: f32,
    /// Corner radius in pixels
    pub corner_radius: f32,
    /// Display density
    pub density: f32,
    /// Name of the texture asset drawn behind the track
    pub background_asset: String,
    /// Padding around the track
    pub padding: Insets,
    /// Paint colors
    pub colors: SwitchColors,
}

impl Default for SwitchTheme {
    fn default() -> Self {
        let dims = SwitchDimensions::default();
        Self {
            track_width: dims.track_width,
            track_height: dims.track_height,
            corner_radius: dims.corner_radius,
            density: dims.density,
            background_asset: DEFAULT_BACKGROUND_ASSET.to_string(),
            padding: Insets::ZERO,
            colors: SwitchColors::default(),
        }
    }
}

impl SwitchTheme {
    /// Parse and validate a YAML theme.
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let theme: Self = serde_yaml_ng::from_str(source)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Parse and validate a TOML theme.
    pub fn from_toml(source: &str) -> Result<Self, ThemeError> {
        let theme: Self = toml::from_str(source)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Load a theme file, choosing the parser by extension.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let source = std::fs::read_to_string(path)?;
        match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml(&source),
            "toml" => Self::from_toml(&source),
            _ => Err(ThemeError::UnsupportedFormat(ext)),
        }
    }

    /// Sizing part of the theme.
    #[must_use]
    pub const fn dimensions(&self) -> SwitchDimensions {
        SwitchDimensions::new(
            self.track_width,
            self.track_height,
            self.corner_radius,
            self.density,
        )
    }

    /// Reject values that cannot produce a drawable switch.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let invalid = |field: &'static str, message: &str| ThemeError::InvalidValue {
            field,
            message: message.to_string(),
        };
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let non_negative = |v: f32| v.is_finite() && v >= 0.0;

        if !positive(self.track_width) {
            return Err(invalid("track_width", "must be a positive number"));
        }
        if !positive(self.track_height) {
            return Err(invalid("track_height", "must be a positive number"));
        }
        if self.track_height > self.track_width {
            return Err(invalid("track_height", "must not exceed track_width"));
        }
        if !non_negative(self.corner_radius) {
            return Err(invalid("corner_radius", "must be zero or positive"));
        }
        if !positive(self.density) {
            return Err(invalid("density", "must be a positive number"));
        }
        if THUMB_SHRINK_DP * self.density >= self.track_height {
            return Err(ThemeError::InvalidValue {
                field: "track_height",
                message: format!(
                    "leaves no room for the thumb at density {}",
                    self.density
                ),
            });
        }
        let p = self.padding;
        if ![p.left, p.top, p.right, p.bottom]
            .into_iter()
            .all(non_negative)
        {
            return Err(invalid("padding", "must be zero or positive"));
        }
        if self.background_asset.trim().is_empty() {
            return Err(invalid("background_asset", "must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_dimensions() {
        let dims = SwitchDimensions::new(100.0, 40.0, 20.0, 2.0);
        assert_eq!(dims.track_distance(), 60.0);
        assert!((dims.step() - 0.15).abs() < 1e-6);
        assert!((dims.thumb_inset() - 4.4).abs() < 1e-5);
        assert!((dims.thumb_diameter() - 31.2).abs() < 1e-4);
        assert_eq!(dims.stroke_width(), 4.0);
        assert_eq!(dims.shadow_blur(), 4.0);
    }

    #[test]
    fn test_sanitized_makes_geometry_total() {
        let dims = SwitchDimensions::new(f32::NAN, -5.0, f32::INFINITY, 0.0).sanitized();
        assert_eq!(dims, SwitchDimensions::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(dims.track_distance(), 0.0);
        assert_eq!(dims.thumb_diameter(), 0.0);
        assert_eq!(dims.step(), 0.0);
    }

    #[test]
    fn test_track_taller_than_wide_has_no_travel() {
        let dims = SwitchDimensions::new(30.0, 40.0, 20.0, 1.0);
        assert_eq!(dims.track_distance(), 0.0);
    }

    #[test]
    fn test_default_theme_is_valid() {
        let theme = SwitchTheme::default();
        theme.validate().unwrap();
        assert_eq!(theme.background_asset, "grass.webp");
        assert_eq!(theme.colors, SwitchColors::default());
    }

    #[test]
    fn test_from_yaml() {
        let theme = SwitchTheme::from_yaml(
            "track_width: 120\ntrack_height: 48\ncorner_radius: 24\ndensity: 3\n\
             padding: { left: 8, top: 4 }\ncolors: { shadow: \"#00000080\" }\n",
        )
        .unwrap();
        assert_eq!(theme.dimensions(), SwitchDimensions::new(120.0, 48.0, 24.0, 3.0));
        assert_eq!(theme.padding, Insets::new(8.0, 4.0, 0.0, 0.0));
        assert_eq!(theme.colors.fill, Color::WHITE);
        assert!((theme.colors.shadow.a - 0.502).abs() < 0.01);
        assert_eq!(theme.background_asset, DEFAULT_BACKGROUND_ASSET);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_field() {
        let err = SwitchTheme::from_yaml("track_widht: 100\n").unwrap_err();
        assert!(matches!(err, ThemeError::Yaml(_)));
    }

    #[test]
    fn test_parsers_validate() {
        assert!(matches!(
            SwitchTheme::from_yaml("track_width: -3\n"),
            Err(ThemeError::InvalidValue { field: "track_width", .. })
        ));
        assert!(matches!(
            SwitchTheme::from_toml("background_asset = \"\"\n"),
            Err(ThemeError::InvalidValue { field: "background_asset", .. })
        ));
    }

    #[test]
    fn test_from_toml() {
        let theme = SwitchTheme::from_toml(
            "track_width = 100.0\ntrack_height = 40.0\nbackground_asset = \"moss.webp\"\n\n[padding]\nleft = 2.0\n",
        )
        .unwrap();
        assert_eq!(theme.background_asset, "moss.webp");
        assert_eq!(theme.padding.left, 2.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases: Vec<(SwitchTheme, &str)> = vec![
            (
                SwitchTheme {
                    track_width: 0.0,
                    ..SwitchTheme::default()
                },
                "track_width",
            ),
            (
                SwitchTheme {
                    track_height: 200.0,
                    ..SwitchTheme::default()
                },
                "track_height",
            ),
            (
                SwitchTheme {
                    density: -1.0,
                    ..SwitchTheme::default()
                },
                "density",
            ),
            (
                SwitchTheme {
                    density: 10.0,
                    ..SwitchTheme::default()
                },
                "track_height",
            ),
            (
                SwitchTheme {
                    corner_radius: f32::NAN,
                    ..SwitchTheme::default()
                },
                "corner_radius",
            ),
            (
                SwitchTheme {
                    padding: Insets::new(-1.0, 0.0, 0.0, 0.0),
                    ..SwitchTheme::default()
                },
                "padding",
            ),
            (
                SwitchTheme {
                    background_asset: "  ".to_string(),
                    ..SwitchTheme::default()
                },
                "background_asset",
            ),
        ];
        for (theme, expected) in cases {
            match theme.validate() {
                Err(ThemeError::InvalidValue { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected {expected} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("switch.yaml");
        std::fs::write(&yaml, "track_width: 100\n").unwrap();
        assert_eq!(SwitchTheme::load(&yaml).unwrap().track_width, 100.0);

        let ini = dir.path().join("switch.ini");
        std::fs::write(&ini, "").unwrap();
        assert!(matches!(
            SwitchTheme::load(&ini),
            Err(ThemeError::UnsupportedFormat(ext)) if ext == "ini"
        ));

        assert!(matches!(
            SwitchTheme::load(&dir.path().join("missing.yaml")),
            Err(ThemeError::Io(_))
        ));
    }
}
