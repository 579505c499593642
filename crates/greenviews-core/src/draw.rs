//! Paints and draw commands.
//!
//! A [`Paint`] bundles everything a backend needs to fill or stroke a shape:
//! color, stroke width, anti-aliasing, an optional drop shadow and an
//! optional bitmap shader. Widgets build their paints once and reuse them on
//! every paint pass.

use crate::texture::{Texture, TileMode};
use crate::{Color, CornerRadius, Rect};
use serde::{Deserialize, Serialize};

/// Whether a paint fills the interior or strokes the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaintStyle {
    /// Fill the shape
    #[default]
    Fill,
    /// Stroke the outline
    Stroke,
}

/// Drop shadow drawn underneath the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
}

/// Source of per-pixel color that replaces the paint's flat color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shader {
    /// Sample a texture, addressing outside its bounds per axis.
    Bitmap {
        /// Texture to sample
        texture: Texture,
        /// Horizontal tile mode
        tile_x: TileMode,
        /// Vertical tile mode
        tile_y: TileMode,
    },
}

impl Shader {
    /// Bitmap shader with clamp-to-edge addressing on both axes.
    #[must_use]
    pub const fn clamped(texture: Texture) -> Self {
        Self::Bitmap {
            texture,
            tile_x: TileMode::Clamp,
            tile_y: TileMode::Clamp,
        }
    }

    /// Color at a point in local (texture) space.
    #[must_use]
    pub fn color_at(&self, x: f32, y: f32) -> Color {
        match self {
            Self::Bitmap {
                texture,
                tile_x,
                tile_y,
            } => texture.sample(x, y, *tile_x, *tile_y),
        }
    }
}

/// Style used to draw a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    /// Fill or stroke
    pub style: PaintStyle,
    /// Flat color (ignored where a shader is set)
    pub color: Color,
    /// Stroke width in pixels (stroke style only)
    pub stroke_width: f32,
    /// Smooth edges
    pub anti_alias: bool,
    /// Optional drop shadow
    pub shadow: Option<Shadow>,
    /// Optional shader
    pub shader: Option<Shader>,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            style: PaintStyle::Fill,
            color: Color::BLACK,
            stroke_width: 0.0,
            anti_alias: false,
            shadow: None,
            shader: None,
        }
    }
}

impl Paint {
    /// Solid fill.
    #[must_use]
    pub fn fill(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Outline of the given width.
    #[must_use]
    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            style: PaintStyle::Stroke,
            color,
            stroke_width: width,
            ..Self::default()
        }
    }

    /// Enable or disable anti-aliasing.
    #[must_use]
    pub const fn anti_aliased(mut self, on: bool) -> Self {
        self.anti_alias = on;
        self
    }

    /// Attach a drop shadow.
    #[must_use]
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Attach a shader.
    #[must_use]
    pub fn with_shader(mut self, shader: Shader) -> Self {
        self.shader = Some(shader);
        self
    }

    /// Whether this paint samples a texture.
    #[must_use]
    pub const fn is_textured(&self) -> bool {
        self.shader.is_some()
    }
}

/// Drawing primitive recorded by a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Rounded rectangle
    RoundRect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Paint
        paint: Paint,
    },
    /// Ellipse inscribed in `bounds`
    Oval {
        /// Bounding box
        bounds: Rect,
        /// Paint
        paint: Paint,
    },
}

impl DrawCommand {
    /// Bounds of the shape.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        match self {
            Self::RoundRect { bounds, .. } | Self::Oval { bounds, .. } => *bounds,
        }
    }

    /// Paint used for the shape.
    #[must_use]
    pub const fn paint(&self) -> &Paint {
        match self {
            Self::RoundRect { paint, .. } | Self::Oval { paint, .. } => paint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_fill() {
        let p = Paint::fill(Color::WHITE).anti_aliased(true);
        assert_eq!(p.style, PaintStyle::Fill);
        assert_eq!(p.color, Color::WHITE);
        assert!(p.anti_alias);
        assert!(!p.is_textured());
    }

    #[test]
    fn test_paint_stroke_with_shadow() {
        let p = Paint::stroke(Color::WHITE, 4.0).with_shadow(Shadow {
            color: Color::BLACK,
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 4.0,
        });
        assert_eq!(p.style, PaintStyle::Stroke);
        assert_eq!(p.stroke_width, 4.0);
        assert_eq!(p.shadow.as_ref().map(|s| s.blur), Some(4.0));
    }

    #[test]
    fn test_clamped_shader_samples_texture() {
        let texture = Texture::solid("grass", 2, 2, Color::rgb(0.0, 1.0, 0.0));
        let shader = Shader::clamped(texture);
        assert_eq!(shader.color_at(100.0, -3.0), Color::rgb(0.0, 1.0, 0.0));
        let p = Paint::default().with_shader(shader);
        assert!(p.is_textured());
    }

    #[test]
    fn test_draw_command_accessors() {
        let bounds = Rect::new(1.0, 2.0, 3.0, 4.0);
        let cmd = DrawCommand::Oval {
            bounds,
            paint: Paint::fill(Color::WHITE),
        };
        assert_eq!(cmd.bounds(), bounds);
        assert_eq!(cmd.paint().color, Color::WHITE);
    }
}
