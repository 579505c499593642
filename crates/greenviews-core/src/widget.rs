//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle driven by the host:
//!
//! 1. **Measure**: compute the desired size given constraints
//! 2. **Layout**: position self within the allocated bounds
//! 3. **Paint**: issue draw calls on a [`Canvas`]
//!
//! Between frames the host forwards input through [`Widget::event`] and
//! advances animations through [`Widget::tick`]; a `true` return from `tick`
//! means the widget must be repainted.

use crate::constraints::Constraints;
use crate::draw::Paint;
use crate::event::Event;
use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::time::Duration;

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Accessibility role reported to assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// No specific role
    #[default]
    Generic,
    /// Two-state on/off control
    Switch,
}

/// Core widget trait implemented by custom-drawn UI elements.
pub trait Widget: Send + Sync {
    /// Compute the desired size under `constraints`.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Issue draw calls.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event.
    ///
    /// Returns a message when the event was consumed; `None` lets it
    /// propagate to the parent.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Advance time-driven state by `dt`. Returns whether a repaint is needed.
    fn tick(&mut self, _dt: Duration) -> bool {
        false
    }

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a rounded rectangle with uniform corner radius.
    fn draw_round_rect(&mut self, rect: Rect, radius: f32, paint: &Paint);

    /// Draw the ellipse inscribed in `rect`.
    fn draw_oval(&mut self, rect: Rect, paint: &Paint);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use crate::Color;

    struct Dot {
        bounds: Rect,
    }

    impl Widget for Dot {
        fn measure(&self, constraints: Constraints) -> Size {
            Size::new(
                constraints.width_spec().resolve(10.0),
                constraints.height_spec().resolve(10.0),
            )
        }

        fn layout(&mut self, bounds: Rect) -> LayoutResult {
            self.bounds = bounds;
            LayoutResult {
                size: bounds.size(),
            }
        }

        fn paint(&self, canvas: &mut dyn Canvas) {
            canvas.draw_oval(self.bounds, &Paint::fill(Color::BLACK));
        }

        fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
            None
        }
    }

    #[test]
    fn test_trait_defaults() {
        let mut dot = Dot {
            bounds: Rect::default(),
        };
        assert!(!dot.tick(Duration::from_millis(16)));
        assert!(!dot.is_interactive());
        assert_eq!(dot.accessible_role(), AccessibleRole::Generic);
        assert!(dot.accessible_name().is_none());
        assert!(dot.test_id().is_none());
        assert_eq!(Widget::bounds(&dot), Rect::default());
    }

    #[test]
    fn test_measure_layout_paint_cycle() {
        let mut dot = Dot {
            bounds: Rect::default(),
        };
        let size = dot.measure(Constraints::loose(Size::new(5.0, 50.0)));
        assert_eq!(size, Size::new(5.0, 10.0));
        dot.layout(Rect::from_size(size));

        let mut canvas = RecordingCanvas::new();
        dot.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 1);
    }
}
