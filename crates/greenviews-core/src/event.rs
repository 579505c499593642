//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Unique identifier for a touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TouchId(pub u32);

impl TouchId {
    /// Create a new touch ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
    },
    /// Touch moved
    TouchMove {
        /// Touch identifier
        id: TouchId,
        /// New position
        position: Point,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Touch cancelled (e.g., palm rejection)
    TouchCancel {
        /// Touch identifier
        id: TouchId,
    },
}

impl Event {
    /// Convenience constructor for a primary-button click.
    #[must_use]
    pub const fn click(position: Point) -> Self {
        Self::MouseDown {
            position,
            button: MouseButton::Left,
        }
    }

    /// Whether this event starts a pointer gesture (mouse press or first
    /// finger contact).
    #[must_use]
    pub const fn is_pointer_down(&self) -> bool {
        matches!(self, Self::MouseDown { .. } | Self::TouchStart { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_down_variants() {
        assert!(Event::click(Point::ORIGIN).is_pointer_down());
        assert!(Event::MouseDown {
            position: Point::ORIGIN,
            button: MouseButton::Right,
        }
        .is_pointer_down());
        assert!(Event::TouchStart {
            id: TouchId::new(1),
            position: Point::ORIGIN,
        }
        .is_pointer_down());
    }

    #[test]
    fn test_non_down_events() {
        let events = [
            Event::MouseMove {
                position: Point::ORIGIN,
            },
            Event::MouseUp {
                position: Point::ORIGIN,
                button: MouseButton::Left,
            },
            Event::TouchMove {
                id: TouchId::new(0),
                position: Point::ORIGIN,
            },
            Event::TouchEnd {
                id: TouchId::new(0),
                position: Point::ORIGIN,
            },
            Event::TouchCancel { id: TouchId::new(0) },
        ];
        for event in &events {
            assert!(!event.is_pointer_down(), "{event:?}");
        }
    }

    #[test]
    fn test_event_serde() {
        let event = Event::TouchStart {
            id: TouchId::new(7),
            position: Point::new(1.0, 2.0),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
