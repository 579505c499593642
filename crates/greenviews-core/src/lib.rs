//! Core types and traits for greenviews widgets.
//!
//! This crate provides the host-agnostic pieces a custom-drawn widget needs:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Insets`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`], [`MeasureSpec`]
//! - Input: [`Event`]
//! - Painting: [`Paint`], [`Shader`], [`Texture`], [`Canvas`], [`RecordingCanvas`]
//! - Time: [`Animator`], [`AnimationListener`]
//! - The [`Widget`] trait tying it together

pub mod animation;
pub mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod texture;
pub mod widget;

pub use animation::{AnimationFrame, AnimationListener, Animator, AnimatorState};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::{Constraints, MeasureSpec};
pub use draw::{DrawCommand, Paint, PaintStyle, Shader, Shadow};
pub use event::{Event, MouseButton, TouchId};
pub use geometry::{CornerRadius, Insets, Point, Rect, Size};
pub use texture::{Texture, TileMode};
pub use widget::{AccessibleRole, Canvas, LayoutResult, Widget};
