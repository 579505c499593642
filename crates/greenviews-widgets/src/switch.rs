//! Grass-textured animated toggle switch.
//!
//! The switch paints a rounded track filled with a tiled texture, a white
//! overlay covering the part of the track to the right of the thumb, and a
//! round thumb with a shadowed outline. A pointer-down starts a 400ms linear
//! slide of the thumb to the opposite end; `enabled` flips on the last frame.
//!
//! Taps that arrive mid-slide are dropped. The widget never consumes pointer
//! events, so parents still see every tap.

use crate::assets::{load_texture, AssetStore};
use crate::theme::{SwitchColors, SwitchDimensions, SwitchTheme, TOGGLE_DURATION};
use greenviews_core::{
    AccessibleRole, AnimationFrame, AnimationListener, Animator, Canvas, Constraints, Event,
    Insets, LayoutResult, Paint, Rect, Shader, Shadow, Size, Texture, Widget,
};
use serde::Serialize;
use std::any::Any;
use std::time::Duration;

/// Observable state of a switch, for logging and frame dumps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SwitchSnapshot {
    /// Logical on/off value
    pub enabled: bool,
    /// Whether a slide is running
    pub animating: bool,
    /// Thumb left edge
    pub thumb_left: f32,
    /// Thumb right edge
    pub thumb_right: f32,
    /// Overlay left edge
    pub overlay_left: f32,
    /// Play time of the most recent animation frame, clamped to the duration
    pub play_time_ms: u64,
}

/// Animated on/off switch with a textured track.
#[derive(Debug, Clone)]
pub struct GreenSwitch {
    dims: SwitchDimensions,
    padding: Insets,
    track_distance: f32,
    step: f32,
    thumb_inset: f32,
    thumb_diameter: f32,

    fill_paint: Paint,
    stroke_paint: Paint,
    background_paint: Paint,

    bounds: Rect,
    border: Rect,
    background: Rect,
    overlay: Rect,
    thumb: Rect,
    thumb_start: f32,
    thumb_finish: f32,

    enabled: bool,
    animation_in_progress: bool,
    animator: Option<Animator>,
    play_time_ms: u64,
    needs_repaint: bool,

    accessible_name_value: Option<String>,
    test_id_value: Option<String>,
}

impl GreenSwitch {
    /// Create a switch from pixel dimensions, paint colors and an optional
    /// background texture.
    ///
    /// Degenerate dimensions are sanitized so every later computation is
    /// finite. Without a texture the background paint has no shader.
    #[must_use]
    pub fn new(dims: SwitchDimensions, colors: SwitchColors, background: Option<Texture>) -> Self {
        let dims = dims.sanitized();

        let fill_paint = Paint::fill(colors.fill).anti_aliased(true);
        let stroke_paint = Paint::stroke(colors.stroke, dims.stroke_width())
            .anti_aliased(true)
            .with_shadow(Shadow {
                color: colors.shadow,
                offset_x: 0.0,
                offset_y: 0.0,
                blur: dims.shadow_blur(),
            });
        let mut background_paint = Paint::default().anti_aliased(true);
        if let Some(texture) = background {
            background_paint = background_paint.with_shader(Shader::clamped(texture));
        }

        let mut switch = Self {
            dims,
            padding: Insets::ZERO,
            track_distance: dims.track_distance(),
            step: dims.step(),
            thumb_inset: dims.thumb_inset(),
            thumb_diameter: dims.thumb_diameter(),
            fill_paint,
            stroke_paint,
            background_paint,
            bounds: Rect::default(),
            border: Rect::default(),
            background: Rect::default(),
            overlay: Rect::default(),
            thumb: Rect::default(),
            thumb_start: 0.0,
            thumb_finish: 0.0,
            enabled: false,
            animation_in_progress: false,
            animator: None,
            play_time_ms: 0,
            needs_repaint: false,
            accessible_name_value: None,
            test_id_value: None,
        };
        switch.rebuild_geometry();
        switch
    }

    /// Build a switch from a theme, decoding its background asset from
    /// `assets`.
    ///
    /// A missing or undecodable asset is logged and the switch is built
    /// without a texture.
    #[must_use]
    pub fn from_theme(theme: &SwitchTheme, assets: &dyn AssetStore) -> Self {
        let background = match load_texture(assets, &theme.background_asset) {
            Ok(texture) => {
                tracing::debug!(
                    asset = %theme.background_asset,
                    width = texture.width,
                    height = texture.height,
                    "decoded switch background"
                );
                Some(texture)
            }
            Err(err) => {
                tracing::warn!(
                    asset = %theme.background_asset,
                    error = %err,
                    "switch background unavailable, drawing without texture"
                );
                None
            }
        };
        Self::new(theme.dimensions(), theme.colors, background).padding(theme.padding)
    }

    /// Set padding around the track.
    #[must_use]
    pub fn padding(mut self, padding: Insets) -> Self {
        let finite = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        self.padding = Insets::new(
            finite(padding.left),
            finite(padding.top),
            finite(padding.right),
            finite(padding.bottom),
        );
        self.rebuild_geometry();
        self
    }

    /// Set the initial state.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Current on/off value.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the on/off value directly, without animating.
    ///
    /// When idle the thumb snaps to the matching end. During a slide only the
    /// flag changes; the running slide picks up the new direction on its next
    /// frame.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !self.animation_in_progress {
            self.place_thumb(self.rest_left());
        }
    }

    /// Whether a slide is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animation_in_progress
    }

    /// Start the toggle slide, as a tap would.
    ///
    /// Returns `false` (and does nothing) while a slide is already running.
    pub fn start_toggle(&mut self) -> bool {
        if self.animation_in_progress {
            tracing::trace!("tap ignored, toggle animation in progress");
            return false;
        }
        self.animation_in_progress = true;
        tracing::debug!(from = self.enabled, "toggle animation started");

        let mut animator = Animator::of_int(0, 1).with_duration(TOGGLE_DURATION);
        let first = animator.start();
        self.animator = Some(animator);
        self.deliver(first);
        true
    }

    fn deliver(&mut self, frame: AnimationFrame) {
        if frame.terminal {
            self.animator = None;
        }
        self.on_animation_update(&frame);
    }

    /// Whether state changed since the last [`GreenSwitch::take_repaint_request`].
    #[must_use]
    pub const fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Consume the pending repaint request.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    /// Sanitized dimensions in use.
    #[must_use]
    pub const fn dimensions(&self) -> SwitchDimensions {
        self.dims
    }

    /// Padding around the track.
    #[must_use]
    pub const fn get_padding(&self) -> Insets {
        self.padding
    }

    /// Distance the thumb travels.
    #[must_use]
    pub const fn track_distance(&self) -> f32 {
        self.track_distance
    }

    /// Pixels per millisecond of slide.
    #[must_use]
    pub const fn step(&self) -> f32 {
        self.step
    }

    /// Gap between track edge and thumb.
    #[must_use]
    pub const fn thumb_inset(&self) -> f32 {
        self.thumb_inset
    }

    /// Thumb diameter.
    #[must_use]
    pub const fn thumb_diameter(&self) -> f32 {
        self.thumb_diameter
    }

    /// Thumb left edge in the off position.
    #[must_use]
    pub const fn thumb_start_position(&self) -> f32 {
        self.thumb_start
    }

    /// Thumb left edge in the on position.
    #[must_use]
    pub const fn thumb_finish_position(&self) -> f32 {
        self.thumb_finish
    }

    /// Thumb bounds.
    #[must_use]
    pub const fn thumb_rect(&self) -> Rect {
        self.thumb
    }

    /// Overlay bounds (track right of the thumb's left edge).
    #[must_use]
    pub const fn overlay_rect(&self) -> Rect {
        self.overlay
    }

    /// Track bounds, shared by border and background.
    #[must_use]
    pub const fn track_rect(&self) -> Rect {
        self.border
    }

    /// Whether the background paint samples a texture.
    #[must_use]
    pub const fn has_background_texture(&self) -> bool {
        self.background_paint.is_textured()
    }

    /// Paint for overlay and thumb face.
    #[must_use]
    pub const fn fill_paint(&self) -> &Paint {
        &self.fill_paint
    }

    /// Paint for outlines.
    #[must_use]
    pub const fn stroke_paint(&self) -> &Paint {
        &self.stroke_paint
    }

    /// Paint for the textured background.
    #[must_use]
    pub const fn background_paint(&self) -> &Paint {
        &self.background_paint
    }

    /// Observable state.
    #[must_use]
    pub fn snapshot(&self) -> SwitchSnapshot {
        SwitchSnapshot {
            enabled: self.enabled,
            animating: self.animation_in_progress,
            thumb_left: self.thumb.left(),
            thumb_right: self.thumb.right(),
            overlay_left: self.overlay.left(),
            play_time_ms: self.play_time_ms,
        }
    }

    fn rest_left(&self) -> f32 {
        if self.enabled {
            self.thumb_finish
        } else {
            self.thumb_start
        }
    }

    fn clamp_left(&self, left: f32) -> f32 {
        left.clamp(self.thumb_start, self.thumb_finish)
    }

    /// Move the thumb and pull the overlay's left edge along with it.
    fn place_thumb(&mut self, left: f32) {
        let left = self.clamp_left(left);
        self.thumb = self.thumb.with_x(left);
        self.overlay = self.overlay.with_left(left);
    }

    /// Recompute every rectangle from bounds, padding and dimensions.
    ///
    /// The overlay is reset to the full track; only animation frames and
    /// [`GreenSwitch::set_enabled`] move its left edge.
    fn rebuild_geometry(&mut self) {
        let progress = self.thumb.left() - self.thumb_start;
        let origin = self.bounds.origin();
        let track = Rect::new(
            origin.x + self.padding.left,
            origin.y + self.padding.top,
            self.dims.track_width,
            self.dims.track_height,
        );
        self.border = track;
        self.background = track;
        self.overlay = track;

        self.thumb_start = track.left() + self.thumb_inset;
        self.thumb_finish = self.thumb_start + self.track_distance;
        self.thumb = Rect::new(
            self.thumb_start,
            track.top() + self.thumb_inset,
            self.thumb_diameter,
            self.thumb_diameter,
        );

        let left = if self.animation_in_progress {
            self.thumb_start + progress
        } else {
            self.rest_left()
        };
        self.thumb = self.thumb.with_x(self.clamp_left(left));
        self.needs_repaint = true;
    }
}

impl AnimationListener for GreenSwitch {
    fn on_animation_update(&mut self, frame: &AnimationFrame) {
        self.play_time_ms = frame.play_time_ms;
        let elapsed = frame.play_time_ms as f32;
        let left = if self.enabled {
            self.step.mul_add(-elapsed, self.thumb_finish)
        } else {
            self.step.mul_add(elapsed, self.thumb_start)
        };
        if frame.value == 1 {
            self.enabled = !self.enabled;
            self.animation_in_progress = false;
            tracing::debug!(enabled = self.enabled, "toggle animation finished");
        }
        self.place_thumb(left);
        self.needs_repaint = true;
    }
}

impl Widget for GreenSwitch {
    fn measure(&self, constraints: Constraints) -> Size {
        let preferred =
            Size::new(self.dims.track_width, self.dims.track_height).expand(self.padding);
        Size::new(
            constraints.width_spec().resolve(preferred.width),
            constraints.height_spec().resolve(preferred.height),
        )
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        let finite = |v: f32| if v.is_finite() { v } else { 0.0 };
        self.bounds = Rect::new(
            finite(bounds.x),
            finite(bounds.y),
            finite(bounds.width).max(0.0),
            finite(bounds.height).max(0.0),
        );
        self.rebuild_geometry();
        LayoutResult {
            size: self.bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let radius = self.dims.corner_radius;
        canvas.draw_round_rect(self.background, radius, &self.background_paint);
        canvas.draw_round_rect(self.overlay, radius, &self.fill_paint);
        canvas.draw_oval(self.thumb, &self.stroke_paint);
        canvas.draw_oval(self.thumb, &self.fill_paint);
        canvas.draw_round_rect(self.border, radius, &self.stroke_paint);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if event.is_pointer_down() {
            self.start_toggle();
        }
        None
    }

    fn tick(&mut self, dt: Duration) -> bool {
        let Some(frame) = self.animator.as_mut().and_then(|a| a.advance(dt)) else {
            return false;
        };
        self.deliver(frame);
        true
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
