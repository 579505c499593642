//! Grass-textured animated toggle switch for greenviews.
//!
//! # Example
//!
//! ```
//! use greenviews_core::{Constraints, Event, Point, Rect, Size, Widget};
//! use greenviews_widgets::{GreenSwitch, MemoryAssetStore, SwitchTheme};
//! use std::time::Duration;
//!
//! let mut switch = GreenSwitch::from_theme(&SwitchTheme::default(), &MemoryAssetStore::new());
//! let size = switch.measure(Constraints::loose(Size::new(360.0, 640.0)));
//! switch.layout(Rect::from_size(size));
//!
//! switch.event(&Event::click(Point::new(5.0, 5.0)));
//! while switch.tick(Duration::from_millis(16)) {}
//! assert!(switch.is_enabled());
//! ```

pub mod assets;
mod error;
pub mod switch;
pub mod theme;

pub use assets::{load_texture, AssetStore, DirAssetStore, MemoryAssetStore};
pub use error::{AssetError, ThemeError};
pub use switch::{GreenSwitch, SwitchSnapshot};
pub use theme::{
    SwitchColors, SwitchDimensions, SwitchTheme, DEFAULT_BACKGROUND_ASSET, TOGGLE_DURATION,
};
