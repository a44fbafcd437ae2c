//! Coordinate and geometry types shared across engine renderers and the demo.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Positive rotation angles turn clockwise on screen.
//! Renderers convert to NDC in shaders using a viewport uniform.

mod camera;
mod rect;
mod transform;
mod vec2;
mod viewport;

pub use camera::Camera2D;
pub use rect::Rect;
pub use transform::Transform2D;
pub use vec2::Vec2;
pub use viewport::Viewport;
