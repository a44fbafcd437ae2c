//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.
//!
//! Frames that use [`post::PostProcess`] draw shapes into an off-screen
//! texture first; the post pass then samples it into the swapchain image.

mod ctx;
pub mod offscreen;
pub mod post;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
