//! Time subsystem.
//!
//! Frame timing utilities, decoupled from the runtime:
//! - one `FrameClock` per window; `tick()` once per presented frame
//! - `FramePacer` decides when the next redraw is due at a target FPS

mod frame_clock;
mod pacer;

pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::FramePacer;
