use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::paint::Color;
use crate::render::post::{PostParams, PostProcess};
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Returns the logical window size as `(width, height)` in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        let phys = self.window.inner_size();
        let scale = self.window.scale_factor();
        let logi: winit::dpi::LogicalSize<f64> = phys.to_logical(scale);
        (logi.width as f32, logi.height as f32)
    }

    /// Returns the drawable size in physical pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        let phys = self.window.inner_size();
        (phys.width, phys.height)
    }

    pub fn viewport(&self) -> Viewport {
        let (w, h) = self.logical_size();
        Viewport::new(w, h)
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`] and
    /// [`RenderTarget`], then presents the frame.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.acquire() {
            Ok(frame) => frame,
            Err(control) => return control,
        };

        let rctx = self.render_ctx();

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            target.clear(clear);
            draw(&rctx, &mut target);
        }

        self.present(frame);
        AppControl::Continue
    }

    /// Draws the scene into the post pass's off-screen texture, then composites
    /// it onto the surface.
    ///
    /// `scene_clear` clears the off-screen texture before `draw`; `surface_clear`
    /// clears the swapchain image before the composite.
    pub fn render_post<F>(
        &mut self,
        post: &mut PostProcess,
        params: &PostParams,
        scene_clear: Color,
        surface_clear: Color,
        draw: F,
    ) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.acquire() {
            Ok(frame) => frame,
            Err(control) => return control,
        };

        let rctx = self.render_ctx();
        post.prepare(&rctx, self.window.physical_size());

        if let Some(scene_view) = post.scene_view() {
            let mut target = RenderTarget::new(&mut frame.encoder, scene_view);
            target.clear(scene_clear);
            draw(&rctx, &mut target);
        }

        RenderTarget::new(&mut frame.encoder, &frame.view).clear(surface_clear);
        post.composite(&rctx, &mut frame.encoder, &frame.view, self.time.elapsed, params);

        self.present(frame);
        AppControl::Continue
    }

    fn acquire(&mut self) -> Result<GpuFrame, AppControl> {
        match self.gpu.begin_frame() {
            Ok(frame) => Ok(frame),
            Err(err) => match self.gpu.handle_surface_error(err) {
                SurfaceErrorAction::Fatal => Err(AppControl::Exit),
                _ => Err(AppControl::Continue),
            },
        }
    }

    fn render_ctx(&self) -> RenderCtx<'_> {
        RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            self.window.viewport(),
            self.window.window.scale_factor() as f32,
        )
    }

    fn present(&self, frame: GpuFrame) {
        self.window.window.pre_present_notify();
        self.gpu.submit(frame);
    }
}
