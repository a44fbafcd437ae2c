use arbor_engine::core::{App, AppControl, FrameCtx};
use arbor_engine::input::Key;
use arbor_engine::render::post::PostProcess;
use arbor_engine::render::shapes::line::LineRenderer;
use arbor_engine::scene::DrawList;

use crate::config::DemoConfig;
use crate::scene::build_scene;
use crate::state::DemoState;

/// Per-frame driver: input, scene, post-processed render.
pub struct DemoApp {
    config: DemoConfig,
    state: DemoState,

    draw_list: DrawList,
    lines: LineRenderer,
    post: PostProcess,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Self {
        let state = DemoState::new(&config);
        Self {
            config,
            state,
            draw_list: DrawList::new(),
            lines: LineRenderer::new(),
            post: PostProcess::new(),
        }
    }
}

impl App for DemoApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.key_pressed(Key::Escape) {
            log::info!("escape pressed, exiting");
            return AppControl::Exit;
        }

        self.state
            .update(ctx.input, ctx.input_frame, ctx.time.dt, &self.config);

        let stats = build_scene(
            &mut self.draw_list,
            &self.state,
            &self.config,
            ctx.window.viewport(),
        );
        if ctx.time.frame_index == 0 {
            log::debug!(
                "tree: {} segments, {} levels, depth {}",
                stats.segments,
                stats.levels,
                stats.depth
            );
        }

        let (lines, draw_list) = (&mut self.lines, &mut self.draw_list);
        ctx.render_post(
            &mut self.post,
            &self.config.post,
            self.config.clear_color,
            self.config.surface_color,
            |rctx, target| lines.render(rctx, target, draw_list),
        )
    }
}
