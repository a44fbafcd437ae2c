use arbor_engine::coords::{Vec2, Viewport};
use arbor_engine::paint::Color;
use arbor_engine::scene::{DrawList, ZIndex};
use arbor_fractal::{BranchPalette, BranchSegment, FractalTree, Point, SegmentSink, TreeStats};

use crate::config::DemoConfig;
use crate::state::DemoState;

const AXIS_LENGTH: f32 = 500.0;
const AXIS_THICKNESS: f32 = 8.0;

/// Records the frame's world into `list`, camera applied.
pub fn build_scene(
    list: &mut DrawList,
    state: &DemoState,
    config: &DemoConfig,
    viewport: Viewport,
) -> TreeStats {
    list.clear();

    list.push_transform();
    list.apply_transform(state.camera.world_to_screen_transform());

    if state.show_axis {
        draw_axis(list);
    }

    list.push_transform();
    list.translate(state.tree_anchor(viewport));
    let mut brush = TreeBrush {
        list: &mut *list,
        palette: BranchPalette::default(),
        max_length: state.tree.max_length,
        thickness_ratio: config.thickness_ratio,
    };
    let stats = FractalTree::new(state.tree).draw(&mut brush);
    list.pop_transform();

    list.pop_transform();
    stats
}

/// World X and Y basis vectors from the origin.
fn draw_axis(list: &mut DrawList) {
    let origin = Vec2::zero();
    list.push_line(ZIndex::SCENE, origin, Vec2::new(AXIS_LENGTH, 0.0), AXIS_THICKNESS, Color::RED);
    list.push_line(ZIndex::SCENE, origin, Vec2::new(0.0, AXIS_LENGTH), AXIS_THICKNESS, Color::RED);
}

/// Turns tree segments into colored lines.
struct TreeBrush<'a> {
    list: &'a mut DrawList,
    palette: BranchPalette,
    max_length: f32,
    thickness_ratio: f32,
}

impl SegmentSink for TreeBrush<'_> {
    fn segment(&mut self, segment: &BranchSegment) {
        let color = Color::from_rgb(self.palette.color_for(segment.length, self.max_length));
        let thickness = (segment.length * self.thickness_ratio).max(1.0);
        self.list.push_line(
            ZIndex::SCENE,
            to_vec2(segment.start),
            to_vec2(segment.end()),
            thickness,
            color,
        );
    }
}

fn to_vec2(p: Point) -> Vec2 {
    Vec2::new(p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_engine::scene::DrawCmd;

    fn setup() -> (DemoConfig, DemoState, Viewport) {
        let config = DemoConfig::default();
        let state = DemoState::new(&config);
        (config, state, Viewport::new(1280.0, 720.0))
    }

    fn first_line(list: &DrawList) -> arbor_engine::scene::LineCmd {
        match &list.items()[0].cmd {
            DrawCmd::Line(l) => l.clone(),
        }
    }

    #[test]
    fn demo_tree_fills_the_list() {
        let (config, state, vp) = setup();
        let mut list = DrawList::new();
        let stats = build_scene(&mut list, &state, &config, vp);
        assert_eq!(stats.segments, 4095);
        assert_eq!(list.len(), 4095);
    }

    #[test]
    fn trunk_rises_from_bottom_centre_of_the_window() {
        let (config, state, vp) = setup();
        let mut list = DrawList::new();
        build_scene(&mut list, &state, &config, vp);

        let trunk = first_line(&list);
        assert_eq!(trunk.start, Vec2::new(640.0, 720.0));
        assert!((trunk.end.y - (720.0 - 175.0)).abs() < 1e-3);
        assert!((trunk.thickness - 350.0 * 0.08 * 0.5).abs() < 1e-4);
        assert_eq!(list.current_transform(), arbor_engine::coords::Transform2D::IDENTITY);
    }

    #[test]
    fn axis_overlay_adds_two_red_lines_first() {
        let (config, mut state, vp) = setup();
        state.show_axis = true;
        let mut list = DrawList::new();
        build_scene(&mut list, &state, &config, vp);

        assert_eq!(list.len(), 4097);
        let axis = first_line(&list);
        assert_eq!(axis.color, Color::RED);
        assert_eq!(axis.start, Vec2::zero());
        assert_eq!(axis.end, Vec2::new(250.0, 0.0));
        assert_eq!(axis.thickness, 4.0);
    }

    #[test]
    fn panning_shifts_everything_on_screen() {
        let (config, mut state, vp) = setup();
        state.camera.offset = Vec2::new(-30.0, 12.0);
        let mut list = DrawList::new();
        build_scene(&mut list, &state, &config, vp);
        assert_eq!(first_line(&list).start, Vec2::new(610.0, 732.0));
    }

    #[test]
    fn thin_branches_keep_one_pixel_of_world_width() {
        let (config, state, vp) = setup();
        let mut list = DrawList::new();
        build_scene(&mut list, &state, &config, vp);
        let thinnest = list
            .items()
            .iter()
            .map(|item| match &item.cmd {
                DrawCmd::Line(l) => l.thickness,
            })
            .fold(f32::INFINITY, f32::min);
        assert!((thinnest - 0.5).abs() < 1e-4);
    }
}
