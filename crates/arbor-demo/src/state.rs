use arbor_engine::coords::{Camera2D, Vec2, Viewport};
use arbor_engine::input::{InputFrame, InputState, Key};
use arbor_fractal::TreeParameters;

use crate::config::DemoConfig;

/// Everything that survives from one frame to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoState {
    pub camera: Camera2D,
    pub tree: TreeParameters,
    pub show_axis: bool,
}

impl DemoState {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            camera: Camera2D::with_zoom(config.zoom),
            tree: TreeParameters::new(config.trunk_length, config.angle_degrees),
            show_axis: false,
        }
    }

    /// Applies one frame of input.
    ///
    /// Opposing keys do not cancel: D wins over A, S over W and Up over Down.
    pub fn update(&mut self, input: &InputState, frame: &InputFrame, dt: f32, config: &DemoConfig) {
        let mut pan = Vec2::zero();

        if input.key_down(Key::D) {
            pan.x -= 1.0;
        } else if input.key_down(Key::A) {
            pan.x += 1.0;
        }

        if input.key_down(Key::S) {
            pan.y -= 1.0;
        } else if input.key_down(Key::W) {
            pan.y += 1.0;
        }

        self.camera.offset += pan * (config.camera_speed * dt);

        let turn = if input.key_down(Key::ArrowUp) {
            1.0
        } else if input.key_down(Key::ArrowDown) {
            -1.0
        } else {
            0.0
        };
        if turn != 0.0 {
            self.tree.angle_degrees += turn * config.angle_rate * dt;
            log::debug!("branch angle {:.2}°", self.tree.angle_degrees);
        }

        if frame.key_pressed(Key::F1) {
            self.show_axis = !self.show_axis;
            log::debug!("axis overlay {}", if self.show_axis { "on" } else { "off" });
        }
    }

    /// World position of the tree root: bottom centre of the unpanned view.
    ///
    /// Panning moves the camera, not the tree.
    pub fn tree_anchor(&self, viewport: Viewport) -> Vec2 {
        let home = Camera2D { offset: Vec2::zero(), ..self.camera };
        home.visible_world(viewport)
            .map(|r| r.bottom_center())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_engine::input::{InputEvent, KeyState};

    fn held(keys: &[Key]) -> InputState {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for &key in keys {
            state.apply_event(&mut frame, InputEvent::Key { key, state: KeyState::Pressed, repeat: false });
        }
        state
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn starts_from_config() {
        let s = DemoState::new(&DemoConfig::default());
        assert_eq!(s.camera.zoom, 0.5);
        assert_eq!(s.camera.offset, Vec2::zero());
        assert_eq!(s.tree.trunk_length, 350.0);
        assert_eq!(s.tree.angle_degrees, 30.0);
        assert!(!s.show_axis);
    }

    #[test]
    fn pan_direction_and_precedence() {
        let config = DemoConfig::default();
        let mut s = DemoState::new(&config);

        s.update(&held(&[Key::A, Key::D, Key::W]), &InputFrame::default(), 0.5, &config);
        assert!(approx(s.camera.offset.x, -120.0), "D wins over A");
        assert!(approx(s.camera.offset.y, 120.0));

        let mut s = DemoState::new(&config);
        s.update(&held(&[Key::S, Key::W, Key::A]), &InputFrame::default(), 0.5, &config);
        assert!(approx(s.camera.offset.x, 120.0));
        assert!(approx(s.camera.offset.y, -120.0), "S wins over W");
    }

    #[test]
    fn arrows_change_angle_at_fixed_rate() {
        let config = DemoConfig::default();
        let mut s = DemoState::new(&config);

        s.update(&held(&[Key::ArrowUp, Key::ArrowDown]), &InputFrame::default(), 0.5, &config);
        assert!(approx(s.tree.angle_degrees, 35.0), "Up wins over Down");

        s.update(&held(&[Key::ArrowDown]), &InputFrame::default(), 1.0, &config);
        assert!(approx(s.tree.angle_degrees, 25.0));
    }

    #[test]
    fn idle_frame_changes_nothing() {
        let config = DemoConfig::default();
        let mut s = DemoState::new(&config);
        let before = s.clone();
        s.update(&InputState::default(), &InputFrame::default(), 0.016, &config);
        assert_eq!(s, before);
    }

    #[test]
    fn f1_toggles_axis_once_per_press() {
        let config = DemoConfig::default();
        let mut s = DemoState::new(&config);
        let mut input = InputState::default();
        let mut frame = InputFrame::default();

        input.apply_event(&mut frame, InputEvent::Key { key: Key::F1, state: KeyState::Pressed, repeat: false });
        s.update(&input, &frame, 0.016, &config);
        assert!(s.show_axis);

        // Still held next frame: no new press.
        frame.clear();
        s.update(&input, &frame, 0.016, &config);
        assert!(s.show_axis);
    }

    #[test]
    fn anchor_is_bottom_centre_of_world_view() {
        let mut s = DemoState::new(&DemoConfig::default());
        let vp = Viewport::new(1280.0, 720.0);
        assert_eq!(s.tree_anchor(vp), Vec2::new(1280.0, 1440.0));

        s.camera.offset = Vec2::new(300.0, -50.0);
        assert_eq!(s.tree_anchor(vp), Vec2::new(1280.0, 1440.0));
    }
}
