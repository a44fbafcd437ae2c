use arbor_engine::paint::Color;
use arbor_engine::render::post::PostParams;
use arbor_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Startup configuration for the demo.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub target_fps: u32,

    /// Initial camera zoom.
    pub zoom: f32,
    pub trunk_length: f32,
    pub angle_degrees: f32,

    /// Camera pan speed, logical pixels per second.
    pub camera_speed: f32,
    /// Branch angle change while an arrow key is held, degrees per second.
    pub angle_rate: f32,
    /// Branch thickness as a fraction of its length (never below one pixel).
    pub thickness_ratio: f32,

    /// Scene background, behind the tree.
    pub clear_color: Color,
    /// Surface background, behind the composited scene.
    pub surface_color: Color,
    pub post: PostParams,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Fractal Tree".to_string(),
            width: 1280.0,
            height: 720.0,
            target_fps: 60,

            zoom: 0.5,
            trunk_length: 350.0,
            angle_degrees: 30.0,

            camera_speed: 240.0,
            angle_rate: 10.0,
            thickness_ratio: 0.08,

            clear_color: Color::SKY_BLUE,
            surface_color: Color::WHITE,
            post: PostParams::default(),
        }
    }
}

impl DemoConfig {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            resizable: true,
            target_fps: Some(self.target_fps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_demo() {
        let c = DemoConfig::default();
        assert_eq!(c.title, "Fractal Tree");
        assert_eq!((c.width, c.height), (1280.0, 720.0));
        assert_eq!(c.zoom, 0.5);
        assert_eq!(c.trunk_length, 350.0);
        assert_eq!(c.angle_degrees, 30.0);
        assert_eq!(c.angle_rate, 10.0);
    }

    #[test]
    fn runtime_config_caps_fps() {
        let rc = DemoConfig::default().runtime_config();
        assert_eq!(rc.target_fps, Some(60));
        assert_eq!(rc.initial_size, LogicalSize::new(1280.0, 720.0));
    }
}
