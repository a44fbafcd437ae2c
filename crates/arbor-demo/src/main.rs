mod app;
mod config;
mod scene;
mod state;

use arbor_engine::device::GpuInit;
use arbor_engine::logging::{init_logging, LoggingConfig};
use arbor_engine::window::Runtime;

use app::DemoApp;
use config::DemoConfig;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::default();
    log::info!(
        "fractal tree: trunk {} px, angle {}°, zoom {}, {} fps",
        config.trunk_length,
        config.angle_degrees,
        config.zoom,
        config.target_fps
    );

    Runtime::run(config.runtime_config(), GpuInit::default(), DemoApp::new(config))
}
