mod graphics;
mod settings;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

use settings::Settings;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Isometric Engine starting...");

    let settings = Settings::load(settings::DEFAULT_CONFIG_PATH).context("loading settings")?;
    let config = settings.iso_config().context("invalid world geometry")?;
    let world = settings.build_world(&config).context("building tile map")?;
    info!(%config, "World ready");

    macroquad::Window::from_config(
        graphics::window_conf(&settings.window, &config),
        graphics::run_render_loop(world, config, settings.debug),
    );

    info!("Window closed.");
    Ok(())
}
