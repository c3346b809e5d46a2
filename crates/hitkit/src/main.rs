use anyhow::Result;
use hitkit_geometry::IntersectConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting hitkit {}", env!("CARGO_PKG_VERSION"));
    log::debug!("Default intersection config: {:?}", IntersectConfig::default());

    // The kernel is used as a library; nothing runs here.

    Ok(())
}
