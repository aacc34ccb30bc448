use clap::Parser;
use fractal_renderer::{RunGuiCommand, ViewerConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::parse();
    RunGuiCommand::new(config).execute()?;

    Ok(())
}
