use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use pixruler::cli::CliArgs;
use pixruler::config::RulerConfig;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    pixruler::logging::init();

    let args = CliArgs::parse();
    let saved = if args.reset {
        RulerConfig::default()
    } else {
        RulerConfig::load()
    };
    let config = args.apply(saved);
    tracing::debug!("Starting with {:?}", config);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
