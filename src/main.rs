//! desktop-widgets - opens one frameless window per configured panel

mod runtime;

#[cfg(debug_assertions)]
mod debug_dump;

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use desktop_widgets::cli::CliArgs;

use runtime::App;

fn main() -> Result<()> {
    let startup = match CliArgs::parse().into_config() {
        Ok(startup) => startup,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    desktop_widgets::tracing::init();

    let config = startup.load_widgets_config();
    if startup.print_config {
        let yaml = config.to_yaml().map_err(anyhow::Error::msg)?;
        print!("{}", yaml);
        return Ok(());
    }
    if startup.save_config {
        config.save().map_err(anyhow::Error::msg)?;
        return Ok(());
    }

    tracing::info!(panels = config.panels.len(), "starting");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
