use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use quickdrop::cli::CliArgs;
use quickdrop::model::AppModel;
use quickdrop::runtime::App;

fn main() -> Result<()> {
    quickdrop::tracing::init();

    let args = CliArgs::parse();
    let model = AppModel::bootstrap(args.config);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(model, args.show);
    event_loop.run_app(&mut app)?;

    Ok(())
}
