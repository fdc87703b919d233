use clap::Parser;
use relm4::prelude::*;
use tabwheel::Route;
use tarikh::config;
use tarikh::gui::app::AppModel;
use tarikh::sys::runtime;

#[derive(Parser, Debug)]
#[command(name = "tarikh", version, about, long_about = None)]
struct Args {
    /// Route to open at startup (overrides `initial_route` from the config)
    #[arg(short, long)]
    route: Option<String>,

    /// Write the default config file if none exists, print its path and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.init_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_setup();
    let location = args
        .route
        .map(Route::new)
        .or_else(|| config.initial_route.clone());

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx.clone());

    // our flags are already parsed, keep GTK from seeing them
    let app = RelmApp::new("org.tarikh.shell").with_args(Vec::new());

    app.run::<AppModel>((config, location, rx));
    Ok(())
}
