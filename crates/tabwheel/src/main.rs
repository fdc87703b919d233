use clap::{Parser, Subcommand};
use std::io::Write;
use std::os::unix::net::UnixStream;
use tabwheel::angle::{self, TiePolicy};
use tabwheel::ipc::{ControlCommand, SOCKET_PATH};
use tabwheel::{ArcLayout, RadialTabSelector, Route, Tab};

#[derive(Parser, Debug)]
#[command(name = "tabwheel", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Tell a running tarikh shell that the location changed (no navigation is emitted)
    Goto { route: String },
    /// Press a tab in a running tarikh shell
    Select { index: usize },
    /// Show the tarikh window
    Show,
    /// Hide the tarikh window
    Hide,
    /// Print the transforms of a settled wheel
    Layout {
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
        /// Selected tab (defaults to the middle one)
        #[arg(short, long)]
        selected: Option<usize>,
        #[arg(short, long, default_value_t = ArcLayout::default().width)]
        width: f64,
    },
    /// Print the rotation chosen for a transition between two tabs
    Path {
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
        #[arg(short, long, default_value_t = TiePolicy::default())]
        tie_break: TiePolicy,
        from: usize,
        to: usize,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Goto { route } => send_command(&ControlCommand::Goto(Route::new(route))),
        Commands::Select { index } => send_command(&ControlCommand::Select(index)),
        Commands::Show => send_command(&ControlCommand::Show),
        Commands::Hide => send_command(&ControlCommand::Hide),
        Commands::Layout {
            count,
            selected,
            width,
        } => print_layout(count, selected, width),
        Commands::Path {
            count,
            tie_break,
            from,
            to,
        } => print_path(count, tie_break, from, to),
    }
}

fn numbered_tabs(count: usize) -> Vec<Tab> {
    (0..count)
        .map(|i| Tab::new(format!("Tab {}", i), format!("/{}", i), ""))
        .collect()
}

fn settled_wheel(
    count: usize,
    selected: Option<usize>,
) -> anyhow::Result<RadialTabSelector<()>> {
    if let Some(index) = selected
        && index >= count
    {
        anyhow::bail!("Tab {} does not exist on a wheel of {} tabs", index, count);
    }

    let location = selected.map(|i| Route::new(format!("/{}", i)));
    Ok(RadialTabSelector::new(
        numbered_tabs(count),
        location.as_ref(),
        (),
    )?)
}

fn print_layout(count: usize, selected: Option<usize>, width: f64) -> anyhow::Result<()> {
    let wheel = settled_wheel(count, selected)?.with_layout(ArcLayout::default().with_width(width));

    println!(
        "wheel angle {:.1}deg, selected {}",
        wheel.angle().to_degrees(),
        wheel.selected()
    );
    println!(
        "{:>5} {:>9} {:>9} {:>8} {:>6} {:>7} {:>3}",
        "tab", "x", "y", "rot", "scale", "opacity", "z"
    );
    for (i, t) in wheel.transforms().iter().enumerate() {
        println!(
            "{:>5} {:>9.2} {:>9.2} {:>8.2} {:>6.3} {:>7.3} {:>3}",
            i,
            t.translate_x,
            t.translate_y,
            t.rotation.to_degrees(),
            t.scale,
            t.opacity,
            t.z_order
        );
    }
    Ok(())
}

fn print_path(count: usize, tie_break: TiePolicy, from: usize, to: usize) -> anyhow::Result<()> {
    if to >= count {
        anyhow::bail!("Tab {} does not exist on a wheel of {} tabs", to, count);
    }
    let wheel = settled_wheel(count, Some(from))?.with_tie_policy(tie_break);

    let start = wheel.angle();
    let end = wheel.choose_rotation_path(from, to);
    let spin = angle::Spin::of(end - start)
        .map(|s| format!("{:?}", s))
        .unwrap_or_else(|| "none".to_string());

    println!(
        "{} -> {}: {:.1}deg -> {:.1}deg ({:+.1}deg, {})",
        from,
        to,
        start.to_degrees(),
        end.to_degrees(),
        (end - start).to_degrees(),
        spin
    );
    Ok(())
}

fn send_command(cmd: &ControlCommand) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to tarikh at {}: {}. Is tarikh running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", cmd)?;
    Ok(())
}
