use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use spatnav::config::{Config, load_config, load_config_from_path};

mod app;

use app::App;

/// Arrow-key navigation over a board of unevenly sized cards
#[derive(Debug, Parser)]
#[command(name = "spatnav", version, about)]
struct Args {
    /// Number of cards on the board
    #[arg(short = 'n', long, default_value_t = 40)]
    cards: usize,

    /// Config file (defaults to ~/.config/spatnav/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => load_config(),
    };

    if args.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, config, args.cards);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

/// Logs go to a file; writing to stderr would tear the alternate screen
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
    Ok(())
}

fn run(mut terminal: DefaultTerminal, config: Config, cards: usize) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(config, cards, size.width, size.height);
    app.nav.enable();

    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    app.nav.destroy();
    Ok(())
}
