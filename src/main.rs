use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use tokio::time::MissedTickBehavior;

use cpugauge::app::App;
use cpugauge::config::{self, Config, load_config, load_config_from_path};
use cpugauge::event::{Event, EventHandler};
use cpugauge::ui;

#[derive(Parser)]
#[command(name = "cpugauge", about = "Terminal gauge for live CPU utilization")]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sampling interval in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Decimal places for the percentage (0-6)
    #[arg(long)]
    decimal_places: Option<u8>,

    /// Print one reading per interval to stdout instead of the TUI
    #[arg(long, default_value_t = false)]
    plain: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);

    if cli.plain {
        return run_plain(config).await;
    }

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, config).await;

    ratatui::restore();

    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: Config) -> Result<()> {
    let tick_rate = Duration::from_millis(config.general.refresh_rate_ms);
    let mut app = App::new(&config);
    let mut events = EventHandler::new(tick_rate);

    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        app.handle_key(key);
                    }
                }
                Event::Tick => app.refresh(),
                Event::Resize => {}
            }
            terminal.draw(|frame| ui::draw(frame, &app))?;
        }
    }

    Ok(())
}

async fn run_plain(config: Config) -> Result<()> {
    let mut app = App::new(&config);
    let mut interval = tokio::time::interval(Duration::from_millis(config.general.refresh_rate_ms));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first interval tick completes immediately; consume it so the first
    // measurement spans a real interval.
    interval.tick().await;

    loop {
        interval.tick().await;
        app.refresh();
        println!("{}", app.display_text());
    }
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.refresh_rate {
        config.general.refresh_rate_ms = rate;
    }
    if let Some(places) = cli.decimal_places {
        config.general.decimal_places = places;
    }

    config
}
