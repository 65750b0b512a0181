use std::fs::File;
use std::io::Stdout;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use gridlife::app::App;
use gridlife::config::Config;
use gridlife::io;

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let file = File::create(&config.log_file)
        .with_context(|| format!("Failed to create log file {}", config.log_file.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}

fn run(config: &Config, stdout: &mut Stdout) -> anyhow::Result<()> {
    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let mut app = App::new(cols, rows);

    let frame_time = config.frame_time();
    let mut last_tick = Instant::now();

    loop {
        // Poll events for whatever is left of the current frame
        let time_left = frame_time.saturating_sub(last_tick.elapsed());

        if event::poll(time_left)? {
            if let Some(event) = io::convert_event(event::read()?) {
                if !app.handle(event) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= frame_time {
            last_tick = Instant::now();
            app.tick();
            app.draw(stdout)?;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;
    init_tracing(&config)?;

    info!(?config, "Starting gridlife");

    let mut stdout = std::io::stdout();

    terminal::enable_raw_mode().context("Failed to enable raw mode")?;

    // Raw mode is on from here, so every failure below still goes through the restore
    let res = execute!(
        stdout,
        terminal::EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    )
    .context("Failed to set up the terminal")
    .and_then(|()| run(&config, &mut stdout));

    let restored = restore_terminal(&mut stdout);

    res.and(restored)
}

fn restore_terminal(stdout: &mut Stdout) -> anyhow::Result<()> {
    let screen = execute!(
        stdout,
        cursor::Show,
        DisableMouseCapture,
        terminal::LeaveAlternateScreen
    );
    terminal::disable_raw_mode().context("Failed to disable raw mode")?;

    screen.context("Failed to restore the terminal")
}
