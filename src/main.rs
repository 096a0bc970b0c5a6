use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use portfolio::app::App;
use portfolio::constants::UI_POLL_MS;
use portfolio::feeds::{self, FeedUpdate};
use portfolio::input::map_key;
use portfolio::{build_info, logging, ui};
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

fn print_help() {
    println!("Portfolio - Bulls and Cows in the terminal\n");
    println!("Usage: portfolio [command]\n");
    println!("Commands:");
    println!("  --offline  Skip the weather and quote fetches");
    println!("  --version  Show version information");
    println!("  --help     Show this help message");
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut offline = false;

    if args.len() > 1 {
        match args[1].as_str() {
            "--offline" => offline = true,
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'portfolio --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    logging::init();
    tracing::info!(version = %build_info::version_line(), offline, "starting");

    // Fire-and-forget: the game never waits on these
    let feed_rx = if offline {
        None
    } else {
        Some(feeds::spawn_fetches())
    };

    let mut rng = rand::thread_rng();
    let mut app = App::new(&mut rng);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut app, feed_rx, &mut rng);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal loop failed");
    }
    tracing::info!("exiting");
    result
}

/// Apply every pending feed update. Returns true once both fetches are done.
fn drain_feeds(rx: &Receiver<FeedUpdate>, app: &mut App) -> bool {
    loop {
        match rx.try_recv() {
            Ok(update) => app.apply_feed(update),
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => return true,
        }
    }
}

fn run<R: Rng>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    mut feed_rx: Option<Receiver<FeedUpdate>>,
    rng: &mut R,
) -> io::Result<()> {
    loop {
        let disconnected = feed_rx.as_ref().is_some_and(|rx| drain_feeds(rx, app));
        if disconnected {
            feed_rx = None;
        }

        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(UI_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if !app.handle_input(map_key(key_event), rng) {
                    return Ok(());
                }
            }
        }
    }
}
