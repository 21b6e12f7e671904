use anyhow::{Context, Result};
use app::App;
use clap::{Parser, Subcommand};
use config::Config;
use course_admin_client::Token;
use event::EventBus;
use log::{info, warn};
use pages::Route;
use ratatui::prelude::*;
use simplelog::WriteLogger;
use std::{fs::File, io};
use storage::LocalStorage;
use store::{Store, Worker};

mod app;
mod config;
mod event;
mod pages;
mod storage;
mod store;
mod styles;
mod tui;
mod widgets;

/// View, edit and delete courses in the course catalog
#[derive(Parser)]
#[command(name = "course-admin", version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    /// Catalog server to talk to, instead of the configured one
    #[arg(long)]
    base_url: Option<String>,

    /// Course to open. Without one, we start on the course list.
    course_id: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Remember the bearer token to send with every request
    SetToken { token: String },

    /// Forget the stored bearer token
    ClearToken,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let log_path = config::utf8(config::dirs()?.place_cache_file("course-admin.log")?)?;
    WriteLogger::init(
        config.log_level()?,
        simplelog::Config::default(),
        File::create(&log_path).context("error creating log file")?,
    )?;

    match cli.command {
        Some(Command::SetToken { token }) => {
            let mut storage = LocalStorage::load()?;
            storage.set_token(Token::from(token));
            storage.save()?;
            info!("saved token");
            println!("Token saved to {}", LocalStorage::path()?);
            return Ok(());
        }
        Some(Command::ClearToken) => {
            let mut storage = LocalStorage::load()?;
            storage.remove_item(storage::TOKEN_KEY);
            storage.save()?;
            info!("cleared token");
            return Ok(());
        }
        None => (),
    }

    let client = config.client(LocalStorage::load()?.token())?;
    if !client.has_token() {
        warn!("no token stored, requests will be unauthenticated");
    }
    info!("using server {}", client.base());

    // the bus must outlive the app, so the worker sees its channel close before we join it
    let events = EventBus::new();
    events.spawn_terminal_listener()?;
    let store = Store::new(Worker::spawn_on(&events, client)?);

    let route = cli.course_id.map(Route::Course).unwrap_or(Route::Courses);
    let mut app = App::new(store, route);

    let backend = CrosstermBackend::new(io::stderr());
    let mut terminal = Terminal::new(backend)?;
    tui::init(&mut terminal)?;

    let res = run(&mut terminal, &events, &mut app);

    tui::exit(&mut terminal)?;
    drop(app);

    res
}

fn run<B: Backend>(terminal: &mut Terminal<B>, events: &EventBus, app: &mut App) -> Result<()> {
    while app.running {
        tui::draw(terminal, app)?;
        app.handle_event(events.next()?);
    }

    Ok(())
}
