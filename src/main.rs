use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use vaultfeed::app::{cli::Args, config::AppConfig, events::AppEvent, inputs, App};
use vaultfeed::catalog::Catalog;
use vaultfeed::thumbs::{OEmbedClient, ThumbnailCache, ThumbnailResolver};
use vaultfeed::{logging, ui};

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    let args = Args::parse();

    if args.generate_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    // Held until exit so buffered log lines get flushed
    let _log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("vaultfeed: logging disabled: {}", e);
            None
        }
    };

    let mut config = AppConfig::load();
    args.apply(&mut config);

    // Bad catalogs fail here, before the terminal is taken over
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path, config.seed)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::sample(config.seed)?,
    };
    tracing::info!(items = catalog.len(), seed = config.seed, "catalog ready");

    if args.list {
        print_list(&catalog, &args.folder, &args.query);
        return Ok(());
    }

    // Shared HTTP client for oEmbed lookups and preview images
    let client = reqwest::Client::builder()
        .user_agent(concat!("vaultfeed/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default();

    let (tx, rx) = mpsc::channel(100);
    let thumbs = ThumbnailCache::new();

    if config.resolve_thumbnails {
        let lookup = OEmbedClient::new(
            client.clone(),
            &config.oembed_endpoint,
            Duration::from_secs(config.oembed_timeout_secs),
        );
        let resolver = ThumbnailResolver::new(Arc::new(lookup), thumbs.clone());
        let pending = resolver.spawn_all(catalog.items(), &tx);
        tracing::info!(pending = pending.len(), "thumbnail lookups started");
    } else {
        tracing::info!("thumbnail lookups disabled");
    }

    let mut app = App::new(catalog, config, thumbs);

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            // Half-initialised: raw mode may already be on
            let _ = restore_terminal();
            return Err(e.into());
        }
    };

    let result = run(&mut terminal, &mut app, tx, rx, &client).await;

    // Nothing keeps playing once we are gone
    app.teardown();

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "exited with error");
        eprintln!("vaultfeed: see {}", logging::current_log_file().display());
    }
    result
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

async fn run(
    terminal: &mut Tui,
    app: &mut App,
    tx: mpsc::Sender<AppEvent>,
    mut rx: mpsc::Receiver<AppEvent>,
    client: &reqwest::Client,
) -> Result<()> {
    // 1. Input Event Task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. Animation Tick Task ⚡
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        // ~60 FPS, keeps the toast slide smooth
        let mut interval = tokio::time::interval(Duration::from_millis(16));
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        let Some(event) = rx.recv().await else {
            break;
        };
        match event {
            AppEvent::Input(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                inputs::handle_event(key, app, &tx, client);
            }
            AppEvent::Input(Event::Mouse(mouse)) => {
                inputs::handle_mouse(mouse, app, &tx, client);
            }
            AppEvent::Input(_) => {}
            AppEvent::ThumbnailResolved(id) => {
                tracing::debug!(%id, "thumbnail resolved");
                // The open clip may just have gained a preview image
                if app.modal.focused().is_some_and(|item| item.id == id) {
                    inputs::request_preview(app, &tx, client);
                }
            }
            AppEvent::PreviewLoaded(url, result) => app.on_preview_loaded(url, result),
            AppEvent::Tick => app.on_tick(),
        }

        if !app.is_running {
            break;
        }
    }
    Ok(())
}

fn print_list(catalog: &Catalog, folder: &str, query: &str) {
    for item in catalog.filter(folder, query) {
        println!(
            "{:<6} {:<10} {:<10} {:<28} {}",
            item.id,
            item.folder,
            item.provider().name(),
            item.display_title(),
            item.public_url().unwrap_or_default()
        );
    }
}

