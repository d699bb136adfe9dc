//! Interactive terminal front-end.
//!
//! Thin wrapper over the search coordinator: raw-mode keystrokes feed the
//! query (debounced on the trailing edge), the coordinator's notify callback
//! marks the screen dirty, and each redraw prints the loading line, the
//! result cards, and the no-results line.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use critterdex_core::{ApiClient, AppConfig, Catalog};
use critterdex_search::{SearchConfig, SearchCoordinator, SearchResults};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match load_config() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return Ok(());
        }
    };

    let client = Arc::new(ApiClient::new(config.api.clone()));
    let catalog = Catalog::load(&client);

    let dirty = Arc::new(AtomicBool::new(true));
    let notify = {
        let dirty = Arc::clone(&dirty);
        Arc::new(move || dirty.store(true, Ordering::SeqCst)) as Arc<dyn Fn() + Send + Sync>
    };
    let coordinator = SearchCoordinator::new(
        catalog,
        client,
        SearchConfig::from(&config.search),
        notify,
    );

    terminal::enable_raw_mode()?;
    let outcome = run(coordinator, &config, &dirty);
    terminal::disable_raw_mode()?;
    outcome
}

fn load_config() -> Result<AppConfig, String> {
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => AppConfig::load(&path)
            .map_err(|err| format!("failed to load {}: {err}", path.display()))?,
        None => AppConfig::default(),
    };

    let problems = config.validate();
    if problems.is_empty() {
        Ok(config)
    } else {
        Err(format!("invalid config: {}", problems.join("; ")))
    }
}

fn run(mut coordinator: SearchCoordinator, config: &AppConfig, dirty: &AtomicBool) -> io::Result<()> {
    let debounce = Duration::from_millis(config.search.debounce_ms);
    let mut query = String::new();
    let mut pending_since: Option<Instant> = None;

    loop {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (key.code, key.modifiers) {
                    (KeyCode::Esc, _) => break,
                    (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Backspace, _) => {
                        query.pop();
                        pending_since = Some(Instant::now());
                        dirty.store(true, Ordering::SeqCst);
                    }
                    (KeyCode::Char(c), _) => {
                        query.push(c);
                        pending_since = Some(Instant::now());
                        dirty.store(true, Ordering::SeqCst);
                    }
                    _ => {}
                }
            }
        }

        if let Some(since) = pending_since {
            if since.elapsed() >= debounce {
                pending_since = None;
                coordinator.set_query(&query);
            }
        }

        if dirty.swap(false, Ordering::SeqCst) {
            render(&query, &coordinator.results(), config.search.min_query_len)?;
        }
    }

    Ok(())
}

fn render(query: &str, results: &SearchResults, min_query_len: usize) -> io::Result<()> {
    let mut out = io::stdout();
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    write!(out, "Search> {query}\r\n\r\n")?;

    if results.is_loading() {
        write!(out, "Loading...\r\n\r\n")?;
    }

    for record in results.iter() {
        write!(
            out,
            "#{} {} [{}]  {:.1} m  {:.1} kg\r\n",
            record.id, record.display_name, record.type_list, record.height_m, record.weight_kg
        )?;
        write!(out, "    {}\r\n", record.artwork_url)?;
        write!(out, "    {}\r\n\r\n", record.description)?;
    }

    let normalized = query.trim();
    if !results.is_loading() && normalized.chars().count() >= min_query_len && results.is_empty() {
        write!(out, "No results for \"{normalized}\"\r\n")?;
    }

    out.flush()
}
