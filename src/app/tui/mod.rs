mod actions;
mod render;
mod session;

use std::io;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::cache::SlotStore;
use crate::search::SearchService;

use super::shell::Shell;

use self::actions::{
    KeyOutcome, SearchFetchResult, drain_search_results, handle_key, handle_paste, spawn_search,
};
use self::render::draw_tui;
use self::session::TuiSession;

pub(crate) fn run_tui(store: &dyn SlotStore, service: Arc<dyn SearchService>) -> Result<()> {
    let mut session = TuiSession::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("failed to initialize terminal backend")?;
    terminal.clear()?;

    let mut shell = Shell::new(store);
    let (search_tx, search_rx) = mpsc::channel::<SearchFetchResult>();

    loop {
        drain_search_results(&search_rx, &mut shell);
        terminal.draw(|frame| draw_tui(frame, &shell))?;

        if !event::poll(Duration::from_millis(200))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match handle_key(&mut shell, key) {
                    KeyOutcome::Continue => {}
                    KeyOutcome::Quit => break,
                    KeyOutcome::StartSearch(ticket) => spawn_search(&service, ticket, &search_tx),
                }
            }
            Event::Paste(text) => handle_paste(&mut shell, &text),
            _ => {}
        }
    }

    info!("leaving tui");
    terminal.show_cursor()?;
    session.leave()?;
    Ok(())
}
