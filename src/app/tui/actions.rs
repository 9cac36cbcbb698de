use std::sync::{Arc, mpsc};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::SearchResultSet;
use crate::search::{SearchError, SearchService};

use super::super::nav::{Navigation, Route};
use super::super::screens::{SearchFocus, SearchTicket};
use super::super::shell::{Screen, Shell};
use super::super::text::TextInput;

#[derive(Debug)]
pub(super) enum KeyOutcome {
    Continue,
    Quit,
    StartSearch(SearchTicket),
}

#[derive(Debug)]
pub(super) struct SearchFetchResult {
    pub(super) request_id: u64,
    pub(super) outcome: Result<SearchResultSet, SearchError>,
}

pub(super) fn handle_key(shell: &mut Shell<'_>, key: KeyEvent) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return KeyOutcome::Quit,
        KeyCode::F(1) => {
            shell.navigate(Navigation::bare(Route::Search));
            return KeyOutcome::Continue;
        }
        KeyCode::F(2) => {
            shell.navigate(Navigation::bare(Route::Content));
            return KeyOutcome::Continue;
        }
        KeyCode::F(3) => {
            shell.navigate(Navigation::bare(Route::Playback));
            return KeyOutcome::Continue;
        }
        _ => {}
    }

    let mut navigation = None;
    let mut submit = false;
    match shell.screen_mut() {
        Screen::Search(screen) => match (screen.focus, key.code) {
            (_, KeyCode::Tab) => screen.toggle_focus(),
            (SearchFocus::Keyword, KeyCode::Enter) => submit = true,
            (SearchFocus::Keyword, code) => edit_line(&mut screen.keyword, code, ctrl),
            (SearchFocus::Results, KeyCode::Up) => screen.select_previous(),
            (SearchFocus::Results, KeyCode::Down) => screen.select_next(),
            (SearchFocus::Results, KeyCode::Enter) => navigation = screen.open_selected(),
            (SearchFocus::Results, _) => {}
        },
        Screen::Content(screen) => match key.code {
            KeyCode::Char('s') if ctrl => navigation = Some(screen.generate()),
            KeyCode::Enter => screen.summary.insert('\n'),
            code => edit_line(&mut screen.summary, code, ctrl),
        },
        Screen::Playback(_) => {}
    }

    if submit && let Some(ticket) = shell.submit_search() {
        return KeyOutcome::StartSearch(ticket);
    }
    if let Some(navigation) = navigation {
        shell.navigate(navigation);
    }
    KeyOutcome::Continue
}

pub(super) fn handle_paste(shell: &mut Shell<'_>, text: &str) {
    match shell.screen_mut() {
        Screen::Search(screen) if screen.focus == SearchFocus::Keyword => {
            // The keyword box is a single line.
            let flattened = text.replace(['\r', '\n'], " ");
            screen.keyword.insert_str(&flattened);
        }
        Screen::Content(screen) => {
            let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
            screen.summary.insert_str(&normalized);
        }
        _ => {}
    }
}

fn edit_line(input: &mut TextInput, code: KeyCode, ctrl: bool) {
    match code {
        KeyCode::Char(ch) if !ctrl => input.insert(ch),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

pub(super) fn spawn_search(
    service: &Arc<dyn SearchService>,
    ticket: SearchTicket,
    tx: &mpsc::Sender<SearchFetchResult>,
) {
    let service = Arc::clone(service);
    let tx = tx.clone();
    std::thread::spawn(move || {
        let outcome = service.search(&ticket.keyword);
        let _ = tx.send(SearchFetchResult {
            request_id: ticket.request_id,
            outcome,
        });
    });
}

pub(super) fn drain_search_results(rx: &mpsc::Receiver<SearchFetchResult>, shell: &mut Shell<'_>) {
    while let Ok(result) = rx.try_recv() {
        shell.complete_search(result.request_id, result.outcome);
    }
}
