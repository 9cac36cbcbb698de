use tracing::info;

use crate::cache::{SearchCache, SlotStore};
use crate::model::SearchResultSet;
use crate::search::SearchError;

use super::nav::{Mount, Navigation, Route};
use super::screens::{
    ContentScreen, PlaybackScreen, SearchCompletion, SearchScreen, SearchTicket,
};

#[derive(Debug)]
pub(crate) enum Screen {
    Search(SearchScreen),
    Content(ContentScreen),
    Playback(PlaybackScreen),
}

impl Screen {
    pub(crate) fn route(&self) -> Route {
        match self {
            Self::Search(_) => Route::Search,
            Self::Content(_) => Route::Content,
            Self::Playback(_) => Route::Playback,
        }
    }
}

pub(crate) struct Shell<'a> {
    store: &'a dyn SlotStore,
    screen: Screen,
    status: String,
    next_request_id: u64,
}

impl<'a> Shell<'a> {
    pub(crate) fn new(store: &'a dyn SlotStore) -> Self {
        let mut shell = Self {
            store,
            screen: Screen::Search(SearchScreen::mount(&SearchCache::new(store))),
            status: String::new(),
            next_request_id: 1,
        };
        shell.status = shell.search_mount_status();
        shell
    }

    pub(crate) fn route(&self) -> Route {
        self.screen.route()
    }

    pub(crate) fn screen(&self) -> &Screen {
        &self.screen
    }

    pub(crate) fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub(crate) fn status(&self) -> &str {
        &self.status
    }

    pub(crate) fn navigate(&mut self, navigation: Navigation) {
        info!(route = navigation.route().path(), "navigate");
        match navigation {
            // Already showing: keep the typed keyword and any running search.
            Navigation::Search if self.route() == Route::Search => {}
            Navigation::Search => self.mount_search(),
            Navigation::Content { video, all_videos } => {
                match ContentScreen::guard(video, all_videos) {
                    Mount::Render(screen) => {
                        self.screen = Screen::Content(screen);
                        self.status = status_info("Edit the summary, Ctrl+S to generate.");
                    }
                    Mount::Redirect(route) => {
                        info!(to = route.path(), "content needs a selected video, redirecting");
                        self.navigate(Navigation::bare(route));
                    }
                }
            }
            Navigation::Playback(payload) => {
                self.status = if payload.is_some() {
                    status_info("Generation handed off.")
                } else {
                    status_info("No video selected for playback.")
                };
                self.screen = Screen::Playback(PlaybackScreen::new(payload));
            }
        }
    }

    fn mount_search(&mut self) {
        self.screen = Screen::Search(SearchScreen::mount(&SearchCache::new(self.store)));
        self.status = self.search_mount_status();
    }

    fn search_mount_status(&self) -> String {
        match &self.screen {
            Screen::Search(screen) if !screen.videos().is_empty() => status_info(&format!(
                "Showing {} cached result(s) from the last search.",
                screen.videos().len()
            )),
            _ => status_info("Type a keyword and press Enter to search."),
        }
    }

    pub(crate) fn submit_search(&mut self) -> Option<SearchTicket> {
        let Screen::Search(screen) = &mut self.screen else {
            return None;
        };
        let request_id = self.next_request_id;
        let Some(ticket) = screen.begin_search(request_id) else {
            self.status = status_info("A search is already running.");
            return None;
        };
        self.next_request_id += 1;
        info!(request_id, keyword = %ticket.keyword, "search submitted");
        self.status = status_info(&format!("Searching for \"{}\"...", ticket.keyword));
        Some(ticket)
    }

    pub(crate) fn complete_search(
        &mut self,
        request_id: u64,
        outcome: Result<SearchResultSet, SearchError>,
    ) -> SearchCompletion {
        let Screen::Search(screen) = &mut self.screen else {
            info!(request_id, "search finished after leaving the search screen, ignored");
            return SearchCompletion::Ignored;
        };
        let completion = screen.finish_search(request_id, outcome, &SearchCache::new(self.store));
        match &completion {
            SearchCompletion::Applied { count } => {
                self.status = status_info(&format!("Found {count} video(s)."));
            }
            SearchCompletion::AppliedUncached { count, error } => {
                self.status =
                    status_error(&format!("Found {count} video(s) but caching failed: {error}"));
            }
            SearchCompletion::Failed(error) => {
                self.status = status_error(&format!("Search failed: {error}"));
            }
            SearchCompletion::Ignored => {}
        }
        completion
    }
}

pub(crate) fn status_info(msg: &str) -> String {
    format!("INFO: {msg}")
}

pub(crate) fn status_error(msg: &str) -> String {
    format!("ERROR: {msg}")
}
