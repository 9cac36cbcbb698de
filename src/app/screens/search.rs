use tracing::{debug, warn};

use crate::cache::SearchCache;
use crate::model::{SearchResultSet, VideoResult};
use crate::search::SearchError;

use super::super::nav::Navigation;
use super::super::text::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchFocus {
    Keyword,
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchTicket {
    pub(crate) request_id: u64,
    pub(crate) keyword: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchCompletion {
    Applied { count: usize },
    AppliedUncached { count: usize, error: String },
    Failed(String),
    Ignored,
}

#[derive(Debug)]
pub(crate) struct SearchScreen {
    pub(crate) keyword: TextInput,
    pub(crate) focus: SearchFocus,
    videos: SearchResultSet,
    selected: Option<usize>,
    in_flight: Option<u64>,
    cached_at: Option<String>,
}

impl SearchScreen {
    pub(crate) fn mount(cache: &SearchCache<'_>) -> Self {
        let cached = cache.load();
        Self {
            keyword: TextInput::default(),
            focus: SearchFocus::Keyword,
            selected: (!cached.videos.is_empty()).then_some(0),
            videos: cached.videos,
            in_flight: None,
            cached_at: cached.stored_at,
        }
    }

    pub(crate) fn videos(&self) -> &[VideoResult] {
        &self.videos
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub(crate) fn is_searching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub(crate) fn cached_at(&self) -> Option<&str> {
        self.cached_at.as_deref()
    }

    pub(crate) fn begin_search(&mut self, request_id: u64) -> Option<SearchTicket> {
        if let Some(pending) = self.in_flight {
            debug!(pending, "search already in flight, submit ignored");
            return None;
        }
        self.in_flight = Some(request_id);
        Some(SearchTicket {
            request_id,
            keyword: self.keyword.as_str().to_string(),
        })
    }

    pub(crate) fn finish_search(
        &mut self,
        request_id: u64,
        outcome: Result<SearchResultSet, SearchError>,
        cache: &SearchCache<'_>,
    ) -> SearchCompletion {
        if self.in_flight != Some(request_id) {
            debug!(request_id, "stale search result dropped");
            return SearchCompletion::Ignored;
        }
        self.in_flight = None;

        let videos = match outcome {
            Ok(videos) => videos,
            Err(err) => {
                warn!(request_id, "search failed: {err}");
                return SearchCompletion::Failed(err.to_string());
            }
        };

        let count = videos.len();
        let save_result = cache.save(&videos);
        self.videos = videos;
        self.selected = (count > 0).then_some(0);
        self.cached_at = None;

        match save_result {
            Ok(()) => SearchCompletion::Applied { count },
            Err(err) => {
                warn!("search results not cached: {err:#}");
                SearchCompletion::AppliedUncached {
                    count,
                    error: format!("{err:#}"),
                }
            }
        }
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SearchFocus::Keyword if !self.videos.is_empty() => SearchFocus::Results,
            _ => SearchFocus::Keyword,
        };
    }

    pub(crate) fn select_previous(&mut self) {
        if let Some(selected) = self.selected {
            self.selected = Some(selected.saturating_sub(1));
        }
    }

    pub(crate) fn select_next(&mut self) {
        if let Some(selected) = self.selected
            && !self.videos.is_empty()
        {
            self.selected = Some((selected + 1).min(self.videos.len() - 1));
        }
    }

    pub(crate) fn selected_video(&self) -> Option<&VideoResult> {
        self.selected.and_then(|idx| self.videos.get(idx))
    }

    pub(crate) fn open_selected(&self) -> Option<Navigation> {
        let video = self.selected_video()?;
        Some(Navigation::Content {
            video: Some(video.clone()),
            all_videos: Some(self.videos.clone()),
        })
    }
}
