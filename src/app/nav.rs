use crate::model::{PlaybackPayload, SearchResultSet, VideoResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route {
    Search,
    Content,
    Playback,
}

impl Route {
    pub(crate) const ALL: [Route; 3] = [Route::Search, Route::Content, Route::Playback];

    pub(crate) fn path(self) -> &'static str {
        match self {
            Self::Search => "/",
            Self::Content => "/content",
            Self::Playback => "/playback",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Search => "Home",
            Self::Content => "Content Generation",
            Self::Playback => "Video Playback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Navigation {
    Search,
    Content {
        video: Option<VideoResult>,
        all_videos: Option<SearchResultSet>,
    },
    Playback(Option<PlaybackPayload>),
}

impl Navigation {
    pub(crate) fn bare(route: Route) -> Self {
        match route {
            Route::Search => Self::Search,
            Route::Content => Self::Content {
                video: None,
                all_videos: None,
            },
            Route::Playback => Self::Playback(None),
        }
    }

    pub(crate) fn route(&self) -> Route {
        match self {
            Self::Search => Route::Search,
            Self::Content { .. } => Route::Content,
            Self::Playback(_) => Route::Playback,
        }
    }
}

#[derive(Debug)]
pub(crate) enum Mount<T> {
    Render(T),
    Redirect(Route),
}
