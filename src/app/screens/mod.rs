mod content;
mod playback;
mod search;

pub(crate) use content::ContentScreen;
pub(crate) use playback::PlaybackScreen;
pub(crate) use search::{SearchCompletion, SearchFocus, SearchScreen, SearchTicket};
