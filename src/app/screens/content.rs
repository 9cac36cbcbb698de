use crate::model::{PlaybackPayload, SearchResultSet, VideoResult, combined_transcript};

use super::super::nav::{Mount, Navigation, Route};
use super::super::text::TextInput;

#[derive(Debug)]
pub(crate) struct ContentScreen {
    video: VideoResult,
    all_videos: SearchResultSet,
    transcript: String,
    pub(crate) summary: TextInput,
}

impl ContentScreen {
    pub(crate) fn guard(
        video: Option<VideoResult>,
        all_videos: Option<SearchResultSet>,
    ) -> Mount<Self> {
        let (Some(video), Some(all_videos)) = (video, all_videos) else {
            return Mount::Redirect(Route::Search);
        };
        if all_videos.is_empty() || video.video_id.trim().is_empty() {
            return Mount::Redirect(Route::Search);
        }

        let transcript = combined_transcript(&all_videos);
        let summary = TextInput::new(&video.summary);
        Mount::Render(Self {
            video,
            all_videos,
            transcript,
            summary,
        })
    }

    pub(crate) fn video(&self) -> &VideoResult {
        &self.video
    }

    pub(crate) fn all_videos(&self) -> &[VideoResult] {
        &self.all_videos
    }

    pub(crate) fn transcript(&self) -> &str {
        &self.transcript
    }

    pub(crate) fn generate(&self) -> Navigation {
        Navigation::Playback(Some(PlaybackPayload::from_edit(
            &self.video,
            self.summary.as_str().to_string(),
        )))
    }
}
