use serde::{Deserialize, Serialize};

const THUMBNAIL_URL_BASE: &str = "https://img.youtube.com/vi";
const EMBED_URL_BASE: &str = "https://www.youtube.com/embed";
const SUMMARY_PREVIEW_CHARS: usize = 100;

pub const TRANSCRIPT_UNAVAILABLE: &str = "Transcript not available.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResult {
    pub video_id: String,
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl VideoResult {
    pub fn thumbnail_url(&self) -> String {
        format!("{THUMBNAIL_URL_BASE}/{}/0.jpg", self.video_id)
    }

    pub fn embed_url(&self) -> String {
        format!("{EMBED_URL_BASE}/{}", self.video_id)
    }

    // The ellipsis is appended even when the summary is shorter than the cut.
    pub fn summary_preview(&self) -> String {
        let head = self
            .summary
            .chars()
            .take(SUMMARY_PREVIEW_CHARS)
            .collect::<String>();
        format!("{head}...")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelGroup {
    #[serde(default)]
    pub channel_title: Option<String>,
    pub videos: Vec<VideoResult>,
}

pub type SearchResultSet = Vec<VideoResult>;

pub fn flatten_channels(channels: Vec<ChannelGroup>) -> SearchResultSet {
    channels
        .into_iter()
        .flat_map(|channel| channel.videos)
        .collect()
}

pub fn combined_transcript(videos: &[VideoResult]) -> String {
    if videos.is_empty() {
        return TRANSCRIPT_UNAVAILABLE.to_string();
    }
    videos
        .iter()
        .map(|video| video.summary.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackPayload {
    pub content: String,
    pub video_id: String,
    pub title: String,
    pub source: Option<String>,
}

impl PlaybackPayload {
    pub fn from_edit(video: &VideoResult, content: String) -> Self {
        Self {
            content,
            video_id: video.video_id.clone(),
            title: video.title.clone(),
            source: video.source.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, summary: &str) -> VideoResult {
        VideoResult {
            video_id: id.to_string(),
            title: format!("Title {id}"),
            summary: summary.to_string(),
            source: None,
        }
    }

    #[test]
    fn urls_are_derived_from_video_id() {
        let item = video("dQw4w9WgXcQ", "");
        assert_eq!(
            item.thumbnail_url(),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/0.jpg"
        );
        assert_eq!(item.embed_url(), "https://www.youtube.com/embed/dQw4w9WgXcQ");
    }

    #[test]
    fn summary_preview_always_appends_ellipsis() {
        assert_eq!(video("a", "short").summary_preview(), "short...");
        assert_eq!(video("a", "").summary_preview(), "...");
    }

    #[test]
    fn summary_preview_cuts_at_one_hundred_characters() {
        let long = "é".repeat(150);
        let preview = video("a", &long).summary_preview();
        assert_eq!(preview.chars().count(), 103);
        assert!(preview.starts_with(&"é".repeat(100)));
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn flatten_keeps_channel_then_intra_channel_order() {
        let raw = r#"[
            {"channel_title": "one", "score": 0.9, "videos": [
                {"video_id": "a1", "title": "A1", "summary": "s1", "views": 10},
                {"video_id": "a2", "title": "A2", "summary": "s2"}
            ]},
            {"channel_id": "c2", "videos": []},
            {"videos": [{"video_id": "b1", "title": "B1", "summary": "s3", "source": "ai"}]}
        ]"#;
        let channels: Vec<ChannelGroup> = serde_json::from_str(raw).expect("valid response");
        let flat = flatten_channels(channels);

        let ids: Vec<&str> = flat.iter().map(|v| v.video_id.as_str()).collect();
        assert_eq!(ids, ["a1", "a2", "b1"]);
        assert_eq!(flat[2].source.as_deref(), Some("ai"));
    }

    #[test]
    fn combined_transcript_joins_summaries_with_single_space() {
        let videos = vec![video("a", "first"), video("b", "second"), video("c", "third")];
        assert_eq!(combined_transcript(&videos), "first second third");
        assert_eq!(combined_transcript(&[]), TRANSCRIPT_UNAVAILABLE);
    }

    #[test]
    fn serialized_result_omits_absent_source() {
        let json = serde_json::to_string(&video("a", "s")).expect("serialize");
        assert!(!json.contains("source"));
    }
}
