use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{HttpSettings, Settings};
use crate::http::post_json_with_retries;
use crate::model::{ChannelGroup, SearchResultSet, flatten_channels};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{0}")]
    Request(String),
    #[error("unexpected search response: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub trait SearchService: Send + Sync {
    fn search(&self, keyword: &str) -> Result<SearchResultSet, SearchError>;
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    keyword: &'a str,
}

#[derive(Debug, Clone)]
pub struct HttpSearchService {
    url: String,
    http: HttpSettings,
}

impl HttpSearchService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            url: settings.search_url.clone(),
            http: settings.http.clone(),
        }
    }
}

impl SearchService for HttpSearchService {
    fn search(&self, keyword: &str) -> Result<SearchResultSet, SearchError> {
        let body = serde_json::to_string(&SearchRequest { keyword })?;
        let response =
            post_json_with_retries(&self.url, &body, &self.http).map_err(SearchError::Request)?;
        let videos = parse_search_response(&response)?;
        info!(keyword, count = videos.len(), "search completed");
        Ok(videos)
    }
}

pub fn parse_search_response(body: &str) -> Result<SearchResultSet, SearchError> {
    let channels: Vec<ChannelGroup> = serde_json::from_str(body)?;
    for channel in &channels {
        debug!(
            channel = channel.channel_title.as_deref().unwrap_or("-"),
            videos = channel.videos.len(),
            "channel group"
        );
    }
    Ok(flatten_channels(channels))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::http::test_server::{Behavior, TestServer};

    fn service_for(server: &TestServer) -> HttpSearchService {
        HttpSearchService::new(&Settings {
            search_url: format!("{}/api/search", server.base_url),
            http: HttpSettings {
                connect_timeout: Duration::from_millis(250),
                read_timeout: Duration::from_millis(500),
                attempts: 1,
                retry_delay: Duration::from_millis(1),
            },
        })
    }

    #[test]
    fn parse_rejects_non_list_payloads() {
        let err = parse_search_response(r#"{"detail": "Internal Server Error"}"#)
            .expect_err("object is not a channel list");
        assert!(matches!(err, SearchError::Malformed(_)));

        let err = parse_search_response(r#"[{"channel_title": "missing videos"}]"#)
            .expect_err("channel without videos");
        assert!(matches!(err, SearchError::Malformed(_)));
    }

    #[test]
    fn parse_accepts_empty_list() {
        assert!(parse_search_response("[]").expect("empty list").is_empty());
    }

    #[test]
    fn search_posts_keyword_and_flattens_channels() {
        let response = r#"[
            {"channel_title": "first", "videos": [
                {"video_id": "a1", "title": "A1", "summary": "one"},
                {"video_id": "a2", "title": "A2", "summary": "two"}
            ]},
            {"channel_title": "second", "videos": [
                {"video_id": "b1", "title": "B1", "summary": "three"}
            ]}
        ]"#;
        let server = TestServer::spawn(vec![Behavior::Respond(200, response.to_string())]);

        let videos = service_for(&server).search("rust").expect("search succeeds");

        let ids: Vec<&str> = videos.iter().map(|v| v.video_id.as_str()).collect();
        assert_eq!(ids, ["a1", "a2", "b1"]);
        assert_eq!(server.request_bodies(), vec![r#"{"keyword":"rust"}"#.to_string()]);
    }

    #[test]
    fn search_reports_http_failures_as_request_errors() {
        let server = TestServer::spawn(vec![Behavior::Respond(400, "bad".to_string())]);

        let err = service_for(&server)
            .search("")
            .expect_err("400 should fail the search");

        assert!(matches!(err, SearchError::Request(ref msg) if msg.contains("HTTP status 400")));
    }
}
