use std::env;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_SEARCH_URL: &str = "http://localhost:8000/api/search";

const SEARCH_URL_ENV: &str = "COHOST_SEARCH_URL";
const HTTP_ATTEMPTS_ENV: &str = "COHOST_HTTP_ATTEMPTS";
const HTTP_TIMEOUT_ENV: &str = "COHOST_HTTP_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub attempts: usize,
    pub retry_delay: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        // The backend summarizes every accepted video before answering.
        Self {
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(180),
            attempts: 2,
            retry_delay: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub search_url: String,
    pub http: HttpSettings,
}

impl Settings {
    pub fn resolve(endpoint_flag: Option<&str>) -> Self {
        Self::resolve_with(endpoint_flag, |key| env::var(key).ok())
    }

    fn resolve_with(endpoint_flag: Option<&str>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let search_url = endpoint_flag
            .map(str::to_string)
            .or_else(|| lookup(SEARCH_URL_ENV))
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string());

        let mut http = HttpSettings::default();
        if let Some(attempts) = lookup(HTTP_ATTEMPTS_ENV)
            .and_then(|raw| parse_positive(HTTP_ATTEMPTS_ENV, &raw))
        {
            http.attempts = attempts as usize;
        }
        if let Some(secs) =
            lookup(HTTP_TIMEOUT_ENV).and_then(|raw| parse_positive(HTTP_TIMEOUT_ENV, &raw))
        {
            http.read_timeout = Duration::from_secs(secs);
        }

        Self { search_url, http }
    }
}

fn parse_positive(key: &str, raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            warn!("ignoring {key}={raw:?}: expected a positive integer");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_flag_or_environment() {
        let settings = Settings::resolve_with(None, env_of(&[]));
        assert_eq!(settings.search_url, DEFAULT_SEARCH_URL);
        assert_eq!(settings.http, HttpSettings::default());
    }

    #[test]
    fn flag_wins_over_environment() {
        let settings = Settings::resolve_with(
            Some("http://flag.test/api/search"),
            env_of(&[(SEARCH_URL_ENV, "http://env.test/api/search")]),
        );
        assert_eq!(settings.search_url, "http://flag.test/api/search");
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = Settings::resolve_with(
            None,
            env_of(&[
                (SEARCH_URL_ENV, " http://env.test/api/search "),
                (HTTP_ATTEMPTS_ENV, "4"),
                (HTTP_TIMEOUT_ENV, "30"),
            ]),
        );
        assert_eq!(settings.search_url, "http://env.test/api/search");
        assert_eq!(settings.http.attempts, 4);
        assert_eq!(settings.http.read_timeout, Duration::from_secs(30));
    }

    #[test]
    fn invalid_numbers_and_blank_url_fall_back() {
        let settings = Settings::resolve_with(
            Some("   "),
            env_of(&[(HTTP_ATTEMPTS_ENV, "0"), (HTTP_TIMEOUT_ENV, "soon")]),
        );
        assert_eq!(settings.search_url, DEFAULT_SEARCH_URL);
        assert_eq!(settings.http, HttpSettings::default());
    }
}
