mod nav;
mod screens;
mod shell;
mod text;
mod tui;


use std::sync::Arc;

use anyhow::Result;

use crate::cache::SearchCache;
use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::db::Database;
use crate::model::VideoResult;
use crate::paths::database_file_path;
use crate::search::{HttpSearchService, SearchService};

use self::text::truncate;

pub fn run(cli: Cli) -> Result<()> {
    let db = open_db()?;
    let settings = Settings::resolve(cli.endpoint.as_deref());
    tracing::info!(search_url = %settings.search_url, "configuration resolved");

    match cli.command {
        Some(Command::Search { keyword }) => run_search(&db, &settings, &keyword.join(" "))?,
        Some(Command::Cached) => run_cached(&db),
        Some(Command::ClearCache) => run_clear_cache(&db)?,
        Some(Command::Tui) | None => {
            let service: Arc<dyn SearchService> = Arc::new(HttpSearchService::new(&settings));
            tui::run_tui(&db, service)?
        }
    }

    Ok(())
}

fn run_search(db: &Database, settings: &Settings, keyword: &str) -> Result<()> {
    let service = HttpSearchService::new(settings);
    let videos = match service.search(keyword) {
        Ok(videos) => videos,
        Err(err) => {
            println!("Search failed: {err}");
            println!("Cached results left unchanged.");
            return Ok(());
        }
    };
    let cached = SearchCache::new(db).save(&videos);
    print!("{}", search_report(keyword, &videos, &cached));
    Ok(())
}

fn search_report(keyword: &str, videos: &[VideoResult], cached: &Result<()>) -> String {
    let mut out = if videos.is_empty() {
        format!("No videos found for \"{keyword}\".\n")
    } else {
        format_results(videos)
    };
    match cached {
        Ok(()) if !videos.is_empty() => {
            out.push_str(&format!("\nCached {} result(s).\n", videos.len()));
        }
        Ok(()) => {}
        Err(err) => {
            tracing::warn!("search cache write failed: {err:#}");
            out.push_str(&format!("\nCaching failed: {err:#}\n"));
        }
    }
    out
}

fn run_cached(db: &Database) {
    let cached = SearchCache::new(db).load();
    if cached.videos.is_empty() {
        println!("No cached results. Run `cohost search <keyword>` first.");
        return;
    }
    if let Some(stored_at) = cached.stored_at.as_deref() {
        println!("Cached at {stored_at}\n");
    }
    print!("{}", format_results(&cached.videos));
}

fn run_clear_cache(db: &Database) -> Result<()> {
    if SearchCache::new(db).clear()? {
        println!("Cleared cached results.");
    } else {
        println!("Nothing cached.");
    }
    Ok(())
}

fn format_results(videos: &[VideoResult]) -> String {
    let mut out = format!("{:<14} {:<40} {:<10} SUMMARY\n", "VIDEO ID", "TITLE", "SOURCE");
    for video in videos {
        out.push_str(&format!(
            "{:<14} {:<40} {:<10} {}\n",
            truncate(&video.video_id, 14),
            truncate(&video.title, 40),
            video.source.as_deref().unwrap_or("-"),
            video.summary_preview()
        ));
    }
    out
}

fn open_db() -> Result<Database> {
    let db_path = database_file_path()?;
    let db = Database::open(&db_path)?;
    db.migrate()?;
    Ok(db)
}
