use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "cohost",
    version,
    about = "Search summarized videos, edit a summary and hand it off for playback"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "URL",
        help = "Search endpoint, overrides COHOST_SEARCH_URL"
    )]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Tui,
    #[command(about = "Run one search, print the results and cache them")]
    Search {
        #[arg(help = "Keyword words, joined with spaces (may be empty)")]
        keyword: Vec<String>,
    },
    #[command(about = "Print the cached results of the last search")]
    Cached,
    #[command(about = "Remove the cached results of the last search")]
    ClearCache,
}
