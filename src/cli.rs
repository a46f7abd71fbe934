// Command-line interface.
// Parses arguments and renders search results for the terminal.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::affiliation::{Affiliation, AffiliationSearch};
use crate::error::Result;
use crate::search::{DEFAULT_COUNT, DEFAULT_MAX_ENTRIES, SearchParams};

/// Search Scopus affiliations, caching results on disk
#[derive(Parser, Debug)]
#[command(name = "affsearch")]
#[command(version)]
pub struct Cli {
    /// Scopus query, e.g. "af-id(60021784)" or "affil(eth zurich)"
    pub query: String,

    /// Entries requested per page
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    pub count: u64,

    /// Index of the first entry to retrieve
    #[arg(long, default_value_t = 0)]
    pub start: u64,

    /// Fail if the query matches more entries than this
    #[arg(long, default_value_t = DEFAULT_MAX_ENTRIES)]
    pub max_entries: u64,

    /// Download again even if results are cached
    #[arg(long)]
    pub refresh: bool,

    /// Remove the cached results for the query and exit
    #[arg(long, conflicts_with = "refresh")]
    pub clear: bool,

    /// Cache root directory
    #[arg(long, env = "AFFSEARCH_CACHE_DIR", value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Query, hit count and raw entries
    Summary,
    /// One tab-separated line per affiliation
    Table,
    /// Affiliation records as a JSON array
    Json,
}

impl Cli {
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            count: self.count,
            start: self.start,
            max_entries: self.max_entries,
            refresh: self.refresh,
        }
    }

    /// Default log filter when RUST_LOG is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "affiliation_search=warn",
            1 => "affiliation_search=debug",
            _ => "affiliation_search=trace",
        }
    }
}

/// Render search results in the requested format.
pub fn render(search: &AffiliationSearch, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Summary => Ok(search.to_string()),
        OutputFormat::Table => Ok(render_table(&search.affiliations()?)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&search.affiliations()?)?),
    }
}

fn render_table(affiliations: &[Affiliation]) -> String {
    let mut out = String::from("eid\tname\tvariant\tdocuments\tcity\tcountry\tparent\n");
    for aff in affiliations {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            aff.eid,
            aff.name.as_deref().unwrap_or(""),
            aff.variant,
            aff.documents,
            aff.city.as_deref().unwrap_or(""),
            aff.country.as_deref().unwrap_or(""),
            aff.parent.as_deref().unwrap_or(""),
        );
    }
    out
}
