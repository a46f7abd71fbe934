// Client for the Scopus affiliation search API.
// Queries are paged from the API once and cached on disk under a hash of the query text.

pub mod affiliation;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod scopus;
pub mod search;

pub use affiliation::{Affiliation, AffiliationSearch};
pub use config::Config;
pub use error::{Result, SearchError};
pub use scopus::ScopusClient;
pub use search::{Search, SearchParams};
