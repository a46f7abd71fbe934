// Affiliation search.
// Runs queries against the Scopus affiliation search endpoint and maps entries to records.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::cache;
use crate::config::Config;
use crate::error::{Result, SearchError};
use crate::scopus::ScopusClient;
use crate::search::{Search, SearchParams};

/// One affiliation matched by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Affiliation {
    /// Scopus affiliation identifier.
    pub eid: String,
    pub name: Option<String>,
    /// Alternate names joined with `;`, excluding any equal to `name`.
    pub variant: String,
    /// Number of associated documents, "0" when not reported.
    pub documents: String,
    pub city: Option<String>,
    pub country: Option<String>,
    /// Identifier of the parent affiliation.
    pub parent: Option<String>,
}

impl Affiliation {
    /// Build a record from one raw search entry.
    ///
    /// Fails with [`SearchError::MissingField`] when `eid` is absent. Every
    /// other field is optional.
    pub fn from_entry(entry: &Value) -> Result<Self> {
        let eid = text_field(entry, "eid").ok_or(SearchError::MissingField("eid"))?;
        let name = text_field(entry, "affiliation-name");
        let variant = name_variants(entry)
            .filter(|v| Some(v.as_str()) != name.as_deref())
            .collect::<Vec<_>>()
            .join(";");

        Ok(Self {
            eid,
            name,
            variant,
            documents: text_field(entry, "document-count").unwrap_or_else(|| "0".to_string()),
            city: text_field(entry, "city"),
            country: text_field(entry, "country"),
            parent: text_field(entry, "parent-affiliation-id"),
        })
    }
}

/// String value of `key`, with numbers rendered in decimal. Null is absent.
fn text_field(entry: &Value, key: &str) -> Option<String> {
    match entry.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// The `$` text of each `name-variant` object. The API sends a bare object
/// instead of a list when there is a single variant.
fn name_variants(entry: &Value) -> impl Iterator<Item = String> + '_ {
    let variants: &[Value] = match entry.get("name-variant") {
        Some(Value::Array(items)) => items,
        Some(item @ Value::Object(_)) => std::slice::from_ref(item),
        _ => &[],
    };
    variants
        .iter()
        .map(|v| text_field(v, "$").unwrap_or_default())
}

/// Results of a query against the affiliation search endpoint.
///
/// Results are cached in `<cache root>/affiliation_search/<md5 of query>` and
/// reused until a search is run with `refresh` set.
#[derive(Debug, Clone)]
pub struct AffiliationSearch {
    search: Search,
}

impl AffiliationSearch {
    /// Run `query`, e.g. `"af-id(60021784)"`.
    ///
    /// Fails with [`SearchError::Query`] if the query matches more than
    /// `params.max_entries` affiliations.
    pub async fn new(
        client: &ScopusClient,
        config: &Config,
        query: &str,
        params: SearchParams,
    ) -> Result<Self> {
        let cache_path = cache::query_cache_path(&config.affiliation_search_dir(), query);
        let search = Search::run(
            client,
            &config.affiliation_search_url,
            query,
            cache_path,
            params,
        )
        .await?;
        Ok(Self { search })
    }

    /// Affiliation records in the order the API returned them.
    pub fn affiliations(&self) -> Result<Vec<Affiliation>> {
        self.search
            .entries()
            .iter()
            .map(Affiliation::from_entry)
            .collect()
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    pub fn cache_path(&self) -> &Path {
        self.search.cache_path()
    }

    pub fn entries(&self) -> &[Value] {
        self.search.entries()
    }

    pub fn from_cache(&self) -> bool {
        self.search.from_cache()
    }

    pub fn len(&self) -> usize {
        self.search.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.search.entries().is_empty()
    }
}

impl fmt::Display for AffiliationSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.query())?;
        write!(f, "Resulted in {} hits.", self.len())?;
        for entry in self.entries() {
            write!(f, "\n    {}", entry)?;
        }
        Ok(())
    }
}
