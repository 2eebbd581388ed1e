//! Entity records, one CSV dataset per type.
//!
//! Struct fields carry the wire names: they become the CSV header, the JSON
//! keys and the filter query parameters via serde.

mod aluguel;
mod cliente;
mod filme;

pub use aluguel::{Aluguel, AluguelFilter};
pub use cliente::{Cliente, ClienteFilter};
pub use filme::{Filme, FilmeFilter};

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record kind with its own dataset file.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Plural dataset name: CSV file stem and route prefix (e.g. "filmes").
    const DATASET: &'static str;
    /// Noun used in log and response messages (e.g. "Filme").
    const LABEL: &'static str;
    /// CSV header, in declaration order.
    const FIELDS: &'static [&'static str];

    fn id(&self) -> i64;

    /// Shape checks beyond what field types already guarantee on parse.
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Filter criteria for one record type, deserialized from query parameters.
/// Criteria combine as logical AND; an absent criterion imposes no
/// constraint, and any supplied value constrains, including zero.
pub trait RecordFilter<T>: DeserializeOwned + Send + 'static {
    fn matches(&self, record: &T) -> bool;

    /// One-line rendering of the criteria for the request log.
    fn describe(&self) -> String;
}

pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
