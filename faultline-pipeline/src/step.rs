//! Pluggable pipeline steps

use faultline_core::Failure;
use serde::{Deserialize, Serialize};

/// Record passed from the fetch step to the save step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Record identifier
    pub id: u64,
    /// Record name
    pub name: String,
}

impl Metadata {
    /// Create a metadata record
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// First pipeline step: produce the record to save
pub trait Fetcher: Send + Sync {
    /// Fetch the record
    ///
    /// Failures are returned without pipeline context; the pipeline adds it.
    fn fetch(&self) -> Result<Metadata, Failure>;
}

/// Second pipeline step: persist the fetched record
pub trait Store: Send + Sync {
    /// Save the record
    fn save(&self, data: &Metadata) -> Result<(), Failure>;
}

impl<F> Fetcher for F
where
    F: Fn() -> Result<Metadata, Failure> + Send + Sync,
{
    fn fetch(&self) -> Result<Metadata, Failure> {
        self()
    }
}

impl<F> Store for F
where
    F: Fn(&Metadata) -> Result<(), Failure> + Send + Sync,
{
    fn save(&self, data: &Metadata) -> Result<(), Failure> {
        self(data)
    }
}
