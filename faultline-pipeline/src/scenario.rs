//! Scripted steps and declarative failure scenarios
//!
//! A [`Scenario`] describes which step fails and with what, in a form that
//! deserializes from a configuration file:
//!
//! ```toml
//! [pipeline]
//! fetch_context = "fetch failed"
//!
//! [fetch.data]
//! id = 7
//! name = "quarterly report"
//!
//! [save.fail]
//! kind = "custom"
//! code = 503
//! detail = "Service Unavailable"
//! ```

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::pipeline::Pipeline;
use crate::step::{Fetcher, Metadata, Store};
use faultline_core::{lookup, Failure};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Declarative description of a failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureSpec {
    /// Plain message
    Value {
        /// Message text
        message: String,
    },
    /// Canonical sentinel, by registry name
    Sentinel {
        /// Registry name, e.g. `not_found`
        name: String,
    },
    /// Structured error
    Custom {
        /// Status code
        code: u16,
        /// Detail text
        detail: String,
    },
    /// Context around another failure
    Chained {
        /// Context text
        context: String,
        /// Wrapped failure
        cause: Box<FailureSpec>,
    },
}

impl FailureSpec {
    /// Plain message spec
    pub fn value(message: impl Into<String>) -> Self {
        FailureSpec::Value {
            message: message.into(),
        }
    }

    /// Sentinel spec
    pub fn sentinel(name: impl Into<String>) -> Self {
        FailureSpec::Sentinel { name: name.into() }
    }

    /// Custom error spec
    pub fn custom(code: u16, detail: impl Into<String>) -> Self {
        FailureSpec::Custom {
            code,
            detail: detail.into(),
        }
    }

    /// Chained spec
    pub fn chained(context: impl Into<String>, cause: FailureSpec) -> Self {
        FailureSpec::Chained {
            context: context.into(),
            cause: Box::new(cause),
        }
    }

    /// Build the failure this spec describes
    ///
    /// Sentinel names resolve to the canonical registry instance; an unknown
    /// name is an error rather than a freshly made sentinel.
    pub fn build(&self) -> Result<Failure> {
        match self {
            FailureSpec::Value { message } => Ok(Failure::value(message.clone())),
            FailureSpec::Sentinel { name } => lookup(name)
                .map(Failure::sentinel)
                .ok_or_else(|| PipelineError::UnknownSentinel { name: name.clone() }),
            FailureSpec::Custom { code, detail } => Ok(Failure::custom(*code, detail.clone())),
            FailureSpec::Chained { context, cause } => {
                Ok(Failure::wrap(context.clone(), cause.build()?))
            }
        }
    }
}

/// Fetcher returning a fixed record or a fixed failure
#[derive(Debug)]
pub struct ScriptedFetcher {
    data: Metadata,
    failure: Option<Failure>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    /// Fetcher that always returns `data`
    pub fn succeeding(data: Metadata) -> Self {
        Self {
            data,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fetcher that always fails with `failure`
    pub fn failing(failure: Failure) -> Self {
        Self {
            data: Metadata::default(),
            failure: Some(failure),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `fetch` ran
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Fetcher for ScriptedFetcher {
    fn fetch(&self) -> std::result::Result<Metadata, Failure> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(self.data.clone()),
        }
    }
}

/// Store accepting every record or failing every save
#[derive(Debug, Default)]
pub struct ScriptedStore {
    failure: Option<Failure>,
    calls: AtomicUsize,
}

impl ScriptedStore {
    /// Store that accepts every record
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Store that always fails with `failure`
    pub fn failing(failure: Failure) -> Self {
        Self {
            failure: Some(failure),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `save` ran
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Store for ScriptedStore {
    fn save(&self, _data: &Metadata) -> std::result::Result<(), Failure> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }
}

/// Fetch step of a scenario
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchStep {
    /// Record returned on success
    pub data: Metadata,
    /// Failure to inject, if any
    pub fail: Option<FailureSpec>,
}

/// Save step of a scenario
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveStep {
    /// Failure to inject, if any
    pub fail: Option<FailureSpec>,
}

/// Complete pipeline scenario
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Context strings
    pub pipeline: PipelineConfig,
    /// Fetch step behaviour
    pub fetch: FetchStep,
    /// Save step behaviour
    pub save: SaveStep,
}

impl Scenario {
    /// Assemble a pipeline of scripted steps
    pub fn build(&self) -> Result<Pipeline<ScriptedFetcher, ScriptedStore>> {
        self.pipeline.validate()?;

        let fetcher = match &self.fetch.fail {
            Some(spec) => ScriptedFetcher::failing(spec.build()?),
            None => ScriptedFetcher::succeeding(self.fetch.data.clone()),
        };
        let store = match &self.save.fail {
            Some(spec) => ScriptedStore::failing(spec.build()?),
            None => ScriptedStore::succeeding(),
        };

        Ok(Pipeline::with_config(fetcher, store, self.pipeline.clone()))
    }
}
