//! The fetch-then-save pipeline

use crate::config::PipelineConfig;
use crate::step::{Fetcher, Store};
use faultline_core::{Context, Failure};
use tracing::{debug, warn};

/// Two sequential steps, each wrapping its own failures
///
/// `run` fetches a record and saves it. A fetch failure is wrapped with the
/// fetch context and the save step is skipped; a save failure is wrapped with
/// the save context. Each step runs at most once.
pub struct Pipeline<F, S> {
    fetcher: F,
    store: S,
    config: PipelineConfig,
}

impl<F, S> Pipeline<F, S>
where
    F: Fetcher,
    S: Store,
{
    /// Create a pipeline with the default contexts
    pub fn new(fetcher: F, store: S) -> Self {
        Self::with_config(fetcher, store, PipelineConfig::default())
    }

    /// Create a pipeline with custom contexts
    pub fn with_config(fetcher: F, store: S, config: PipelineConfig) -> Self {
        Self {
            fetcher,
            store,
            config,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The fetch step
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// The save step
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run both steps
    ///
    /// Returns `Ok(())` when both succeed, otherwise exactly one chained
    /// failure whose outermost context names the failing step.
    pub fn run(&self) -> Result<(), Failure> {
        debug!(step = "fetch", "starting");
        let data = self
            .fetcher
            .fetch()
            .context(self.config.fetch_context.as_str())
            .inspect_err(|failure| warn!(step = "fetch", %failure, "step failed"))?;

        debug!(step = "save", id = data.id, "starting");
        self.store
            .save(&data)
            .context(self.config.save_context.as_str())
            .inspect_err(|failure| warn!(step = "save", %failure, "step failed"))?;

        debug!(id = data.id, "pipeline completed");
        Ok(())
    }
}
