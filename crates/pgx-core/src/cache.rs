//! Build-once holder for a shared [`LookupEngine`].

use std::sync::{Arc, OnceLock};

use pgx_ingest::DataFormatError;
use tracing::debug;

use crate::config::LoadConfig;
use crate::engine::LookupEngine;

/// Owns at most one engine and hands out the same instance until reset.
///
/// A failed load leaves the cache empty, so the next call retries.
#[derive(Debug, Default)]
pub struct EngineCache {
    engine: OnceLock<Arc<LookupEngine>>,
}

impl EngineCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached engine, loading it from `config` on first use.
    ///
    /// `config` is ignored once an engine is cached.
    pub fn get_or_load(&self, config: &LoadConfig) -> Result<Arc<LookupEngine>, DataFormatError> {
        if let Some(engine) = self.engine.get() {
            debug!("Reusing cached lookup engine");
            return Ok(Arc::clone(engine));
        }
        let engine = Arc::new(LookupEngine::load(config)?);
        Ok(Arc::clone(self.engine.get_or_init(|| engine)))
    }

    /// The cached engine, if one has been loaded.
    pub fn get(&self) -> Option<Arc<LookupEngine>> {
        self.engine.get().map(Arc::clone)
    }

    pub fn is_loaded(&self) -> bool {
        self.engine.get().is_some()
    }

    /// Drop the cached engine; the next [`get_or_load`](Self::get_or_load) reloads.
    pub fn reset(&mut self) {
        if self.engine.take().is_some() {
            debug!("Lookup engine cache reset");
        }
    }
}
