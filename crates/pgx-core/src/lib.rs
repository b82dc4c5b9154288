//! Pharmacogenomic lookup engine.
//!
//! Merges the embedded CPIC reference data with the external DPYD and
//! PharmGKB tables into two immutable maps and answers exact-match queries:
//!
//! - phenotype by (gene, diplotype)
//! - primary gene by drug
//!
//! The engine is built once, either directly with [`LookupEngine::load`] or
//! through an owned [`EngineCache`] that hands out the same instance until
//! it is reset. Lookups never fail; misses resolve to `Unknown`.
//!
//! # Example
//!
//! ```rust,ignore
//! use pgx_core::{EngineCache, LoadConfig};
//!
//! let cache = EngineCache::new();
//! let engine = cache.get_or_load(&LoadConfig::default())?;
//! assert_eq!(engine.phenotype_lookup("cyp2c9", "*3/*2").as_str(), "PM");
//! assert_eq!(engine.drug_gene_label("  warfarin "), "CYP2C9");
//! ```

pub mod cache;
pub mod config;
pub mod engine;
pub mod pipeline;
pub mod tables;

pub use cache::EngineCache;
pub use config::{
    ConfigError, DATA_DIR_ENV_VAR, DIPLOTYPE_TABLE_FILE, LoadConfig, RELATIONSHIPS_TABLE_FILE,
    default_data_dir,
};
pub use engine::{EngineBuilder, LookupEngine, Summary};
pub use pipeline::{
    DEFAULT_DIPLOTYPE, DrugResult, GeneResult, NOT_APPLICABLE, PipelineResult, QualityMetrics,
    run_pipeline,
};
pub use tables::{DrugGeneTable, PhenotypeTable};

pub use pgx_ingest::{DataFormatError, TableReport};
