//! Metabolizer phenotype codes and CPIC evidence levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Metabolizer status resolved for a (gene, diplotype) pair.
///
/// `Unknown` is a normal outcome, not an error: it is what lookups return
/// for any pair missing from the reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhenotypeCode {
    /// Poor metabolizer.
    #[serde(rename = "PM")]
    Poor,
    /// Intermediate metabolizer.
    #[serde(rename = "IM")]
    Intermediate,
    /// Normal metabolizer.
    #[serde(rename = "NM")]
    Normal,
    /// Rapid metabolizer.
    #[serde(rename = "RM")]
    Rapid,
    /// Ultrarapid metabolizer.
    #[serde(rename = "UM")]
    Ultrarapid,
    #[serde(rename = "Indeterminate")]
    Indeterminate,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl PhenotypeCode {
    /// Short code as reported to consumers (`PM`, `IM`, ..., `Unknown`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Poor => "PM",
            Self::Intermediate => "IM",
            Self::Normal => "NM",
            Self::Rapid => "RM",
            Self::Ultrarapid => "UM",
            Self::Indeterminate => "Indeterminate",
            Self::Unknown => crate::UNKNOWN,
        }
    }
}

impl fmt::Display for PhenotypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPIC guideline evidence grade for a drug-gene pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EvidenceLevel {
    A,
    B,
}

impl EvidenceLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl fmt::Display for EvidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
