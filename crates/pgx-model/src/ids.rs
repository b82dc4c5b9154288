#![deny(unsafe_code)]

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_diplotype, normalize_drug, normalize_gene};

/// A pharmacogene symbol such as `CYP2D6`, always stored normalized.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneSymbol(String);

impl GeneSymbol {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(normalize_gene(value.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for GeneSymbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A drug name such as `WARFARIN`, always stored normalized.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrugName(String);

impl DrugName {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(normalize_drug(value.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DrugName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DrugName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A diplotype table key.
///
/// Star-allele keys are canonicalized with [`Diplotype::new`]. Tables whose
/// notation is not star-allele based (for example HGVS-style DPYD keys) keep
/// the source text with [`Diplotype::verbatim`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diplotype(String);

impl Diplotype {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(normalize_diplotype(value.as_ref()))
    }

    /// Keep the key as given, only trimming surrounding whitespace.
    pub fn verbatim(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Diplotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Diplotype {
    fn borrow(&self) -> &str {
        &self.0
    }
}
