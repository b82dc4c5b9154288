//! Curated reference tables.
//!
//! Entries are written in raw form; normalization happens when they are
//! converted to records. The star-allele list is assumed duplicate-free.
//! Should a duplicate (gene, diplotype) slip in, the later row wins.

use pgx_model::EvidenceLevel::{self, A, B};
use pgx_model::PhenotypeCode::{
    self, Intermediate as IM, Normal as NM, Poor as PM, Rapid as RM, Ultrarapid as UM,
};

/// One row of the embedded star-allele phenotype table.
#[derive(Debug, Clone, Copy)]
pub struct StarAlleleRow {
    pub gene: &'static str,
    pub diplotype: &'static str,
    pub phenotype: PhenotypeCode,
}

/// One CPIC drug -> primary gene override.
#[derive(Debug, Clone, Copy)]
pub struct DrugOverride {
    pub drug: &'static str,
    pub gene: &'static str,
    pub evidence: EvidenceLevel,
}

/// Genes resolved by this service, in report order.
pub const TARGET_GENES: [&str; 6] = ["CYP2D6", "CYP2C19", "CYP2C9", "SLCO1B1", "TPMT", "DPYD"];

const fn star(gene: &'static str, diplotype: &'static str, phenotype: PhenotypeCode) -> StarAlleleRow {
    StarAlleleRow {
        gene,
        diplotype,
        phenotype,
    }
}

const fn cpic(drug: &'static str, gene: &'static str, evidence: EvidenceLevel) -> DrugOverride {
    DrugOverride {
        drug,
        gene,
        evidence,
    }
}

/// CPIC star-allele diplotype -> phenotype reference (non-DPYD genes).
pub const STAR_ALLELE_PHENOTYPES: &[StarAlleleRow] = &[
    // CYP2D6
    star("CYP2D6", "*1/*1", NM),
    star("CYP2D6", "*1/*2", NM),
    star("CYP2D6", "*2/*2", NM),
    star("CYP2D6", "*1/*4", IM),
    star("CYP2D6", "*1/*5", IM),
    star("CYP2D6", "*1/*6", IM),
    star("CYP2D6", "*1/*9", IM),
    star("CYP2D6", "*1/*41", IM),
    star("CYP2D6", "*4/*4", PM),
    star("CYP2D6", "*4/*5", PM),
    star("CYP2D6", "*5/*5", PM),
    star("CYP2D6", "*3/*4", PM),
    star("CYP2D6", "*6/*6", PM),
    star("CYP2D6", "*1/*1X2", UM),
    star("CYP2D6", "*1/*2X2", UM),
    star("CYP2D6", "*2X2/*2X2", UM),
    // CYP2C19
    star("CYP2C19", "*1/*1", NM),
    star("CYP2C19", "*1/*17", RM),
    star("CYP2C19", "*17/*17", UM),
    star("CYP2C19", "*1/*2", IM),
    star("CYP2C19", "*1/*3", IM),
    star("CYP2C19", "*2/*17", IM),
    star("CYP2C19", "*2/*2", PM),
    star("CYP2C19", "*2/*3", PM),
    star("CYP2C19", "*3/*3", PM),
    // CYP2C9
    star("CYP2C9", "*1/*1", NM),
    star("CYP2C9", "*1/*2", IM),
    star("CYP2C9", "*1/*3", IM),
    star("CYP2C9", "*2/*2", IM),
    star("CYP2C9", "*2/*3", PM),
    star("CYP2C9", "*3/*3", PM),
    star("CYP2C9", "*1/*5", IM),
    star("CYP2C9", "*1/*6", IM),
    star("CYP2C9", "*1/*8", IM),
    star("CYP2C9", "*1/*11", IM),
    // SLCO1B1
    star("SLCO1B1", "*1/*1", NM),
    star("SLCO1B1", "*1/*5", IM),
    star("SLCO1B1", "*1/*15", IM),
    star("SLCO1B1", "*5/*5", PM),
    star("SLCO1B1", "*5/*15", PM),
    star("SLCO1B1", "*15/*15", PM),
    // TPMT
    star("TPMT", "*1/*1", NM),
    star("TPMT", "*1/*2", IM),
    star("TPMT", "*1/*3A", IM),
    star("TPMT", "*1/*3B", IM),
    star("TPMT", "*1/*3C", IM),
    star("TPMT", "*1/*4", IM),
    star("TPMT", "*2/*2", PM),
    star("TPMT", "*3A/*3A", PM),
    star("TPMT", "*3C/*3C", PM),
    star("TPMT", "*2/*3A", PM),
    star("TPMT", "*2/*3C", PM),
];

/// CPIC level A/B drug -> primary gene. These always win over discovered pairs.
pub const CPIC_DRUG_GENES: &[DrugOverride] = &[
    cpic("CODEINE", "CYP2D6", A),
    cpic("WARFARIN", "CYP2C9", A),
    cpic("CLOPIDOGREL", "CYP2C19", A),
    cpic("SIMVASTATIN", "SLCO1B1", A),
    cpic("AZATHIOPRINE", "TPMT", A),
    cpic("FLUOROURACIL", "DPYD", A),
    cpic("MERCAPTOPURINE", "TPMT", A),
    cpic("THIOGUANINE", "TPMT", A),
    cpic("CAPECITABINE", "DPYD", A),
    cpic("TEGAFUR", "DPYD", A),
    cpic("TAMOXIFEN", "CYP2D6", A),
    cpic("TRAMADOL", "CYP2D6", A),
    cpic("NORTRIPTYLINE", "CYP2D6", A),
    cpic("AMITRIPTYLINE", "CYP2D6", A),
    cpic("ONDANSETRON", "CYP2D6", A),
    cpic("PAROXETINE", "CYP2D6", B),
    cpic("ESCITALOPRAM", "CYP2C19", A),
    cpic("CITALOPRAM", "CYP2C19", A),
    cpic("SERTRALINE", "CYP2C19", B),
    cpic("VORICONAZOLE", "CYP2C19", A),
    cpic("OMEPRAZOLE", "CYP2C19", B),
    cpic("PANTOPRAZOLE", "CYP2C19", B),
    cpic("PHENYTOIN", "CYP2C9", A),
    cpic("CELECOXIB", "CYP2C9", B),
    cpic("ATORVASTATIN", "SLCO1B1", B),
    cpic("PRAVASTATIN", "SLCO1B1", B),
    cpic("ROSUVASTATIN", "SLCO1B1", B),
    cpic("FLUVASTATIN", "CYP2C9", B),
];

/// PharmGKB chemical names (lowercase) -> canonical drug identifier.
///
/// Closed table: chemicals not listed here are never mapped.
pub const DRUG_NAME_ALIASES: &[(&str, &str)] = &[
    ("codeine", "CODEINE"),
    ("warfarin", "WARFARIN"),
    ("clopidogrel", "CLOPIDOGREL"),
    ("simvastatin", "SIMVASTATIN"),
    ("azathioprine", "AZATHIOPRINE"),
    ("fluorouracil", "FLUOROURACIL"),
    ("mercaptopurine", "MERCAPTOPURINE"),
    ("thioguanine", "THIOGUANINE"),
    ("capecitabine", "CAPECITABINE"),
    ("tegafur", "TEGAFUR"),
    ("tamoxifen", "TAMOXIFEN"),
    ("tramadol", "TRAMADOL"),
    ("amitriptyline", "AMITRIPTYLINE"),
    ("nortriptyline", "NORTRIPTYLINE"),
    ("paroxetine", "PAROXETINE"),
    ("ondansetron", "ONDANSETRON"),
    ("escitalopram", "ESCITALOPRAM"),
    ("citalopram", "CITALOPRAM"),
    ("sertraline", "SERTRALINE"),
    ("voriconazole", "VORICONAZOLE"),
    ("omeprazole", "OMEPRAZOLE"),
    ("pantoprazole", "PANTOPRAZOLE"),
    ("phenytoin", "PHENYTOIN"),
    ("celecoxib", "CELECOXIB"),
    ("atorvastatin", "ATORVASTATIN"),
    ("pravastatin", "PRAVASTATIN"),
    ("rosuvastatin", "ROSUVASTATIN"),
    ("fluvastatin", "FLUVASTATIN"),
];

/// Free-text phenotype keywords, checked in order; first substring match wins.
pub const PHENOTYPE_KEYWORDS: &[(&str, PhenotypeCode)] = &[
    ("poor metabolizer", PM),
    ("intermediate metabolizer", IM),
    ("normal metabolizer", NM),
    ("rapid metabolizer", RM),
    ("ultrarapid metabolizer", UM),
];
