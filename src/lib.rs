//! Reformat NEALE-style GWAS summary-statistics files for the MVMR pipeline.

pub mod reformat;
pub mod table;
