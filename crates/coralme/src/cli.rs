//! CLI argument parsing with clap. Defines the flat `Cli` flag surface.

use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "coralme",
    version,
    about = "coralME: COmprehensive Reconstruction ALgorithm for ME-models",
    after_help = "Examples:\n  coralme --organism-json organism.json --m_model_path m_model.json --genbank_path genome.gb --organism-matrix matrix.csv --out-directory out"
)]
pub struct Cli {
    /// Path to organism.json file
    #[arg(long = "organism-json", value_name = "PATH")]
    pub organism_json: Option<PathBuf>,

    /// Path to M-model file (.json or .xml)
    #[arg(long = "m_model_path", value_name = "PATH")]
    pub m_model_path: Option<PathBuf>,

    /// Path to GenBank file (.gb or .gbff)
    #[arg(long = "genbank_path", value_name = "PATH")]
    pub genbank_path: Option<PathBuf>,

    /// Run BLASTp against the reference
    #[arg(long = "run-blastp")]
    pub run_blastp: bool,

    /// E-value cutoff for homology hits
    #[arg(long = "e-value", value_name = "FLOAT", default_value_t = 0.001)]
    pub e_value: f64,

    /// Locus tag format used by the annotation
    #[arg(long = "locus-tag", value_enum, default_value_t = LocusTag::LocusTag)]
    pub locus_tag: LocusTag,

    /// Number of cores to use for the homology search
    #[arg(long, value_name = "INT", default_value_t = 1)]
    pub cores: u32,

    /// Path to reference file
    #[arg(long, value_name = "PATH")]
    pub reference: Option<PathBuf>,

    /// Include pseudogenes
    #[arg(long = "include-pseudogenes")]
    pub include_pseudogenes: bool,

    /// Estimate Keffs
    #[arg(long = "estimate-keffs")]
    pub estimate_keffs: bool,

    /// Add lipoproteins
    #[arg(long = "add-lipoproteins")]
    pub add_lipoproteins: bool,

    /// Path to logging directory
    #[arg(long = "log-directory", value_name = "PATH")]
    pub log_directory: Option<PathBuf>,

    /// Path to output directory
    #[arg(long = "out-directory", value_name = "PATH")]
    pub out_directory: Option<PathBuf>,

    /// Path to organism-specific matrix file
    #[arg(long = "organism-matrix", value_name = "PATH")]
    pub organism_matrix: Option<PathBuf>,

    /// Path to Transcription Units file
    #[arg(long = "tu-file", value_name = "PATH")]
    pub tu_file: Option<PathBuf>,

    /// Path to Reaction file
    #[arg(long = "reaction-file", value_name = "PATH")]
    pub reaction_file: Option<PathBuf>,

    /// Path to Subreactions file
    #[arg(long = "subreactions-file", value_name = "PATH")]
    pub subreactions_file: Option<PathBuf>,

    /// Path to Reactions metadata file
    #[arg(long = "reactions-metadata", value_name = "PATH")]
    pub reactions_metadata: Option<PathBuf>,

    /// Path to Metabolites metadata file
    #[arg(long = "metabolites-metadata", value_name = "PATH")]
    pub metabolites_metadata: Option<PathBuf>,

    /// Path to BioCyc genes file
    #[arg(long = "biocyc-genes", value_name = "PATH")]
    pub biocyc_genes: Option<PathBuf>,

    /// Path to BioCyc proteins file
    #[arg(long = "biocyc-proteins", value_name = "PATH")]
    pub biocyc_proteins: Option<PathBuf>,

    /// Path to BioCyc TU file
    #[arg(long = "biocyc-tu", value_name = "PATH")]
    pub biocyc_tu: Option<PathBuf>,

    /// Path to BioCyc RNA file
    #[arg(long = "biocyc-rna", value_name = "PATH")]
    pub biocyc_rna: Option<PathBuf>,

    /// Path to BioCyc sequences file
    #[arg(long = "biocyc-sequences", value_name = "PATH")]
    pub biocyc_sequences: Option<PathBuf>,
}

/// Which GenBank qualifier identifies genes in the annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum LocusTag {
    #[value(name = "locus_tag")]
    #[serde(rename = "locus_tag")]
    LocusTag,
    #[value(name = "old_locus_tag")]
    #[serde(rename = "old_locus_tag")]
    OldLocusTag,
}

impl std::fmt::Display for LocusTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocusTag::LocusTag => write!(f, "locus_tag"),
            LocusTag::OldLocusTag => write!(f, "old_locus_tag"),
        }
    }
}
