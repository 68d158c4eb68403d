//! The builder configuration mapping, assembled from the parsed flags.

use serde::Serialize;
use std::path::PathBuf;

use crate::cli::{Cli, LocusTag};

/// Configuration handed to the builder. Optional fields serialize only when
/// their source flag was supplied; the serialized key names are the fixed
/// identifiers the builder consumes.
#[derive(Debug, Clone, Serialize)]
pub struct BuilderConfig {
    #[serde(rename = "m-model-path", skip_serializing_if = "Option::is_none")]
    pub m_model_path: Option<PathBuf>,

    #[serde(rename = "genbank-path", skip_serializing_if = "Option::is_none")]
    pub genbank_path: Option<PathBuf>,

    pub e_value_cutoff: f64,

    pub locus_tag: LocusTag,

    pub blast_threads: u32,

    pub run_bbh_blast: bool,

    pub include_pseudo_genes: bool,

    pub estimate_keffs: bool,

    pub add_lipoproteins: bool,

    pub dev_reference: bool,

    #[serde(rename = "reference-path", skip_serializing_if = "Option::is_none")]
    pub reference_path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_directory: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_directory: Option<PathBuf>,

    /// The organism-specific matrix of gene-complex-modification-reaction
    /// associations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub df_gene_cplxs_mods_rxns: Option<PathBuf>,

    #[serde(
        rename = "transcription-units-file",
        skip_serializing_if = "Option::is_none"
    )]
    pub transcription_units_file: Option<PathBuf>,

    #[serde(rename = "reaction-file", skip_serializing_if = "Option::is_none")]
    pub reaction_file: Option<PathBuf>,

    #[serde(rename = "subreactions-file", skip_serializing_if = "Option::is_none")]
    pub subreactions_file: Option<PathBuf>,

    #[serde(
        rename = "reactions-metadata-file",
        skip_serializing_if = "Option::is_none"
    )]
    pub reactions_metadata_file: Option<PathBuf>,

    #[serde(
        rename = "metabolites-metadata-file",
        skip_serializing_if = "Option::is_none"
    )]
    pub metabolites_metadata_file: Option<PathBuf>,

    #[serde(rename = "biocyc-genes-file", skip_serializing_if = "Option::is_none")]
    pub biocyc_genes_file: Option<PathBuf>,

    #[serde(
        rename = "biocyc-proteins-file",
        skip_serializing_if = "Option::is_none"
    )]
    pub biocyc_proteins_file: Option<PathBuf>,

    #[serde(rename = "biocyc-tu-file", skip_serializing_if = "Option::is_none")]
    pub biocyc_tu_file: Option<PathBuf>,

    #[serde(rename = "biocyc-rna-file", skip_serializing_if = "Option::is_none")]
    pub biocyc_rna_file: Option<PathBuf>,

    #[serde(
        rename = "biocyc-sequences-file",
        skip_serializing_if = "Option::is_none"
    )]
    pub biocyc_sequences_file: Option<PathBuf>,
}

impl BuilderConfig {
    /// Map the flag surface onto the configuration. Pure — no filesystem
    /// access, no validation of the paths.
    pub fn from_cli(cli: &Cli) -> Self {
        BuilderConfig {
            m_model_path: cli.m_model_path.clone(),
            genbank_path: cli.genbank_path.clone(),
            e_value_cutoff: cli.e_value,
            locus_tag: cli.locus_tag,
            blast_threads: cli.cores,
            run_bbh_blast: cli.run_blastp,
            include_pseudo_genes: cli.include_pseudogenes,
            estimate_keffs: cli.estimate_keffs,
            add_lipoproteins: cli.add_lipoproteins,
            dev_reference: true,
            reference_path: cli.reference.clone(),
            log_directory: cli.log_directory.clone(),
            out_directory: cli.out_directory.clone(),
            df_gene_cplxs_mods_rxns: cli.organism_matrix.clone(),
            transcription_units_file: cli.tu_file.clone(),
            reaction_file: cli.reaction_file.clone(),
            subreactions_file: cli.subreactions_file.clone(),
            reactions_metadata_file: cli.reactions_metadata.clone(),
            metabolites_metadata_file: cli.metabolites_metadata.clone(),
            biocyc_genes_file: cli.biocyc_genes.clone(),
            biocyc_proteins_file: cli.biocyc_proteins.clone(),
            biocyc_tu_file: cli.biocyc_tu.clone(),
            biocyc_rna_file: cli.biocyc_rna.clone(),
            biocyc_sequences_file: cli.biocyc_sequences.clone(),
        }
    }
}
