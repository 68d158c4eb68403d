//! coralME — command-line front end for ME-model reconstruction.
//! Assembles the builder configuration from the flag surface, generates the
//! synthesis files, and stages the organism matrix into the output
//! directory.

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;

use std::fs;

use console::style;

use builder::MeBuilder;
use cli::Cli;
use config::BuilderConfig;
use error::Error;

/// Run the CLI with parsed arguments.
pub fn run(cli: Cli) -> Result<(), Error> {
    let config = BuilderConfig::from_cli(&cli);

    println!("Arguments: {cli:?}");
    match &cli.genbank_path {
        Some(genbank) => println!("GenBank: {}", genbank.display()),
        None => println!("GenBank: none"),
    }
    println!("Configuration: {}", serde_json::to_string_pretty(&config)?);

    let organism = cli
        .organism_json
        .as_deref()
        .ok_or_else(|| Error::InvalidArgument("--organism-json is required".into()))?;

    let builder = MeBuilder::new(organism, &config)?;
    println!(
        "Builder configuration: {}",
        serde_json::to_string_pretty(builder.configuration())?
    );

    builder.generate_files(true)?;
    stage_matrix(&cli, &builder)?;

    println!("{}", style("Generate complete").green().bold());
    Ok(())
}

/// Copy the organism-specific matrix file into the output directory.
fn stage_matrix(cli: &Cli, builder: &MeBuilder) -> Result<(), Error> {
    let matrix = cli.organism_matrix.as_deref().ok_or_else(|| {
        Error::InvalidArgument("--organism-matrix is required to stage the matrix file".into())
    })?;
    if !matrix.is_file() {
        return Err(Error::FileNotFound(matrix.to_path_buf()));
    }
    let file_name = matrix
        .file_name()
        .ok_or_else(|| Error::InvalidArgument(format!("{} has no file name", matrix.display())))?;

    // With no out directory configured this resolves to the working
    // directory, so the copy lands in `.` instead of failing.
    fs::copy(matrix, builder.out_directory().join(file_name))?;
    Ok(())
}
