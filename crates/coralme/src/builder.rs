//! The ME-model builder shim: organism descriptor loading, configuration
//! merging, and the synthesis-file generation step.

use serde_json::{Map, Value};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::BuilderConfig;
use crate::error::Error;

/// Mapping keys that name input files. Each one that is configured must
/// exist before generation starts. The organism matrix is deliberately not
/// listed; it is consumed by the staging step, not by generation.
const INPUT_FILE_KEYS: &[&str] = &[
    "m-model-path",
    "genbank-path",
    "transcription-units-file",
    "reaction-file",
    "subreactions-file",
    "reactions-metadata-file",
    "metabolites-metadata-file",
    "biocyc-genes-file",
    "biocyc-proteins-file",
    "biocyc-tu-file",
    "biocyc-rna-file",
    "biocyc-sequences-file",
];

/// Resolved name of the file `generate_files` emits into the output
/// directory.
pub const BUILDER_CONFIG_FILE: &str = "builder_config.json";

/// The reconstruction log file, appended to in the log directory.
pub const LOG_FILE: &str = "coralme.log";

/// A builder instance: the organism descriptor's mapping with the
/// command-line configuration merged over it.
#[derive(Debug)]
pub struct MeBuilder {
    resolved: Map<String, Value>,
}

impl MeBuilder {
    /// Read the organism descriptor and merge the CLI configuration over
    /// it. Keys given on the command line override the descriptor's.
    pub fn new(organism_json: &Path, config: &BuilderConfig) -> Result<Self, Error> {
        let raw = fs::read_to_string(organism_json).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::FileNotFound(organism_json.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let descriptor: Value = serde_json::from_str(&raw).map_err(|e| Error::Descriptor {
            path: organism_json.to_path_buf(),
            reason: e.to_string(),
        })?;
        let mut resolved = match descriptor {
            Value::Object(map) => map,
            _ => {
                return Err(Error::Descriptor {
                    path: organism_json.to_path_buf(),
                    reason: "expected a JSON object".into(),
                });
            }
        };

        let Value::Object(overrides) = serde_json::to_value(config)? else {
            unreachable!("BuilderConfig serializes to an object");
        };
        resolved.extend(overrides);

        Ok(MeBuilder { resolved })
    }

    /// The merged configuration mapping.
    pub fn configuration(&self) -> &Map<String, Value> {
        &self.resolved
    }

    pub fn out_directory(&self) -> PathBuf {
        self.directory("out_directory")
    }

    pub fn log_directory(&self) -> PathBuf {
        self.directory("log_directory")
    }

    // Unconfigured directories fall back to the working directory.
    fn directory(&self, key: &str) -> PathBuf {
        self.resolved
            .get(key)
            .and_then(Value::as_str)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Preflight the declared inputs, create the output and log
    /// directories, and write the resolved configuration into the output
    /// directory. With `overwrite` unset, an existing configuration file
    /// is a build failure.
    pub fn generate_files(&self, overwrite: bool) -> Result<(), Error> {
        for key in ["m-model-path", "genbank-path"] {
            if !self.resolved.contains_key(key) {
                return Err(Error::InvalidArgument(format!("no {key} configured")));
            }
        }
        for key in INPUT_FILE_KEYS {
            if let Some(path) = self.resolved.get(*key).and_then(Value::as_str) {
                let path = Path::new(path);
                if !path.is_file() {
                    return Err(Error::FileNotFound(path.to_path_buf()));
                }
            }
        }

        let out_dir = self.out_directory();
        let log_dir = self.log_directory();
        fs::create_dir_all(&out_dir)?;
        fs::create_dir_all(&log_dir)?;

        let config_path = out_dir.join(BUILDER_CONFIG_FILE);
        if config_path.exists() && !overwrite {
            return Err(Error::Build(format!(
                "{} already exists and overwrite is disabled",
                config_path.display()
            )));
        }
        fs::write(&config_path, serde_json::to_string_pretty(&self.resolved)?)?;

        let mut log = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_dir.join(LOG_FILE))?;
        writeln!(log, "generate_files: wrote {}", config_path.display())?;
        for key in INPUT_FILE_KEYS {
            if let Some(path) = self.resolved.get(*key).and_then(Value::as_str) {
                writeln!(log, "input {key}: {path}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn config_from(args: &[&str]) -> BuilderConfig {
        let mut full = vec!["coralme"];
        full.extend_from_slice(args);
        BuilderConfig::from_cli(&Cli::try_parse_from(full).unwrap())
    }

    fn write_descriptor(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("organism.json");
        fs::write(&path, body).unwrap();
        path
    }

    fn touch(path: &Path) {
        fs::write(path, "").unwrap();
    }

    #[test]
    fn descriptor_keys_survive_and_cli_keys_win() {
        let tmp = tempfile::TempDir::new().unwrap();
        let descriptor = write_descriptor(
            tmp.path(),
            r#"{"ME-Model-ID": "test-model", "e_value_cutoff": 0.5}"#,
        );

        let builder = MeBuilder::new(&descriptor, &config_from(&[])).unwrap();
        let resolved = builder.configuration();
        assert_eq!(resolved["ME-Model-ID"], Value::from("test-model"));
        // The CLI always carries e_value_cutoff, so its value overrides.
        assert_eq!(resolved["e_value_cutoff"], Value::from(0.001));
    }

    #[test]
    fn missing_descriptor_is_file_not_found() {
        let err = MeBuilder::new(Path::new("/nonexistent/organism.json"), &config_from(&[]))
            .unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)), "got {err:?}");
    }

    #[test]
    fn malformed_descriptor_is_a_descriptor_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let descriptor = write_descriptor(tmp.path(), "this is [[[not json");
        let err = MeBuilder::new(&descriptor, &config_from(&[])).unwrap_err();
        assert!(matches!(err, Error::Descriptor { .. }), "got {err:?}");
    }

    #[test]
    fn non_object_descriptor_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let descriptor = write_descriptor(tmp.path(), "[1, 2, 3]");
        let err = MeBuilder::new(&descriptor, &config_from(&[])).unwrap_err();
        assert!(matches!(err, Error::Descriptor { .. }), "got {err:?}");
    }

    fn builder_with_inputs(tmp: &Path) -> MeBuilder {
        let descriptor = write_descriptor(tmp, "{}");
        let m_model = tmp.join("m_model.json");
        let genbank = tmp.join("genome.gb");
        touch(&m_model);
        touch(&genbank);

        let out = tmp.join("out");
        let log = tmp.join("log");
        let config = config_from(&[
            "--m_model_path",
            m_model.to_str().unwrap(),
            "--genbank_path",
            genbank.to_str().unwrap(),
            "--out-directory",
            out.to_str().unwrap(),
            "--log-directory",
            log.to_str().unwrap(),
        ]);
        MeBuilder::new(&descriptor, &config).unwrap()
    }

    #[test]
    fn generate_files_writes_config_and_log() {
        let tmp = tempfile::TempDir::new().unwrap();
        let builder = builder_with_inputs(tmp.path());

        builder.generate_files(true).unwrap();

        let written = tmp.path().join("out").join(BUILDER_CONFIG_FILE);
        let contents = fs::read_to_string(&written).unwrap();
        let parsed: Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed["blast_threads"], Value::from(1));
        assert!(tmp.path().join("log").join(LOG_FILE).is_file());
    }

    #[test]
    fn generate_files_requires_the_mandatory_inputs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let descriptor = write_descriptor(tmp.path(), "{}");
        let builder = MeBuilder::new(&descriptor, &config_from(&[])).unwrap();

        let err = builder.generate_files(true).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)), "got {err:?}");
    }

    #[test]
    fn generate_files_reports_missing_input_files() {
        let tmp = tempfile::TempDir::new().unwrap();
        let descriptor = write_descriptor(tmp.path(), "{}");
        let config = config_from(&[
            "--m_model_path",
            "/nonexistent/m_model.json",
            "--genbank_path",
            "/nonexistent/genome.gb",
        ]);
        let builder = MeBuilder::new(&descriptor, &config).unwrap();

        let err = builder.generate_files(true).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)), "got {err:?}");
    }

    #[test]
    fn generate_files_honors_the_overwrite_flag() {
        let tmp = tempfile::TempDir::new().unwrap();
        let builder = builder_with_inputs(tmp.path());

        builder.generate_files(true).unwrap();
        builder.generate_files(true).unwrap();

        let err = builder.generate_files(false).unwrap_err();
        assert!(matches!(err, Error::Build(_)), "got {err:?}");
    }

    #[test]
    fn directories_default_to_the_working_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let descriptor = write_descriptor(tmp.path(), "{}");
        let builder = MeBuilder::new(&descriptor, &config_from(&[])).unwrap();
        assert_eq!(builder.out_directory(), PathBuf::from("."));
        assert_eq!(builder.log_directory(), PathBuf::from("."));
    }

    #[test]
    fn descriptor_may_supply_the_directories() {
        let tmp = tempfile::TempDir::new().unwrap();
        let descriptor = write_descriptor(
            tmp.path(),
            r#"{"out_directory": "/data/out", "log_directory": "/data/log"}"#,
        );
        let builder = MeBuilder::new(&descriptor, &config_from(&[])).unwrap();
        assert_eq!(builder.out_directory(), PathBuf::from("/data/out"));
        assert_eq!(builder.log_directory(), PathBuf::from("/data/log"));
    }
}
