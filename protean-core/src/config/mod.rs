//! Configuration types for Protean

use crate::ProteanError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub reference: ReferenceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Window size for the smoothed hydropathy profile (odd, centered)
    #[serde(default = "default_hydropathy_window")]
    pub hydropathy_window: usize,
    /// Window size for the per-position conformation track
    #[serde(default = "default_conformation_window")]
    pub conformation_window: usize,
    /// Window size for the sliding-window domain scan
    #[serde(default = "default_domain_window")]
    pub domain_window: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_precision")]
    pub precision: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReferenceConfig {
    /// Path to a TOML file describing the reference function table.
    /// When unset, the built-in table is used.
    #[serde(default)]
    pub table_path: Option<String>,
}

/// On-disk description of a reference function table: one exemplar
/// sequence per function label. Embeddings are derived at load time so the
/// table stays consistent with the query pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReferenceTableSpec {
    #[serde(default, rename = "function")]
    pub functions: Vec<ReferenceFunctionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceFunctionEntry {
    pub label: String,
    pub sequence: String,
}

// Default value functions
fn default_hydropathy_window() -> usize {
    9
}
fn default_conformation_window() -> usize {
    7
}
fn default_domain_window() -> usize {
    10
}
fn default_format() -> String {
    "text".to_string()
}
fn default_precision() -> usize {
    3
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            hydropathy_window: default_hydropathy_window(),
            conformation_window: default_conformation_window(),
            domain_window: default_domain_window(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            precision: default_precision(),
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ProteanError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| ProteanError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), ProteanError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| ProteanError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn load_reference_spec<P: AsRef<Path>>(path: P) -> Result<ReferenceTableSpec, ProteanError> {
    let contents = std::fs::read_to_string(path)?;
    let spec: ReferenceTableSpec = toml::from_str(&contents).map_err(|e| {
        ProteanError::Configuration(format!("Failed to parse reference table: {}", e))
    })?;
    if spec.functions.is_empty() {
        return Err(ProteanError::EmptyReferenceTable);
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.analysis.hydropathy_window, 9);
        assert_eq!(config.analysis.conformation_window, 7);
        assert_eq!(config.analysis.domain_window, 10);

        assert_eq!(config.output.format, "text");
        assert_eq!(config.output.precision, 3);

        assert_eq!(config.reference.table_path, None);
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.analysis.hydropathy_window = 19;
        config.reference.table_path = Some("refs.toml".to_string());

        let file = NamedTempFile::new().unwrap();
        save_config(file.path(), &config).unwrap();

        let loaded = load_config(file.path()).unwrap();
        assert_eq!(loaded.analysis.hydropathy_window, 19);
        assert_eq!(loaded.reference.table_path, Some("refs.toml".to_string()));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[analysis]\nhydropathy_window = 21").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.analysis.hydropathy_window, 21);
        // Unspecified fields fall back to defaults
        assert_eq!(config.analysis.conformation_window, 7);
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn test_invalid_config_reports_configuration_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[").unwrap();

        let result = load_config(file.path());
        assert!(matches!(
            result,
            Err(crate::ProteanError::Configuration(_))
        ));
    }

    #[test]
    fn test_reference_spec_parsing() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[function]]\nlabel = \"enzyme\"\nsequence = \"ACDEFGHIKLMNPQRSTVWY\"\n\n\
             [[function]]\nlabel = \"transport\"\nsequence = \"VILMFVILMF\""
        )
        .unwrap();

        let spec = load_reference_spec(file.path()).unwrap();
        assert_eq!(spec.functions.len(), 2);
        assert_eq!(spec.functions[0].label, "enzyme");
        assert_eq!(spec.functions[1].sequence, "VILMFVILMF");
    }

    #[test]
    fn test_empty_reference_spec_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# no entries").unwrap();

        let result = load_reference_spec(file.path());
        assert!(matches!(
            result,
            Err(crate::ProteanError::EmptyReferenceTable)
        ));
    }
}
