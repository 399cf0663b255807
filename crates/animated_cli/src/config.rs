//! Generator configuration file handling (animated.toml)

use animated_codegen::RenderStyle;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "animated.toml";

/// Top-level configuration (animated.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CodegenConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub style: RenderStyle,
}

/// Generator defaults
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Arity used when none is given on the command line
    #[serde(default)]
    pub arity: Option<i64>,
}

impl CodegenConfig {
    /// Load an explicit configuration file; a missing file is an error
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load `animated.toml` from `dir` if present, defaults otherwise
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_uses_defaults() {
        let config = CodegenConfig::parse("").unwrap();
        assert!(config.generator.arity.is_none());
        assert_eq!(config.style, RenderStyle::default());
    }

    #[test]
    fn reads_arity_and_style() {
        let config = CodegenConfig::parse(
            r#"
            [generator]
            arity = 3

            [style]
            function = "Animate"
            preamble = "// Copyright"
            "#,
        )
        .unwrap();
        assert_eq!(config.generator.arity, Some(3));
        assert_eq!(config.style.function, "Animate");
        assert_eq!(config.style.preamble.as_deref(), Some("// Copyright"));
        assert_eq!(config.style.indent, "\t");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CodegenConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn missing_default_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let config = CodegenConfig::load_from_dir(dir.path()).unwrap();
        assert!(config.generator.arity.is_none());
    }

    #[test]
    fn default_file_is_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        writeln!(file, "[generator]\narity = 1").unwrap();
        let config = CodegenConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.generator.arity, Some(1));
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[generator\narity = ").unwrap();
        let err = CodegenConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("bad.toml"));
    }
}
