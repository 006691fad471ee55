//! Command-line argument parsing for `diagwiz-highlight`
//!
//! Supports:
//! - Reading a file or stdin
//! - Explicit config file or no config at all
//! - Text or JSON token output
//! - Dumping the syntax tree instead of tokens

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Print highlight tags for a diagwiz source
#[derive(Parser, Debug)]
#[command(
    name = "diagwiz-highlight",
    version,
    about = "Print highlight tags for a diagwiz source"
)]
pub struct CliArgs {
    /// Source file to highlight (reads stdin if omitted or `-`)
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Load tag rules from this config file instead of the user config
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use only the built-in tag rules
    #[arg(long)]
    pub no_config: bool,

    /// Output format for highlight tokens
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the syntax tree instead of highlight tokens
    #[arg(long)]
    pub tree: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `line:start-end tag text`, one token per line
    #[default]
    Text,
    /// A JSON array of token objects
    Json,
}

/// Where the source text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Where the tag rules come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in rules only
    BuiltinOnly,
    /// Built-in rules plus `~/.config/diagwiz/config.yaml`, if present
    User,
    /// Built-in rules plus an explicit file, which must load
    File(PathBuf),
}

/// What to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Tokens(OutputFormat),
    Tree,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: InputSource,
    pub config: ConfigSource,
    pub output: OutputMode,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let config = match (self.config, self.no_config) {
            (Some(_), true) => {
                return Err("--config and --no-config cannot be used together".to_string())
            }
            (Some(path), false) => ConfigSource::File(path),
            (None, true) => ConfigSource::BuiltinOnly,
            (None, false) => ConfigSource::User,
        };

        let input = match self.path {
            Some(path) if path.as_os_str() == "-" => InputSource::Stdin,
            Some(path) => {
                if path.is_dir() {
                    return Err(format!("{} is a directory", path.display()));
                }
                InputSource::File(path)
            }
            None => InputSource::Stdin,
        };

        let output = if self.tree {
            OutputMode::Tree
        } else {
            OutputMode::Tokens(self.format)
        };

        Ok(RunConfig {
            input,
            config,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(path: Option<&str>) -> CliArgs {
        CliArgs {
            path: path.map(PathBuf::from),
            config: None,
            no_config: false,
            format: OutputFormat::Text,
            tree: false,
        }
    }

    #[test]
    fn test_no_path_reads_stdin() {
        let config = args(None).into_config().unwrap();
        assert_eq!(config.input, InputSource::Stdin);
        assert_eq!(config.config, ConfigSource::User);
        assert_eq!(config.output, OutputMode::Tokens(OutputFormat::Text));
    }

    #[test]
    fn test_dash_reads_stdin() {
        let config = args(Some("-")).into_config().unwrap();
        assert_eq!(config.input, InputSource::Stdin);
    }

    #[test]
    fn test_single_file() {
        let config = args(Some("flow.diag")).into_config().unwrap();
        assert_eq!(config.input, InputSource::File(PathBuf::from("flow.diag")));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = std::env::temp_dir();
        let result = args(Some(dir.to_str().unwrap())).into_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_config() {
        let mut cli = args(None);
        cli.config = Some(PathBuf::from("rules.yaml"));
        let config = cli.into_config().unwrap();
        assert_eq!(
            config.config,
            ConfigSource::File(PathBuf::from("rules.yaml"))
        );
    }

    #[test]
    fn test_no_config() {
        let mut cli = args(None);
        cli.no_config = true;
        let config = cli.into_config().unwrap();
        assert_eq!(config.config, ConfigSource::BuiltinOnly);
    }

    #[test]
    fn test_config_conflicts_with_no_config() {
        let mut cli = args(None);
        cli.config = Some(PathBuf::from("rules.yaml"));
        cli.no_config = true;
        assert!(cli.into_config().is_err());
    }

    #[test]
    fn test_tree_overrides_format() {
        let mut cli = args(None);
        cli.format = OutputFormat::Json;
        cli.tree = true;
        let config = cli.into_config().unwrap();
        assert_eq!(config.output, OutputMode::Tree);
    }

    #[test]
    fn test_clap_parses_flags() {
        let cli = CliArgs::try_parse_from([
            "diagwiz-highlight",
            "flow.diag",
            "--format",
            "json",
            "--no-config",
        ])
        .unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("flow.diag")));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.no_config);
        assert!(!cli.tree);
    }
}
