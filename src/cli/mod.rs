//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for md2docx using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// md2docx - Markdown to DOCX converter
#[derive(Parser, Debug)]
#[command(name = "md2docx")]
#[command(version, about, long_about = None)]
#[command(author = "md2docx Contributors")]
pub struct Cli {
    /// Path to a TOML or YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a Markdown file to DOCX
    Convert(commands::convert::ConvertArgs),

    /// Create a reference DOCX template
    Template(commands::template::TemplateArgs),

    /// Validate the resolved configuration
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_convert() {
        let cli = Cli::parse_from(["md2docx", "convert", "doc.md"]);
        assert!(cli.config.is_none());
        assert!(matches!(cli.command, Commands::Convert(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["md2docx", "--config", "custom.toml", "convert", "doc.md"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["md2docx", "--log-level", "debug", "convert", "doc.md"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_convert_options() {
        let cli = Cli::parse_from([
            "md2docx", "convert", "doc.md", "-o", "out.docx", "--toc", "--toc-depth", "2",
        ]);
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.input, PathBuf::from("doc.md"));
        assert_eq!(args.output, Some(PathBuf::from("out.docx")));
        assert_eq!(args.toc_override(), Some(true));
        assert_eq!(args.toc_depth, Some(2));
    }

    #[test]
    fn test_cli_parse_no_toc() {
        let cli = Cli::parse_from(["md2docx", "convert", "doc.md", "--no-toc"]);
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.toc_override(), Some(false));
    }

    #[test]
    fn test_cli_toc_flags_conflict() {
        let result = Cli::try_parse_from(["md2docx", "convert", "doc.md", "--toc", "--no-toc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_template() {
        let cli = Cli::parse_from(["md2docx", "template", "reference.docx"]);
        assert!(matches!(cli.command, Commands::Template(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["md2docx", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["md2docx", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
