//! Folio CLI
//!
//! Validates the YAML content files of a portfolio site.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use folio_content::ContentKind;

/// Command-line interface for Folio.
#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Validate the YAML content of a portfolio site"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "folio.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Validate configuration and every content file
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Validate a single content file
    Validate {
        /// Path to the YAML file
        file: std::path::PathBuf,
        /// Content kind (about, projects, skills, experiences, navbar);
        /// inferred from the file name when omitted
        #[arg(short, long)]
        kind: Option<ContentKind>,
        /// Print the validated content as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    folio::init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { strict } => {
            folio::cmd::check::run(&cli.config, strict)?;
        }
        Commands::Validate { file, kind, json } => {
            folio::cmd::validate::run(&file, kind, json)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["folio", "check", "--strict"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("folio.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Check { strict } => {
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_validate_command_parsing() {
        let args = [
            "folio",
            "validate",
            "content/project.yml",
            "--kind",
            "projects",
            "--json",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Validate { file, kind, json } => {
                assert_eq!(file, std::path::PathBuf::from("content/project.yml"));
                assert_eq!(kind, Some(ContentKind::Projects));
                assert!(json);
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_validate_kind_is_optional() {
        let args = ["folio", "validate", "navbar.yml"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Validate { kind, json, .. } => {
                assert!(kind.is_none());
                assert!(!json);
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_kind() {
        let args = ["folio", "validate", "blog.yml", "--kind", "blog"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["folio", "-vvv", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["folio", "--config", "site.toml", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
