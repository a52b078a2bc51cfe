use anyhow::Result;
use clap::{Parser, Subcommand};
use fxrate::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long = "config", global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxrate::AppCommand {
    fn from(cmd: Commands) -> fxrate::AppCommand {
        match cmd {
            Commands::Serve { listen } => fxrate::AppCommand::Serve { listen },
            Commands::Convert {
                source,
                target,
                amount,
            } => fxrate::AppCommand::Convert {
                source,
                target,
                amount,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Run the HTTP API (default)
    Serve {
        /// Address to listen on, overrides the configuration
        #[arg(short, long)]
        listen: Option<String>,
    },
    /// Convert an amount once and print the result
    Convert {
        source: String,
        target: String,
        /// Amount, thousands separators allowed (e.g. 1,000)
        amount: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Serve { listen: None });
    let result = match command {
        Commands::Setup => setup(cli.config_path.as_deref()),
        cmd => fxrate::run_command(cmd.into(), cli.config_path.as_deref()).await,
    };

    if let Err(e) = &result {
        tracing::error!("Application failed: {e:#}");
    }
    result
}

fn setup(config_path: Option<&str>) -> anyhow::Result<()> {
    use anyhow::Context;

    let path = match config_path {
        Some(path) => std::path::PathBuf::from(path),
        None => fxrate::config::AppConfig::default_config_path()?,
    };

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = fxrate::config::AppConfig::default().to_yaml()?;
    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_flag_before_subcommand() {
        let cli = Cli::try_parse_from([
            "fxrate",
            "--config",
            "rates.yaml",
            "convert",
            "EUR",
            "USD",
            "10",
        ])
        .expect("Failed to parse");
        assert_eq!(cli.config_path.as_deref(), Some("rates.yaml"));
        assert!(matches!(cli.command, Some(Commands::Convert { .. })));
    }

    #[test]
    fn test_config_flag_is_global() {
        let cli = Cli::try_parse_from([
            "fxrate",
            "serve",
            "-c",
            "rates.yaml",
            "--listen",
            "127.0.0.1:9000",
        ])
        .expect("Failed to parse");
        assert_eq!(cli.config_path.as_deref(), Some("rates.yaml"));
        match cli.command {
            Some(Commands::Serve { listen }) => {
                assert_eq!(listen.as_deref(), Some("127.0.0.1:9000"))
            }
            _ => panic!("Expected the serve command"),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["fxrate", "--verbose"]).expect("Failed to parse");
        assert!(cli.verbose);
        assert!(cli.command.is_none());
        assert!(cli.config_path.is_none());
    }
}
