//! mdiary CLI: Command-line interface for the markdown diary editor

mod logging;

use clap::{Parser, Subcommand};
use mdiary_engine::Config;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::error;

/// Write a diary entry in Markdown and preview it in the terminal
#[derive(Parser)]
#[command(name = "mdiary")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (JSON)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory for log files
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the editor (default when no command specified)
    Edit,

    /// Print the effective configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Where to write the file
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let logging = logging::init(cli.log_dir.clone(), cli.verbose);
    if let Some(guard) = &logging {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging to file");
    }

    let result = match cli.command {
        None | Some(Commands::Edit) => cmd_edit(cli.config.as_deref()),
        Some(Commands::Config { json }) => cmd_config(cli.config.as_deref(), json),
        Some(Commands::Init { path, force }) => cmd_init(&path, force),
    };

    if let Err(e) = result {
        error!(error = %e, "command failed");
        // process::exit skips destructors, so flush the log writer first
        drop(logging);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_edit(config_path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let config = Config::load_or_default(config_path)?;
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(mdiary_tui::run_tui(config))
}

fn cmd_config(config_path: Option<&Path>, json: bool) -> Result<(), Box<dyn Error>> {
    let config = Config::load_or_default(config_path)?;
    println!("{}", describe_config(&config, json)?);
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<(), Box<dyn Error>> {
    write_default_config(path, force)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Render `config` for the `config` command.
fn describe_config(config: &Config, json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(config);
    }

    let theme = serde_json::to_value(config.theme)?;
    Ok([
        format!("title: {}", config.title),
        format!("placeholder: {}", config.placeholder),
        format!("theme: {}", theme.as_str().unwrap_or_default()),
        format!(
            "tick_rate_ms: {} (effective {})",
            config.tick_rate_ms,
            config.effective_tick_rate_ms()
        ),
        format!("ascii_borders: {}", config.ascii_borders),
    ]
    .join("\n"))
}

fn write_default_config(path: &Path, force: bool) -> Result<(), Box<dyn Error>> {
    if path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )
        .into());
    }
    Config::default().save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults_to_edit() {
        let cli = Cli::try_parse_from(["mdiary"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["mdiary", "config", "--json", "-vv", "--config", "c.json"])
                .unwrap();
        assert!(matches!(cli.command, Some(Commands::Config { json: true })));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("c.json")));
    }

    #[test]
    fn test_describe_config_text() {
        let text = describe_config(&Config::default(), false).unwrap();
        assert!(text.contains("title: Markdown Diary"));
        assert!(text.contains("theme: mocha"));
        assert!(text.contains("tick_rate_ms: 250 (effective 250)"));
    }

    #[test]
    fn test_describe_config_json_round_trips() {
        let json = describe_config(&Config::default(), true).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_init_writes_default_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mdiary.json");

        write_default_config(&path, false).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mdiary.json");
        std::fs::write(&path, r#"{"title":"Mine"}"#).unwrap();

        let err = write_default_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(Config::load(&path).unwrap().title, "Mine");

        write_default_config(&path, true).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }
}
