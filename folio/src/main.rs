use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use folio::commands::{draft::DraftCommand, submit, theme::ThemeCommand, validate, FieldArgs};
use folio_models::contact::FieldId;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    if let Command::Validate { field, value } = &cli.command {
        return validate::run(*field, value, &mut std::io::stdout());
    }

    init_tracing();

    debug!(paths = ?cli.config, "loading config");
    let config = folio_config::load(cli.config.as_slice()).context("Failed to load config")?;

    match cli.command {
        Command::Draft { command } => command.invoke(config).await?,
        Command::Submit { fields } => submit::invoke(config, fields).await?,
        Command::Theme { command } => command.invoke(config).await?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Validate { .. } | Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Configuration files, later ones override earlier ones
    #[arg(
        short,
        long = "config",
        env = "FOLIO_CONFIG",
        value_delimiter = ':',
        default_value = folio_config::DEFAULT_CONFIG_PATH,
        global = true
    )]
    config: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Inspect and edit the saved contact form draft
    #[command(aliases(["d"]))]
    Draft {
        #[command(subcommand)]
        command: DraftCommand,
    },
    /// Check a single field value
    #[command(aliases(["v"]))]
    Validate {
        /// One of name, email, subject, message
        field: FieldId,
        value: String,
    },
    /// Submit the saved draft, optionally changing fields first
    #[command(aliases(["send"]))]
    Submit {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Show or toggle the color scheme
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
