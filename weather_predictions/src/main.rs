pub(crate) mod commands;
pub(crate) mod config;
pub(crate) mod error;

use std::{io, path::PathBuf};

use clap::Parser;
use commands::{compass_command, date_command};
use error::ApplicationResult;
use tracing::trace;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigSource, Configurable, LogFormat};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[clap(long, short, global = true)]
    /// Config file to use instead of the one in the user's config directory
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Prints a date as YYYY-MM-DD, today's when no instant is given
    Date {
        /// A date (2024-03-07) or timestamp (2024-03-07T10:00Z, 2024-03-07T10:00[Europe/Madrid])
        instant: Option<String>,
    },
    /// Prints the compass direction of each heading, in degrees
    Compass {
        #[arg(required = true, allow_hyphen_values = true)]
        headings: Vec<String>,
    },
    /// Prints the configuration in effect
    Config,
}

impl Cli {
    /// `compass` needs nothing from the user's config file, so it does not
    /// read or create one unless `--config` names it.
    fn config_source(&self) -> ConfigSource<'_> {
        match (&self.config, &self.command) {
            (Some(path), _) => ConfigSource::Explicit(path),
            (None, Command::Compass { .. }) => ConfigSource::BuiltIn,
            (None, _) => ConfigSource::User,
        }
    }
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> ApplicationResult<()> {
    let cli = Cli::parse();
    let configurable = Configurable::load(cli.config_source())?;
    init_logging(configurable.log_format);
    trace!(?cli, "Starting");

    match &cli.command {
        Command::Date { instant } => {
            let clock = configurable.clock()?;
            println!("{}", date_command(instant.as_deref(), &clock)?);
        }
        Command::Compass { headings } => {
            compass_command(headings, &mut io::stdout().lock())?;
        }
        Command::Config => {
            print!("{}", configurable.to_toml()?);
        }
    }
    Ok(())
}
