use std::{env, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io;
use tracing::level_filters::LevelFilter;

use crate::{
    session::{entities::Period, jsonl_store::JsonlSessionStore, store::sessions_for_period},
    utils::logging::{enable_logging, CLI_PREFIX},
};

#[derive(Parser, Debug)]
#[command(name = "Codestats", version, long_about = None)]
#[command(about = "Turns coding activity records into chart-ready statistics", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, help = "Enable logging")]
    log: bool,
    #[arg(
        long,
        help = "Application directory. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Print the combined chart view for a period as JSON")]
    Chart {
        #[arg(long, value_enum, default_value_t = Period::Day)]
        period: Period,
    },
    #[command(about = "Print the raw session records for a period as JSON")]
    Sessions {
        #[arg(long, value_enum, default_value_t = Period::Day)]
        period: Period,
    },
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let dir = match args.dir {
        Some(dir) => dir,
        None => create_application_default_path()?,
    };

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(CLI_PREFIX, &dir, logging_level, args.log)?;

    let store = JsonlSessionStore::new(dir.join("sessions"));

    match args.commands {
        Commands::Chart { period } => {
            let sessions = sessions_for_period(&store, period).await?;
            println!("{}", serde_json::to_string_pretty(&sessions.to_view_model())?);
            Ok(())
        }
        Commands::Sessions { period } => {
            let sessions = sessions_for_period(&store, period).await?;
            println!("{}", serde_json::to_string_pretty(&sessions)?);
            Ok(())
        }
    }
}

pub fn create_application_default_path() -> Result<PathBuf> {
    let path = {
        #[cfg(windows)]
        {
            let mut path =
                PathBuf::from(env::var("APPDATA").expect("APPDATA should be present on Windows"));
            path.push("codestats");
            path
        }
        #[cfg(not(windows))]
        {
            let mut path = env::var("XDG_STATE_HOME")
                .map(PathBuf::from)
                .or_else(|_| {
                    env::var("HOME").map(|home| {
                        let mut path = PathBuf::from(home);
                        path.push(".local/state");
                        path
                    })
                })
                .expect("Couldn't find neither XDG_STATE_HOME nor HOME");
            path.push("codestats");
            path
        }
    };

    match std::fs::create_dir_all(&path) {
        Ok(_) => Ok(path),
        Err(v) if v.kind() == io::ErrorKind::AlreadyExists => Ok(path),
        Err(v) => Err(v.into()),
    }
}
