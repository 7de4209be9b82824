use std::path::Path;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::app::{fetch, score, AppConfig, EcorouteAppError};

/// Command line tool that retrieves candidate driving routes and ranks them by
/// monetary cost, carbon emissions and a blended score
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct EcorouteApp {
    #[command(subcommand)]
    pub op: EcorouteOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum EcorouteOperation {
    /// request routes from the routing provider and rank them
    Fetch {
        /// TOML file with the [request] table and optional [scoring] table.
        /// the API key is read from the ECOROUTE_API_KEY environment variable.
        #[arg(short, long)]
        configuration_file: String,

        /// location on disk to write output files. if not provided,
        /// nothing is written and results are only printed.
        #[arg(short, long)]
        output_directory: Option<String>,

        /// write the raw provider response as response.json to the output directory.
        #[arg(short, long)]
        store_raw: bool,
    },
    /// rank routes from a provider response stored by a previous fetch
    Score {
        /// raw provider response JSON file
        #[arg(short, long)]
        response_file: String,

        /// TOML file with an optional [scoring] table
        #[arg(short, long)]
        configuration_file: Option<String>,

        /// location on disk to write the route report
        #[arg(short, long)]
        output_directory: Option<String>,
    },
}

impl EcorouteOperation {
    pub fn run(&self) -> Result<(), EcorouteAppError> {
        match self {
            EcorouteOperation::Fetch {
                configuration_file,
                output_directory,
                store_raw,
            } => {
                let outdir = output_directory.as_ref().map(Path::new);
                if *store_raw && outdir.is_none() {
                    return Err(EcorouteAppError::InvalidUserInput(String::from(
                        "--store-raw requires --output-directory",
                    )));
                }
                let config = AppConfig::load(Some(Path::new(configuration_file)))?;
                fetch::run(&config, outdir, *store_raw)
            }
            EcorouteOperation::Score {
                response_file,
                configuration_file,
                output_directory,
            } => {
                let config = AppConfig::load(configuration_file.as_ref().map(Path::new))?;
                let outdir = output_directory.as_ref().map(Path::new);
                score::run(&config, Path::new(response_file), outdir)
            }
        }
    }
}
