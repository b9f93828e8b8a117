//! Command implementations for the PHM CLI.
//!
//! Every command loads the three documents from a local directory or a
//! remote base URL, drives a `Reconciler` the same way the browser
//! controls do, and prints what the viewer would show.

use clap::Subcommand;
use phm_core::{Dataset, Year};

pub mod inspect;
pub mod source;

use source::DataSource;

#[derive(Subcommand)]
pub enum Command {
    /// List press years and the election each one resolves to
    Years {
        /// Data directory or http(s) base URL holding the documents
        #[arg(short, long)]
        source: DataSource,
    },

    /// Print the map styling for a dataset and year
    Map {
        #[arg(short, long)]
        source: DataSource,

        /// Press or Elections
        #[arg(short, long, default_value = "Press")]
        dataset: Dataset,

        /// Press year (snapped to the nearest year on record)
        #[arg(short, long)]
        year: Year,

        /// County to select (highlighted in the output)
        #[arg(short, long)]
        county: Option<String>,

        /// Write the styling as CSV to this path instead of printing a table
        #[arg(long)]
        csv: Option<String>,
    },

    /// Print the detail panel for a county as JSON
    Detail {
        #[arg(short, long)]
        source: DataSource,

        #[arg(short, long, default_value = "Press")]
        dataset: Dataset,

        #[arg(short, long)]
        year: Year,

        #[arg(short, long)]
        county: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Years { source } => inspect::run_years(&source).await,
        Command::Map {
            source,
            dataset,
            year,
            county,
            csv,
        } => inspect::run_map(&source, dataset, year, county.as_deref(), csv.as_deref()).await,
        Command::Detail {
            source,
            dataset,
            year,
            county,
        } => inspect::run_detail(&source, dataset, year, &county).await,
    }
}
