use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::PathBuf;

use crate::history;
use crate::report::BuildInsights;
use crate::sources;

#[derive(Parser)]
#[command(name = "buildlens")]
#[command(author, version, about = "Build History Insights Tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output file path (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a build history export and flag abnormal days
    Analyze {
        /// Path or http(s) URL of the build history CSV
        #[arg(short, long, env = "BUILDLENS_SOURCE")]
        source: String,
    },
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Analyze { source } => {
                info!("Analyzing build history from: {source}");

                let text = sources::load_source(source).await?;
                let raw_records = sources::parse_records(&text)?;
                let total_records = raw_records.len();

                let (records, skipped) = history::transform_records(raw_records);
                if !skipped.is_empty() {
                    warn!("Skipped {} malformed records", skipped.len());
                }

                let daily = history::analyze_records(&records);

                let insights = BuildInsights {
                    source: source.clone(),
                    collected_at: Utc::now(),
                    total_records,
                    days_analyzed: daily.labels.len(),
                    skipped,
                    daily,
                };

                // Serialize to JSON
                let json_output = if self.pretty {
                    serde_json::to_string_pretty(&insights)?
                } else {
                    serde_json::to_string(&insights)?
                };

                // Write to output
                if let Some(output_path) = &self.output {
                    std::fs::write(output_path, json_output)?;
                    info!("Insights written to: {}", output_path.display());
                } else {
                    println!("{}", json_output);
                }

                Ok(())
            }
        }
    }
}
