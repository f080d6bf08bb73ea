//! PartPulse - batch parts-movement notifications
//!
//! Runs the notification server, or submits a batch file to one.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use partpulse::config::DEFAULT_CONFIG_PATH;
use partpulse::{HttpSubmissionClient, SubmitOutcome, load_batch_file, server};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Batch parts-movement notifications for field technicians
#[derive(Parser)]
#[command(name = "partpulse")]
#[command(about = "Submit and deliver parts-movement notifications", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the notification server
    Serve {
        /// Configuration file; defaults are used when it does not exist
        #[arg(long, short, env = "PARTPULSE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Submit a YAML batch file to a running server
    ///
    /// Every record goes through the same field checks and batch validation
    /// as the web form before anything is sent.
    Submit {
        /// Server base URL
        #[arg(long, default_value = "http://localhost:8080")]
        server: String,

        /// Technician name recorded on the notification
        #[arg(long)]
        submitter: String,

        /// Batch file to submit
        #[arg(long)]
        file: PathBuf,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
}

async fn submit(server: &str, submitter: &str, file: &Path, timeout: u64) -> anyhow::Result<()> {
    let batch = load_batch_file(file)
        .await
        .with_context(|| format!("failed to read batch file {}", file.display()))?;
    let mut form = batch.into_form(submitter)?;
    let client = HttpSubmissionClient::new(server, Duration::from_secs(timeout))?;

    match form.submit(&client).await? {
        SubmitOutcome::Submitted(receipt) => {
            let via = if receipt.delivered_via_fallback {
                "logged by server (no e-mail transport)"
            } else {
                "e-mailed"
            };
            println!(
                "Submitted {} record(s), {} [dispatch {}]",
                receipt.records_count, via, receipt.dispatch_id
            );
            Ok(())
        }
        SubmitOutcome::Rejected(failures) => {
            for failure in failures.failures() {
                eprintln!(
                    "record {}: missing {}",
                    failure.draft_index + 1,
                    failure.missing_fields.join(", ")
                );
            }
            bail!("batch is incomplete, nothing was sent")
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let result: anyhow::Result<()> = match cli.command {
        Commands::Serve { config } => server::run_server(&config).await.map_err(Into::into),
        Commands::Submit {
            server,
            submitter,
            file,
            timeout,
        } => submit(&server, &submitter, &file, timeout).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
