use account_loader::application::loader::AccountLoader;
use account_loader::domain::ports::RecordSinkBox;
use account_loader::infrastructure::http::HttpRecordSink;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Zip archive whose entries are `{"accounts": [...]}` JSON documents
    archive: PathBuf,

    /// Base URL of the target server; records are posted to <BASE_URL>/accounts/new
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the bodies of failed requests.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let sink: RecordSinkBox = Box::new(HttpRecordSink::new(&cli.base_url).into_diagnostic()?);
    let loader = AccountLoader::new(sink);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = loader.run(&cli.archive, &mut out).await.into_diagnostic()?;

    info!(
        records = report.records,
        accepted = report.accepted,
        rejected = report.rejected,
        unreachable = report.unreachable,
        "load finished"
    );

    Ok(())
}
