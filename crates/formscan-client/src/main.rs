//! formscan CLI: upload a document and print the analysis result.
//!
//! Set FORMSCAN_API_URL or pass --server (default http://localhost:5000).

use anyhow::Context;
use clap::{Parser, Subcommand};
use formscan_client::{init_tracing, SelectedFile, UploadForm, DEFAULT_SERVER_URL};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "formscan", about = "Upload documents for form and table analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a file and print the server's message
    Upload {
        /// Path to the file to upload
        file: std::path::PathBuf,
        /// Base URL of the formscan API
        #[arg(long, env = "FORMSCAN_API_URL", default_value = DEFAULT_SERVER_URL)]
        server: String,
        /// MIME type sent with the file part
        #[arg(long)]
        content_type: Option<String>,
        /// Also print the full analysis JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Upload {
            file,
            server,
            content_type,
            json,
        } => {
            let mut form = UploadForm::new(&server)?;
            form.select_path(&file).await?;

            if let Some(content_type) = content_type {
                if let Some(selected) = form.selected().cloned() {
                    form.select_file(SelectedFile {
                        content_type: Some(content_type),
                        ..selected
                    });
                }
            }

            form.submit().await;
            println!("{}", form.message());

            let Some(reply) = form.last_reply() else {
                return Ok(ExitCode::FAILURE);
            };

            if let Some(key) = &reply.s3_output_file {
                println!("Output: {}", key);
            }
            if json {
                if let Some(data) = &reply.textract_data {
                    let out = serde_json::to_string_pretty(data).context("Serialize response")?;
                    println!("{}", out);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
