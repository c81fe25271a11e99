//! rxscan CLI
//!
//! Command-line interface for the prescription recognition pipeline:
//! preprocess -> extract -> match -> correct -> score.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use core_pipeline::ocr::TesseractExtractor;
use core_pipeline::preprocess::preprocess_image;
use core_pipeline::{PredictionPipeline, Vocabulary};
use model_bridge::{CorrectionClient, CorrectionModel, CorrectionServerConfig};

#[derive(Parser)]
#[command(name = "rxscan")]
#[command(about = "Recognize drug names in photographed prescriptions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full recognition pipeline on a prescription image
    Recognize {
        /// Input image file
        #[arg(short, long)]
        image: PathBuf,

        /// Newline-delimited drug-name vocabulary
        #[arg(short, long, default_value = "data/drug_list.txt")]
        vocabulary: PathBuf,

        /// Base URL of the correction-model server
        #[arg(long, default_value = "http://localhost:8602")]
        corrector_url: String,

        /// Correction request timeout in seconds
        #[arg(long, default_value = "30")]
        corrector_timeout: u64,

        /// Tesseract language pack
        #[arg(long, default_value = "eng")]
        language: String,
    },

    /// Write the binarized intermediate image, for inspecting preprocessing
    Preprocess {
        /// Input image file
        #[arg(short, long)]
        image: PathBuf,

        /// Output path for the binarized image
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recognize {
            image,
            vocabulary,
            corrector_url,
            corrector_timeout,
            language,
        } => {
            let bytes = std::fs::read(&image)
                .with_context(|| format!("failed to read {}", image.display()))?;

            let vocabulary = Vocabulary::from_path(&vocabulary)
                .with_context(|| format!("failed to load vocabulary {}", vocabulary.display()))?;
            tracing::info!(drugs = vocabulary.len(), "vocabulary loaded");

            let corrector = CorrectionModel::new(CorrectionClient::new(CorrectionServerConfig {
                base_url: corrector_url,
                timeout_secs: corrector_timeout,
            })?);

            let pipeline = PredictionPipeline::new(
                Arc::new(TesseractExtractor::new(language)),
                Arc::new(corrector),
                Arc::new(vocabulary),
            );

            let result = pipeline.recognize(&bytes).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Commands::Preprocess { image, output } => {
            let bytes = std::fs::read(&image)
                .with_context(|| format!("failed to read {}", image.display()))?;

            let binarized = preprocess_image(&bytes)?;
            binarized
                .save(&output)
                .with_context(|| format!("failed to write {}", output.display()))?;

            println!("Wrote {}", output.display());
            Ok(())
        }
    }
}
