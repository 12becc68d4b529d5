use std::path::PathBuf;

use clap::Parser;
use log::info;
use pennywise::{ArtifactStore, Trainer};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the labeled CSV dataset (message,category)
    #[arg(long, default_value = "expense_dataset.csv")]
    dataset: PathBuf,

    /// Directory the fitted artifacts are written to
    #[arg(long, default_value = ".")]
    artifacts: PathBuf,

    /// Laplace smoothing applied to token counts
    #[arg(long, default_value_t = 1.0)]
    smoothing: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    info!("Training from {}", args.dataset.display());
    let store = ArtifactStore::new(&args.artifacts)?;
    let classifier = Trainer::new()
        .with_smoothing(args.smoothing)
        .train_and_save(&args.dataset, &store)?;

    let info = classifier.info();
    println!(
        "Training complete: {} categories ({}), vocabulary of {} tokens",
        info.num_classes,
        info.class_labels.join(", "),
        info.vocabulary_size
    );

    Ok(())
}
