use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::info;
use pennywise::server::{self, DEFAULT_PORT};
use pennywise::ArtifactStore;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory the fitted artifacts are loaded from
    #[arg(long, default_value = ".")]
    artifacts: PathBuf,

    /// TCP port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    // Artifacts load before the socket binds; a missing or corrupt artifact
    // exits non-zero without ever serving.
    let store = ArtifactStore::new(&args.artifacts)?;
    let classifier = Arc::new(store.load()?);

    let info = classifier.info();
    info!(
        "Serving {} categories: {}",
        info.num_classes,
        info.class_labels.join(", ")
    );

    server::run(classifier, args.port).await?;

    Ok(())
}
