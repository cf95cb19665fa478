use clap::Parser;
use offerkit_cli::{InspectConfig, inspect};

fn main() -> anyhow::Result<()> {
    offerkit_observability::init();

    let config = InspectConfig::parse();
    tracing::info!(
        catalog = %config.catalog_path.display(),
        products = %config.products_path.display(),
        "inspecting catalog"
    );

    let report = inspect(&config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
