//! `offerkit-inspect` support: configuration, file loading and the
//! classification report printed by the binary.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use offerkit_core::ProductIdentifier;
use offerkit_offerings::{CatalogProduct, Offerings, OfferingsFactory, PackageType};

/// Input locations for one inspection run.
///
/// Positional args win over environment variables, which win over defaults.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "offerkit-inspect")]
#[command(about = "Classify the packages of an offerings catalog", long_about = None)]
#[command(version)]
pub struct InspectConfig {
    /// Offerings document (JSON)
    #[arg(env = "OFFERKIT_CATALOG_PATH", default_value = "catalog.json")]
    pub catalog_path: PathBuf,

    /// Product list (JSON array)
    #[arg(env = "OFFERKIT_PRODUCTS_PATH", default_value = "products.json")]
    pub products_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageReport {
    pub offering: String,
    pub identifier: String,
    pub package_type: PackageType,
    pub product: String,
    pub localized_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_introductory_price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub current_offering: Option<String>,
    pub packages: Vec<PackageReport>,
    pub unknown_packages: usize,
}

impl InspectReport {
    pub fn from_offerings(offerings: &Offerings<CatalogProduct>) -> Self {
        let packages: Vec<PackageReport> = offerings
            .all()
            .values()
            .flat_map(|offering| offering.available_packages())
            .map(|package| PackageReport {
                offering: package.offering_identifier().to_string(),
                identifier: package.identifier().to_string(),
                package_type: package.package_type(),
                product: package.product().product_identifier.to_string(),
                localized_price: package.localized_price_string().to_string(),
                localized_introductory_price: package
                    .localized_introductory_price_string()
                    .map(str::to_string),
            })
            .collect();

        let unknown_packages = packages
            .iter()
            .filter(|p| p.package_type == PackageType::Unknown)
            .count();

        Self {
            current_offering: offerings.current().map(|o| o.identifier().to_string()),
            packages,
            unknown_packages,
        }
    }
}

pub fn parse_products(json: &str) -> anyhow::Result<HashMap<ProductIdentifier, Arc<CatalogProduct>>> {
    let products: Vec<CatalogProduct> =
        serde_json::from_str(json).context("failed to parse product list")?;
    Ok(products
        .into_iter()
        .map(|p| (p.product_identifier.clone(), Arc::new(p)))
        .collect())
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Load both inputs and build the report.
pub fn inspect(config: &InspectConfig) -> anyhow::Result<InspectReport> {
    let products = parse_products(&read(&config.products_path)?)?;
    let catalog = read(&config.catalog_path)?;

    let offerings: Offerings<CatalogProduct> = OfferingsFactory::from_json(&catalog, &products)
        .with_context(|| format!("failed to build offerings from {}", config.catalog_path.display()))?;

    let report = InspectReport::from_offerings(&offerings);
    if report.unknown_packages > 0 {
        tracing::info!(
            count = report.unknown_packages,
            "catalog uses package types newer than this build"
        );
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCTS: &str = r#"[
        {
            "product_identifier": "com.myapp.monthly",
            "price": { "amount_minor": 499, "currency": "USD" },
            "localized_price_string": "$4.99",
            "introductory_discount": {
                "price": { "amount_minor": 0, "currency": "USD" },
                "localized_price_string": "Free"
            }
        },
        {
            "product_identifier": "com.myapp.decade",
            "price": { "amount_minor": 9999, "currency": "USD" },
            "localized_price_string": "$99.99"
        }
    ]"#;

    const CATALOG: &str = r#"{
        "current_offering_id": "main",
        "offerings": [{
            "identifier": "main",
            "packages": [
                { "identifier": "$rc_monthly", "platform_product_identifier": "com.myapp.monthly" },
                { "identifier": "$rc_decade", "platform_product_identifier": "com.myapp.decade" }
            ]
        }]
    }"#;

    #[test]
    fn positional_args_set_paths() {
        let config = InspectConfig::try_parse_from([
            "offerkit-inspect",
            "/arg/catalog.json",
            "/arg/products.json",
        ])
        .unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("/arg/catalog.json"));
        assert_eq!(config.products_path, PathBuf::from("/arg/products.json"));
    }

    #[test]
    fn missing_args_fall_back_to_env_or_defaults() {
        let config = InspectConfig::try_parse_from(["offerkit-inspect"]).unwrap();

        let expected_catalog = std::env::var("OFFERKIT_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("catalog.json"));
        let expected_products = std::env::var("OFFERKIT_PRODUCTS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("products.json"));
        assert_eq!(config.catalog_path, expected_catalog);
        assert_eq!(config.products_path, expected_products);
    }

    #[test]
    fn extra_positional_args_are_rejected() {
        let result = InspectConfig::try_parse_from(["offerkit-inspect", "a.json", "b.json", "c.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn report_lists_classified_packages() {
        let products = parse_products(PRODUCTS).unwrap();
        let offerings: Offerings<CatalogProduct> =
            OfferingsFactory::from_json(CATALOG, &products).unwrap();

        let report = InspectReport::from_offerings(&offerings);
        assert_eq!(report.current_offering.as_deref(), Some("main"));
        assert_eq!(report.packages.len(), 2);
        assert_eq!(report.unknown_packages, 1);

        let monthly = &report.packages[0];
        assert_eq!(monthly.package_type, PackageType::Monthly);
        assert_eq!(monthly.localized_introductory_price.as_deref(), Some("Free"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["packages"][1]["package_type"], "unknown");
    }

    #[test]
    fn inspect_reads_files_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.json");
        let products_path = dir.path().join("products.json");
        std::fs::write(&catalog_path, CATALOG).unwrap();
        std::fs::write(&products_path, PRODUCTS).unwrap();

        let report = inspect(&InspectConfig {
            catalog_path,
            products_path,
        })
        .unwrap();
        assert_eq!(report.packages.len(), 2);
        assert_eq!(report.unknown_packages, 1);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = inspect(&InspectConfig {
            catalog_path: PathBuf::from("/nonexistent/catalog.json"),
            products_path: PathBuf::from("/nonexistent/products.json"),
        })
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/products.json"));
    }
}
