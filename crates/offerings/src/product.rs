use serde::{Deserialize, Serialize};

use offerkit_core::{ProductIdentifier, ValueObject};

/// Price in the smallest currency unit (e.g. cents) plus ISO currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    pub amount_minor: u64,
    pub currency: String,
}

impl Price {
    pub fn new(amount_minor: u64, currency: impl Into<String>) -> Self {
        Self {
            amount_minor,
            currency: currency.into(),
        }
    }
}

impl ValueObject for Price {}

/// Introductory discount attached to a store product (free trial, intro price).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntroductoryDiscount {
    pub price: Price,
    pub localized_price_string: String,
}

impl ValueObject for IntroductoryDiscount {}

/// Platform-specific purchasable product, as seen by a [`crate::Package`].
///
/// Stores (App Store, Play Store, ...) provide their own implementations.
/// Price formatting is the product's job; packages only delegate to it.
pub trait StoreProduct: core::fmt::Debug {
    fn product_identifier(&self) -> &ProductIdentifier;

    fn price(&self) -> &Price;

    /// Price already formatted for the user's locale (e.g. "$9.99").
    fn localized_price_string(&self) -> &str;

    /// `None` when the product offers no introductory discount.
    fn introductory_discount(&self) -> Option<&IntroductoryDiscount>;
}

/// Store-agnostic product snapshot, as loaded from a product list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub product_identifier: ProductIdentifier,
    pub price: Price,
    pub localized_price_string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introductory_discount: Option<IntroductoryDiscount>,
}

impl CatalogProduct {
    pub fn new(
        product_identifier: impl Into<ProductIdentifier>,
        price: Price,
        localized_price_string: impl Into<String>,
    ) -> Self {
        Self {
            product_identifier: product_identifier.into(),
            price,
            localized_price_string: localized_price_string.into(),
            introductory_discount: None,
        }
    }

    pub fn with_introductory_discount(mut self, discount: IntroductoryDiscount) -> Self {
        self.introductory_discount = Some(discount);
        self
    }
}

impl ValueObject for CatalogProduct {}

impl StoreProduct for CatalogProduct {
    fn product_identifier(&self) -> &ProductIdentifier {
        &self.product_identifier
    }

    fn price(&self) -> &Price {
        &self.price
    }

    fn localized_price_string(&self) -> &str {
        &self.localized_price_string
    }

    fn introductory_discount(&self) -> Option<&IntroductoryDiscount> {
        self.introductory_discount.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_product_exposes_store_fields() {
        let product = CatalogProduct::new("com.myapp.monthly", Price::new(999, "USD"), "$9.99");

        assert_eq!(product.product_identifier().as_str(), "com.myapp.monthly");
        assert_eq!(product.price(), &Price::new(999, "USD"));
        assert_eq!(product.localized_price_string(), "$9.99");
        assert!(product.introductory_discount().is_none());
    }

    #[test]
    fn introductory_discount_is_optional_in_json() {
        let json = r#"{
            "product_identifier": "com.myapp.annual",
            "price": { "amount_minor": 4999, "currency": "EUR" },
            "localized_price_string": "49,99 €"
        }"#;
        let product: CatalogProduct = serde_json::from_str(json).unwrap();
        assert!(product.introductory_discount.is_none());

        let with_intro = product.clone().with_introductory_discount(IntroductoryDiscount {
            price: Price::new(0, "EUR"),
            localized_price_string: "0,00 €".to_string(),
        });
        let encoded = serde_json::to_value(&with_intro).unwrap();
        assert_eq!(
            encoded["introductory_discount"]["localized_price_string"],
            "0,00 €"
        );
        assert!(serde_json::to_value(&product).unwrap().get("introductory_discount").is_none());
    }
}
