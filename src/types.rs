//! Catalog data model.
//!
//! Wire fields other than `id` are optional on the API side and may be absent
//! or `null`; either way they decode to explicit defaults here so rendering
//! never has to guard against nulls.

use serde::{Deserialize, Deserializer, Serialize};

/// Stable product identity assigned by the catalog API.
pub type ProductId = u64;

/// Number of products requested per page. Fixed for every list and search load.
pub const PAGE_SIZE: usize = 10;

/// Product summary as shown in the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "non_negative_price")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
}

/// Full product record for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

/// One page of a list or search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: usize,
}

impl ProductPage {
    pub fn new(products: Vec<Product>, total: usize) -> Self {
        Self { products, total }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_negative_price<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price: f64 = null_as_default(deserializer)?;
    if price < 0.0 || !price.is_finite() {
        return Err(serde::de::Error::custom(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_missing_optional_fields_default() {
        let product: Product = serde_json::from_str(r#"{"id": 7, "title": "Lamp"}"#).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.title, "Lamp");
        assert_eq!(product.brand, "");
        assert_eq!(product.thumbnail, "");
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn test_product_requires_id() {
        let result: std::result::Result<Product, _> =
            serde_json::from_str(r#"{"title": "No id"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_product_rejects_negative_price() {
        let result: std::result::Result<Product, _> =
            serde_json::from_str(r#"{"id": 1, "price": -3.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_detail_flattens_product_fields() {
        let json = r#"{
            "id": 1,
            "title": "iPhone 9",
            "brand": "Apple",
            "price": 549,
            "thumbnail": "https://cdn.example.com/1/thumb.jpg",
            "description": "An apple mobile",
            "images": ["https://cdn.example.com/1/1.jpg", "https://cdn.example.com/1/2.jpg"],
            "rating": 4.69
        }"#;
        let detail: ProductDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.product.id, 1);
        assert_eq!(detail.product.brand, "Apple");
        assert_eq!(detail.product.price, 549.0);
        assert_eq!(detail.description, "An apple mobile");
        assert_eq!(detail.images.len(), 2);
    }

    #[test]
    fn test_page_ignores_extra_fields() {
        let json = r#"{"products": [{"id": 1}, {"id": 2}], "total": 100, "skip": 0, "limit": 2}"#;
        let page: ProductPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.products.len(), 2);
        assert_eq!(page.total, 100);
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let json = r#"{
            "products": [
                {"id": 1, "title": null, "brand": null, "thumbnail": null, "price": null},
                {"id": 2, "title": "Lamp"}
            ],
            "total": 2
        }"#;
        let page: ProductPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.products.len(), 2);
        let first = &page.products[0];
        assert_eq!(first.title, "");
        assert_eq!(first.brand, "");
        assert_eq!(first.thumbnail, "");
        assert_eq!(first.price, 0.0);
        assert_eq!(page.products[1].title, "Lamp");
    }

    #[test]
    fn test_detail_null_description_and_images() {
        let json = r#"{"id": 4, "brand": null, "description": null, "images": null}"#;
        let detail: ProductDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.product.id, 4);
        assert_eq!(detail.product.brand, "");
        assert_eq!(detail.description, "");
        assert!(detail.images.is_empty());
    }

    #[test]
    fn test_page_missing_or_null_total_and_products() {
        let page: ProductPage = serde_json::from_str(r#"{"products": []}"#).unwrap();
        assert_eq!(page.total, 0);

        let page: ProductPage =
            serde_json::from_str(r#"{"products": null, "total": null}"#).unwrap();
        assert!(page.products.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_null_id_is_rejected() {
        let result: std::result::Result<Product, _> = serde_json::from_str(r#"{"id": null}"#);
        assert!(result.is_err());
    }
}
