//! Catalog served from a document-store JSON export.

use std::path::Path;

use brandstore_core::{BannerRecord, CategoryQuery, CategoryRecord, ProductRecord};
use serde::Deserialize;
use tracing::{debug, info};

use super::{Catalog, CatalogError};

/// Top-level collections of the export.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogExport {
    #[serde(rename = "Items")]
    items: Vec<ProductRecord>,
    #[serde(rename = "Category")]
    categories: Vec<CategoryRecord>,
    #[serde(rename = "Banner")]
    banners: Vec<BannerRecord>,
}

/// An in-memory catalog loaded once from JSON.
#[derive(Debug, Default)]
pub struct JsonCatalog {
    export: CatalogExport,
}

impl JsonCatalog {
    /// Parse an export document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let export: CatalogExport = serde_json::from_str(json)?;
        Ok(Self { export })
    }

    /// Load an export from disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, or
    /// `CatalogError::Json` if it is malformed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            items = catalog.export.items.len(),
            categories = catalog.export.categories.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Find a product by exact title.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&ProductRecord> {
        self.export.items.iter().find(|item| item.title == title)
    }
}

impl Catalog for JsonCatalog {
    fn items(&self, query: &CategoryQuery) -> Result<Vec<ProductRecord>, CatalogError> {
        let items: Vec<_> = self
            .export
            .items
            .iter()
            .filter(|item| query.matches(&item.category_id))
            .cloned()
            .collect();
        debug!(%query, items = items.len(), "Queried catalog");
        Ok(items)
    }

    fn popular(&self) -> Result<Vec<ProductRecord>, CatalogError> {
        Ok(self
            .export
            .items
            .iter()
            .filter(|item| item.recommended)
            .cloned()
            .collect())
    }

    fn categories(&self) -> Result<Vec<CategoryRecord>, CatalogError> {
        Ok(self.export.categories.clone())
    }

    fn banners(&self) -> Result<Vec<BannerRecord>, CatalogError> {
        Ok(self.export.banners.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"{
        "Banner": [{"url": "banner-1.png"}],
        "Category": [
            {"id": "nike", "title": "Nike", "picUrl": "nike.png"},
            {"id": "puma", "title": "Puma", "picUrl": "puma.png"}
        ],
        "Items": [
            {"title": "Giày Nike Air", "price": 1250000, "categoryId": "nike", "categoryTitle": "Nike", "showRecommend": true},
            {"title": "Áo Puma", "price": 450000, "categoryId": "puma", "categoryTitle": "Puma"},
            {"title": "Quần Nike", "price": "350000", "categoryId": "nike", "categoryTitle": "Nike"}
        ]
    }"#;

    #[test]
    fn test_items_by_category() {
        let catalog = JsonCatalog::from_json(EXPORT).unwrap();
        let nike = catalog
            .items(&CategoryQuery::Category("nike".to_string()))
            .unwrap();
        assert_eq!(nike.len(), 2);
        assert_eq!(nike[0].title, "Giày Nike Air");
        assert_eq!(nike[1].title, "Quần Nike");
    }

    #[test]
    fn test_all_items() {
        let catalog = JsonCatalog::from_json(EXPORT).unwrap();
        assert_eq!(catalog.items(&CategoryQuery::All).unwrap().len(), 3);
    }

    #[test]
    fn test_catalog_records_have_no_cart_state() {
        let catalog = JsonCatalog::from_json(EXPORT).unwrap();
        assert!(
            catalog
                .items(&CategoryQuery::All)
                .unwrap()
                .iter()
                .all(ProductRecord::is_catalog_fresh)
        );
    }

    #[test]
    fn test_popular_categories_banners() {
        let catalog = JsonCatalog::from_json(EXPORT).unwrap();
        assert_eq!(catalog.popular().unwrap().len(), 1);
        assert_eq!(catalog.categories().unwrap()[1].id, "puma");
        assert_eq!(catalog.banners().unwrap()[0].url, "banner-1.png");
    }

    #[test]
    fn test_find_by_title() {
        let catalog = JsonCatalog::from_json(EXPORT).unwrap();
        assert!(catalog.find_by_title("Áo Puma").is_some());
        assert!(catalog.find_by_title("Áo").is_none());
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let catalog = JsonCatalog::from_json("{}").unwrap();
        assert!(catalog.items(&CategoryQuery::All).unwrap().is_empty());
        assert!(catalog.banners().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_export() {
        assert!(matches!(
            JsonCatalog::from_json("[1, 2"),
            Err(CatalogError::Json(_))
        ));
    }
}
