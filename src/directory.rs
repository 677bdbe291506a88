//! Restaurant directory: read-only lookup of tenant records by slug.

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::debug;

use crate::catalog::{validate_slug, CatalogError};
use crate::model::RestaurantRecord;

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Exact lookup by slug.
    async fn find(&self, slug: &str) -> Option<RestaurantRecord>;

    /// The deterministic default record: the first directory entry.
    async fn first(&self) -> RestaurantRecord;

    async fn list(&self) -> Vec<RestaurantRecord>;

    /// Resolve a slug, falling back to [`first`](Self::first) when nothing matches.
    async fn resolve(&self, slug: &str) -> RestaurantRecord {
        match self.find(slug).await {
            Some(record) => record,
            None => {
                debug!(slug, "unknown slug; using default restaurant");
                self.first().await
            }
        }
    }
}

/// Directory backed by an in-memory list. Never empty, slugs unique.
#[derive(Debug, Clone)]
pub struct InMemoryRestaurants {
    records: Vec<RestaurantRecord>,
}

impl InMemoryRestaurants {
    pub fn new(records: Vec<RestaurantRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty("restaurants"));
        }
        let mut seen = HashSet::new();
        for r in &records {
            validate_slug(&r.slug)?;
            if !seen.insert(r.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(r.slug.clone()));
            }
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed directory.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurants {
    async fn find(&self, slug: &str) -> Option<RestaurantRecord> {
        self.records.iter().find(|r| r.slug == slug).cloned()
    }

    async fn first(&self) -> RestaurantRecord {
        // Non-empty is checked in `new`.
        self.records[0].clone()
    }

    async fn list(&self) -> Vec<RestaurantRecord> {
        self.records.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn sample() -> InMemoryRestaurants {
        InMemoryRestaurants::new(catalog::builtin().restaurants).unwrap()
    }

    #[tokio::test]
    async fn resolves_known_slug() {
        let dir = sample();
        let r = dir.resolve("demo-cafe").await;
        assert_eq!(r.slug, "demo-cafe");
        let r = dir.resolve("sonnati-house").await;
        assert_eq!(r.slug, "sonnati-house");
    }

    #[tokio::test]
    async fn unknown_slug_falls_back_to_first() {
        let dir = sample();
        assert!(!dir.is_empty());
        let first = dir.list().await[0].clone();
        for slug in ["does-not-exist", "", "DEMO-CAFE", "demo-cafe "] {
            assert_eq!(dir.resolve(slug).await, first);
        }
        assert_eq!(dir.resolve(&first.slug).await, first);
    }

    #[test]
    fn rejects_empty_and_duplicates() {
        assert!(matches!(
            InMemoryRestaurants::new(vec![]),
            Err(CatalogError::Empty("restaurants"))
        ));

        let mut records = catalog::builtin().restaurants;
        records.push(records[0].clone());
        match InMemoryRestaurants::new(records) {
            Err(CatalogError::DuplicateSlug(slug)) => assert_eq!(slug, "demo-cafe"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_url_safe_slug() {
        let mut records = catalog::builtin().restaurants;
        records[1].slug = "Bad Slug".into();
        assert!(matches!(
            InMemoryRestaurants::new(records),
            Err(CatalogError::InvalidSlug(_))
        ));
    }
}
