//! Page metadata derived from a resolved restaurant record.

use serde::Serialize;

use crate::model::RestaurantRecord;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    /// Viewport theme color.
    pub theme_color: String,
}

/// `"<restaurant name> | <product name>"`, the restaurant description, and its primary color.
pub fn page_metadata(restaurant: &RestaurantRecord, product_name: &str) -> PageMetadata {
    PageMetadata {
        title: format!("{} | {}", restaurant.name, product_name),
        description: restaurant.description.clone().unwrap_or_default(),
        theme_color: restaurant.settings.primary_color.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn metadata_from_record() {
        let mut record = catalog::builtin().restaurants.remove(0);
        let meta = page_metadata(&record, "منوساز");
        assert_eq!(meta.title, "کافه دمو | منوساز");
        assert_eq!(meta.description, record.description.clone().unwrap());
        assert_eq!(meta.theme_color, "#c08552");
        assert_eq!(page_metadata(&record, "منوساز"), meta);

        record.description = None;
        assert_eq!(page_metadata(&record, "Menu").description, "");
    }
}
