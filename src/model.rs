use serde::{Deserialize, Serialize};

/// Presentation phase of a staged preview session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PreviewPhase {
    Initial,
    Skeleton,
    Ready,
}

impl PreviewPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewPhase::Initial => "initial",
            PreviewPhase::Skeleton => "skeleton",
            PreviewPhase::Ready => "ready",
        }
    }

    /// The phase this one may be entered from, if any.
    pub fn predecessor(&self) -> Option<PreviewPhase> {
        match self {
            PreviewPhase::Initial => None,
            PreviewPhase::Skeleton => Some(PreviewPhase::Initial),
            PreviewPhase::Ready => Some(PreviewPhase::Skeleton),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsBlock {
    #[serde(default)]
    pub theme_id: Option<String>,
    pub primary_color: String,
    #[serde(default = "default_true")]
    pub show_prices: bool,
    #[serde(default)]
    pub is_published: bool,
}

impl SettingsBlock {
    /// Selected theme, or `default` when none was chosen.
    pub fn theme_id_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.theme_id.as_deref().unwrap_or(default)
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.instagram.is_none() && self.telegram.is_none() && self.whatsapp.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub category_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in the smallest currency unit.
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

/// One tenant's public site configuration together with its menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RestaurantRecord {
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "SocialLinks::is_empty")]
    pub social_links: SocialLinks,
    pub settings: SettingsBlock,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl RestaurantRecord {
    /// Categories in display order, each paired with its available products.
    pub fn menu_sections(&self) -> Vec<(&Category, Vec<&Product>)> {
        let mut categories: Vec<&Category> = self.categories.iter().collect();
        categories.sort_by_key(|c| c.order);
        categories
            .into_iter()
            .map(|c| {
                let items: Vec<&Product> = self
                    .products
                    .iter()
                    .filter(|p| p.is_available && p.category_id == c.id)
                    .collect();
                (c, items)
            })
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
}

impl Default for ThemePalette {
    /// Neutral palette used when neither the selected nor the default theme is registered.
    fn default() -> Self {
        Self {
            background: "#ffffff".into(),
            primary: "#1f2937".into(),
            secondary: "#f3f4f6".into(),
            accent: "#6b7280".into(),
            text: "#111827".into(),
        }
    }
}

/// One visual template family in the theme catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeDefinition {
    pub id: String,
    pub name: String,
    pub name_en: String,
    pub description: String,
    pub colors: ThemePalette,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, order: i32) -> Category {
        Category {
            id: id.into(),
            name: format!("cat-{id}"),
            description: None,
            order,
        }
    }

    fn product(id: &str, category_id: &str, available: bool) -> Product {
        Product {
            id: id.into(),
            category_id: category_id.into(),
            name: format!("p-{id}"),
            description: None,
            price: 1000,
            image: None,
            is_available: available,
        }
    }

    #[test]
    fn phase_predecessors_form_a_chain() {
        assert_eq!(PreviewPhase::Initial.predecessor(), None);
        assert_eq!(PreviewPhase::Skeleton.predecessor(), Some(PreviewPhase::Initial));
        assert_eq!(PreviewPhase::Ready.predecessor(), Some(PreviewPhase::Skeleton));
        assert!(PreviewPhase::Initial < PreviewPhase::Skeleton);
        assert!(PreviewPhase::Skeleton < PreviewPhase::Ready);
    }

    #[test]
    fn menu_sections_sorted_and_filtered() {
        let record = RestaurantRecord {
            slug: "x".into(),
            name: "X".into(),
            description: None,
            logo: None,
            address: None,
            phone: None,
            email: None,
            social_links: SocialLinks::default(),
            settings: SettingsBlock {
                theme_id: None,
                primary_color: "#000".into(),
                show_prices: true,
                is_published: true,
            },
            categories: vec![category("b", 2), category("a", 1), category("empty", 0)],
            products: vec![
                product("1", "b", true),
                product("2", "a", true),
                product("3", "a", false),
                product("4", "empty", false),
            ],
        };
        let sections = record.menu_sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].0.id, "a");
        assert_eq!(sections[0].1.len(), 1);
        assert_eq!(sections[0].1[0].id, "2");
        assert_eq!(sections[1].0.id, "b");
    }
}
