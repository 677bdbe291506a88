//! Theme registry: the static catalog of visual template families.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::catalog::{validate_palette, CatalogError};
use crate::model::ThemeDefinition;

#[async_trait]
pub trait ThemeRepository: Send + Sync {
    async fn lookup(&self, theme_id: &str) -> Option<ThemeDefinition>;

    async fn list(&self) -> Vec<ThemeDefinition>;
}

#[derive(Debug, Clone)]
pub struct InMemoryThemes {
    themes: Vec<ThemeDefinition>,
}

impl InMemoryThemes {
    pub fn new(themes: Vec<ThemeDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for t in &themes {
            if t.id.trim().is_empty() {
                return Err(CatalogError::Empty("theme id"));
            }
            if !seen.insert(t.id.as_str()) {
                return Err(CatalogError::DuplicateTheme(t.id.clone()));
            }
            validate_palette(&t.id, &t.colors)?;
        }
        Ok(Self { themes })
    }
}

#[async_trait]
impl ThemeRepository for InMemoryThemes {
    async fn lookup(&self, theme_id: &str) -> Option<ThemeDefinition> {
        self.themes.iter().find(|t| t.id == theme_id).cloned()
    }

    async fn list(&self) -> Vec<ThemeDefinition> {
        self.themes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[tokio::test]
    async fn lookup_known_and_unknown() {
        let themes = InMemoryThemes::new(catalog::builtin().themes).unwrap();
        let t = themes.lookup("traditional-persian").await.unwrap();
        assert_eq!(t.name_en, "Traditional Persian");
        assert!(themes.lookup("vaporwave").await.is_none());
        assert_eq!(themes.list().await.len(), 3);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut defs = catalog::builtin().themes;
        defs.push(defs[0].clone());
        assert!(matches!(
            InMemoryThemes::new(defs),
            Err(CatalogError::DuplicateTheme(id)) if id == "minimal-cafe"
        ));
    }

    #[test]
    fn rejects_palette_that_escapes_style_block() {
        let mut defs = catalog::builtin().themes;
        defs[1].colors.background = "#fff}</style><script>alert(1)</script>".into();
        match InMemoryThemes::new(defs) {
            Err(CatalogError::InvalidColor { theme, field, .. }) => {
                assert_eq!(theme, "traditional-persian");
                assert_eq!(field, "background");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
