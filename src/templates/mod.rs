//! Template selection: a capability table from theme id to renderer family.
//!
//! Every family has a full renderer and a skeleton renderer. One family is the
//! designated default and is always present, so [`TemplateRegistry::select`]
//! is total: ids outside the table resolve to the default family.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::model::{RestaurantRecord, ThemePalette};
use crate::themes::ThemeRepository;

pub mod html;
mod minimal_cafe;
mod modern_restaurant;
mod traditional_persian;

pub use minimal_cafe::{MinimalCafe, MinimalCafeSkeleton};
pub use modern_restaurant::{ModernRestaurant, ModernRestaurantSkeleton};
pub use traditional_persian::{TraditionalPersian, TraditionalPersianSkeleton};

pub const MINIMAL_CAFE: &str = "minimal-cafe";
pub const TRADITIONAL_PERSIAN: &str = "traditional-persian";
pub const MODERN_RESTAURANT: &str = "modern-restaurant";

/// Produces an HTML fragment for one restaurant under one palette.
pub trait PageRenderer: Send + Sync {
    fn render(&self, restaurant: &RestaurantRecord, palette: &ThemePalette) -> String;
}

#[derive(Clone)]
pub struct TemplateFamily {
    pub full: Arc<dyn PageRenderer>,
    pub skeleton: Arc<dyn PageRenderer>,
}

impl TemplateFamily {
    pub fn new(
        full: impl PageRenderer + 'static,
        skeleton: impl PageRenderer + 'static,
    ) -> Self {
        Self {
            full: Arc::new(full),
            skeleton: Arc::new(skeleton),
        }
    }

    /// True when both members are the same renderer instances as `other`'s.
    pub fn same_as(&self, other: &TemplateFamily) -> bool {
        Arc::ptr_eq(&self.full, &other.full) && Arc::ptr_eq(&self.skeleton, &other.skeleton)
    }
}

impl fmt::Debug for TemplateFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateFamily").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    default_id: String,
    default: TemplateFamily,
    families: HashMap<String, TemplateFamily>,
}

impl TemplateRegistry {
    pub fn new(default_id: impl Into<String>, default: TemplateFamily) -> Self {
        Self {
            default_id: default_id.into(),
            default,
            families: HashMap::new(),
        }
    }

    /// The three bundled families, with `minimal-cafe` as the default.
    pub fn builtin() -> Self {
        let mut reg = Self::new(
            MINIMAL_CAFE,
            TemplateFamily::new(MinimalCafe, MinimalCafeSkeleton),
        );
        reg.register(
            TRADITIONAL_PERSIAN,
            TemplateFamily::new(TraditionalPersian, TraditionalPersianSkeleton),
        );
        reg.register(
            MODERN_RESTAURANT,
            TemplateFamily::new(ModernRestaurant, ModernRestaurantSkeleton),
        );
        reg
    }

    /// Add or replace a family. Registering under the default id replaces the default.
    pub fn register(
        &mut self,
        theme_id: impl Into<String>,
        family: TemplateFamily,
    ) -> Option<TemplateFamily> {
        let theme_id = theme_id.into();
        if theme_id == self.default_id {
            return Some(std::mem::replace(&mut self.default, family));
        }
        self.families.insert(theme_id, family)
    }

    /// Make an already registered family the default. Returns false if `theme_id` is unknown.
    pub fn set_default(&mut self, theme_id: &str) -> bool {
        if theme_id == self.default_id {
            return true;
        }
        let Some(family) = self.families.remove(theme_id) else {
            return false;
        };
        let old = std::mem::replace(&mut self.default, family);
        let old_id = std::mem::replace(&mut self.default_id, theme_id.to_string());
        self.families.insert(old_id, old);
        true
    }

    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    pub fn contains(&self, theme_id: &str) -> bool {
        theme_id == self.default_id || self.families.contains_key(theme_id)
    }

    /// The id of the family that `select(theme_id)` returns.
    pub fn effective_id<'a>(&'a self, theme_id: &'a str) -> &'a str {
        if self.contains(theme_id) {
            theme_id
        } else {
            &self.default_id
        }
    }

    pub fn select(&self, theme_id: &str) -> &TemplateFamily {
        if theme_id == self.default_id {
            return &self.default;
        }
        match self.families.get(theme_id) {
            Some(family) => family,
            None => {
                debug!(theme_id, default = %self.default_id, "unknown theme; using default family");
                &self.default
            }
        }
    }

    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.families.keys().map(String::as_str).collect();
        ids.push(&self.default_id);
        ids.sort_unstable();
        ids
    }
}

/// Palette for `theme_id`, falling back to the default theme's palette and then
/// to the neutral built-in palette.
pub async fn resolve_palette(
    themes: &dyn ThemeRepository,
    theme_id: &str,
    default_id: &str,
) -> ThemePalette {
    if let Some(theme) = themes.lookup(theme_id).await {
        return theme.colors;
    }
    if let Some(theme) = themes.lookup(default_id).await {
        return theme.colors;
    }
    ThemePalette::default()
}

/// Theme-independent splash shown before the skeleton.
pub fn render_loading() -> String {
    r#"<div class="loading" role="status" aria-live="polite">
  <style>
    .loading { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; background: #ffffff; color: #6b7280; font-family: sans-serif; }
    .loading .spinner { width: 3rem; height: 3rem; border: 4px solid #e5e7eb; border-top-color: #111827; border-radius: 50%; animation: spin 0.8s linear infinite; }
    @keyframes spin { to { transform: rotate(360deg); } }
  </style>
  <div class="spinner"></div>
  <p>در حال بارگذاری...</p>
</div>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::themes::InMemoryThemes;

    #[test]
    fn known_ids_select_their_family() {
        let reg = TemplateRegistry::builtin();
        assert_eq!(reg.ids(), vec![MINIMAL_CAFE, MODERN_RESTAURANT, TRADITIONAL_PERSIAN]);
        let trad = reg.select(TRADITIONAL_PERSIAN);
        assert!(!trad.same_as(reg.select(MINIMAL_CAFE)));
        assert!(trad.same_as(reg.select(TRADITIONAL_PERSIAN)));
    }

    #[test]
    fn unknown_ids_select_default_family() {
        let reg = TemplateRegistry::builtin();
        let default = reg.select(MINIMAL_CAFE);
        for id in ["", "vaporwave", "Minimal-Cafe", "modern-restaurant "] {
            assert!(reg.select(id).same_as(default), "{id:?}");
            assert_eq!(reg.effective_id(id), MINIMAL_CAFE);
        }
    }

    #[test]
    fn register_adds_theme_as_data() {
        let mut reg = TemplateRegistry::builtin();
        assert!(!reg.contains("retro-diner"));
        let family = TemplateFamily::new(ModernRestaurant, MinimalCafeSkeleton);
        assert!(reg.register("retro-diner", family.clone()).is_none());
        assert!(reg.select("retro-diner").same_as(&family));
        assert!(reg.register("retro-diner", family).is_some());
    }

    #[test]
    fn set_default_swaps_fallback() {
        let mut reg = TemplateRegistry::builtin();
        assert!(!reg.set_default("nope"));
        assert!(reg.set_default(MODERN_RESTAURANT));
        assert_eq!(reg.default_id(), MODERN_RESTAURANT);
        assert!(reg.select("unknown").same_as(reg.select(MODERN_RESTAURANT)));
        // the previous default stays selectable by id
        assert!(reg.contains(MINIMAL_CAFE));
        assert!(!reg.select(MINIMAL_CAFE).same_as(reg.select(MODERN_RESTAURANT)));
        assert_eq!(reg.ids().len(), 3);
    }

    #[tokio::test]
    async fn palette_fallback_chain() {
        let themes = InMemoryThemes::new(catalog::builtin().themes).unwrap();
        let modern = resolve_palette(&themes, MODERN_RESTAURANT, MINIMAL_CAFE).await;
        assert_eq!(modern.background, "#0f0f0f");
        let fallback = resolve_palette(&themes, "vaporwave", MINIMAL_CAFE).await;
        assert_eq!(fallback.background, "#faf8f5");
        let neutral = resolve_palette(&themes, "vaporwave", "also-missing").await;
        assert_eq!(neutral, ThemePalette::default());
    }

    #[test]
    fn loading_view_is_theme_independent() {
        assert_eq!(render_loading(), render_loading());
        assert!(render_loading().contains("role=\"status\""));
    }
}
