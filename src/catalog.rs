//! Restaurant and theme catalog: built-in sample data and YAML seed files.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::directory::InMemoryRestaurants;
use crate::model::{
    Category, Product, RestaurantRecord, SettingsBlock, SocialLinks, ThemeDefinition,
    ThemePalette,
};
use crate::themes::InMemoryThemes;

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));

/// Hex colors (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) or a bare CSS color keyword.
static COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|[a-zA-Z]+)$")
        .expect("valid color regex")
});

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("catalog has no {0}")]
    Empty(&'static str),
    #[error("duplicate restaurant slug: {0}")]
    DuplicateSlug(String),
    #[error("slug is not URL-safe: {0:?}")]
    InvalidSlug(String),
    #[error("duplicate theme id: {0}")]
    DuplicateTheme(String),
    #[error("theme {theme} has invalid {field} color: {value:?}")]
    InvalidColor {
        theme: String,
        field: &'static str,
        value: String,
    },
}

pub fn validate_slug(slug: &str) -> Result<(), CatalogError> {
    if SLUG_RE.is_match(slug) {
        Ok(())
    } else {
        Err(CatalogError::InvalidSlug(slug.to_string()))
    }
}

/// Reject palettes whose values are not plain color tokens; they are
/// interpolated into inline `<style>` blocks.
pub fn validate_palette(theme_id: &str, palette: &ThemePalette) -> Result<(), CatalogError> {
    let fields = [
        ("background", &palette.background),
        ("primary", &palette.primary),
        ("secondary", &palette.secondary),
        ("accent", &palette.accent),
        ("text", &palette.text),
    ];
    for (field, value) in fields {
        if !COLOR_RE.is_match(value) {
            return Err(CatalogError::InvalidColor {
                theme: theme_id.to_string(),
                field,
                value: value.clone(),
            });
        }
    }
    Ok(())
}

/// Seed file layout: a theme list followed by a restaurant list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seed {
    #[serde(default)]
    pub themes: Vec<ThemeDefinition>,
    pub restaurants: Vec<RestaurantRecord>,
}

impl Seed {
    /// Fill in a missing theme selection with `default_theme`.
    pub fn normalize(&mut self, default_theme: &str) {
        for r in &mut self.restaurants {
            if r.settings.theme_id.as_deref().map_or(true, |t| t.trim().is_empty()) {
                r.settings.theme_id = Some(default_theme.to_string());
            }
        }
    }

    /// Build the two read-only repositories, warning about restaurants whose
    /// theme is not in the catalog (they render with the default family).
    pub fn into_repositories(
        mut self,
        default_theme: &str,
    ) -> Result<(InMemoryRestaurants, InMemoryThemes), CatalogError> {
        self.normalize(default_theme);
        for r in &self.restaurants {
            let theme = r.settings.theme_id_or(default_theme);
            if !self.themes.iter().any(|t| t.id == theme) {
                warn!(slug = %r.slug, theme, "restaurant references unknown theme");
            }
        }
        let themes = InMemoryThemes::new(self.themes)?;
        let restaurants = InMemoryRestaurants::new(self.restaurants)?;
        Ok((restaurants, themes))
    }
}

/// Load a seed file. Themes omitted from the file are taken from the built-in catalog.
pub fn load_seed(path: &Path) -> Result<Seed, CatalogError> {
    let content = fs::read_to_string(path)?;
    let mut seed: Seed = serde_yaml::from_str(&content)?;
    if seed.themes.is_empty() {
        seed.themes = builtin_themes();
    }
    info!(
        path = %path.display(),
        restaurants = seed.restaurants.len(),
        themes = seed.themes.len(),
        "loaded catalog seed"
    );
    Ok(seed)
}

/// Built-in sample catalog.
pub fn builtin() -> Seed {
    Seed {
        themes: builtin_themes(),
        restaurants: builtin_restaurants(),
    }
}

fn palette(
    background: &str,
    primary: &str,
    secondary: &str,
    accent: &str,
    text: &str,
) -> ThemePalette {
    ThemePalette {
        background: background.into(),
        primary: primary.into(),
        secondary: secondary.into(),
        accent: accent.into(),
        text: text.into(),
    }
}

fn builtin_themes() -> Vec<ThemeDefinition> {
    vec![
        ThemeDefinition {
            id: "minimal-cafe".into(),
            name: "کافه مینیمال".into(),
            name_en: "Minimal Cafe".into(),
            description: "طراحی ساده و مدرن با تمرکز بر محصولات".into(),
            colors: palette("#faf8f5", "#3d2c1e", "#efe6da", "#c08552", "#2b2118"),
            is_new: false,
            is_premium: false,
            preview: Some("/themes/minimal-cafe.png".into()),
        },
        ThemeDefinition {
            id: "traditional-persian".into(),
            name: "سنتی ایرانی".into(),
            name_en: "Traditional Persian".into(),
            description: "الهام گرفته از معماری و هنر ایرانی".into(),
            colors: palette("#fdf6e3", "#1e3a5f", "#f4e4c1", "#b8860b", "#2c1810"),
            is_new: true,
            is_premium: false,
            preview: Some("/themes/traditional-persian.png".into()),
        },
        ThemeDefinition {
            id: "modern-restaurant".into(),
            name: "رستوران مدرن".into(),
            name_en: "Modern Restaurant".into(),
            description: "طراحی تیره و لوکس برای رستوران‌های مدرن".into(),
            colors: palette("#0f0f0f", "#e63946", "#1d1d1d", "#f1c40f", "#f5f5f5"),
            is_new: false,
            is_premium: true,
            preview: Some("/themes/modern-restaurant.png".into()),
        },
    ]
}

fn category(id: &str, name: &str, order: i32) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        description: None,
        order,
    }
}

fn product(id: &str, category_id: &str, name: &str, description: &str, price: u64) -> Product {
    Product {
        id: id.into(),
        category_id: category_id.into(),
        name: name.into(),
        description: Some(description.into()),
        price,
        image: None,
        is_available: true,
    }
}

fn builtin_restaurants() -> Vec<RestaurantRecord> {
    let mut unavailable = product("p5", "c2", "کیک شکلاتی", "کیک خیس شکلاتی", 95_000);
    unavailable.is_available = false;

    vec![
        RestaurantRecord {
            slug: "demo-cafe".into(),
            name: "کافه دمو".into(),
            description: Some("بهترین قهوه و کیک‌های خانگی در قلب شهر".into()),
            logo: None,
            address: Some("تهران، خیابان ولیعصر، پلاک ۱۲۳".into()),
            phone: Some("021-12345678".into()),
            email: Some("info@democafe.ir".into()),
            social_links: SocialLinks {
                instagram: Some("democafe".into()),
                telegram: Some("democafe".into()),
                whatsapp: None,
            },
            settings: SettingsBlock {
                theme_id: Some("minimal-cafe".into()),
                primary_color: "#c08552".into(),
                show_prices: true,
                is_published: true,
            },
            categories: vec![
                category("c1", "نوشیدنی‌های گرم", 1),
                category("c2", "کیک و دسر", 2),
                category("c3", "نوشیدنی‌های سرد", 3),
            ],
            products: vec![
                product("p1", "c1", "اسپرسو", "قهوه اسپرسو دبل با دانه عربیکا", 65_000),
                product("p2", "c1", "کاپوچینو", "اسپرسو با شیر بخار داده شده و فوم", 85_000),
                product("p3", "c1", "چای ماسالا", "چای سیاه با ادویه‌های هندی و شیر", 70_000),
                product("p4", "c2", "چیزکیک", "چیزکیک نیویورکی با سس توت‌فرنگی", 110_000),
                unavailable,
                product("p6", "c3", "آیس لاته", "اسپرسو با شیر سرد و یخ", 90_000),
            ],
        },
        RestaurantRecord {
            slug: "sonnati-house".into(),
            name: "سفره‌خانه سنتی".into(),
            description: Some("طعم اصیل غذاهای ایرانی".into()),
            logo: None,
            address: Some("اصفهان، میدان نقش جهان".into()),
            phone: Some("031-87654321".into()),
            email: None,
            social_links: SocialLinks::default(),
            settings: SettingsBlock {
                theme_id: Some("traditional-persian".into()),
                primary_color: "#1e3a5f".into(),
                show_prices: true,
                is_published: true,
            },
            categories: vec![category("k1", "غذای اصلی", 1), category("k2", "پیش‌غذا", 0)],
            products: vec![
                product("q1", "k1", "چلوکباب کوبیده", "دو سیخ کوبیده با برنج ایرانی", 320_000),
                product("q2", "k1", "دیزی سنگی", "آبگوشت سنتی در ظرف سنگی", 280_000),
                product("q3", "k2", "کشک بادمجان", "بادمجان کبابی با کشک و نعناع داغ", 140_000),
            ],
        },
        RestaurantRecord {
            slug: "urban-grill".into(),
            name: "اربن گریل".into(),
            description: Some("استیک و برگر با مواد اولیه تازه".into()),
            logo: None,
            address: None,
            phone: None,
            email: None,
            social_links: SocialLinks {
                instagram: Some("urbangrill".into()),
                telegram: None,
                whatsapp: Some("+989120000000".into()),
            },
            settings: SettingsBlock {
                theme_id: Some("modern-restaurant".into()),
                primary_color: "#e63946".into(),
                show_prices: false,
                is_published: false,
            },
            categories: vec![category("g1", "برگر", 1), category("g2", "استیک", 2)],
            products: vec![
                product("r1", "g1", "چیزبرگر", "۲۰۰ گرم گوشت گوساله با پنیر چدار", 260_000),
                product("r2", "g2", "ریب‌آی", "استیک ریب‌آی ۳۰۰ گرمی", 890_000),
            ],
        },
    ]
}
