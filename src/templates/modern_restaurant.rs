use super::html::{
    contact_footer, html_attr, html_escape, logo, optional_paragraph, placeholder_bars, price_tag,
};
use super::PageRenderer;
use crate::model::{RestaurantRecord, ThemePalette};

/// Dark card grid with a hero banner and category tabs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModernRestaurant;

#[derive(Debug, Clone, Copy, Default)]
pub struct ModernRestaurantSkeleton;

fn style(p: &ThemePalette) -> String {
    format!(
        r#"<style>
    .modern-restaurant {{ background: {bg}; color: {text}; font-family: sans-serif; min-height: 100vh; }}
    .modern-restaurant .hero {{ background: {primary}; padding: 3rem 1.5rem; text-align: center; }}
    .modern-restaurant nav {{ display: flex; gap: 0.75rem; overflow-x: auto; padding: 1rem 1.5rem; }}
    .modern-restaurant nav a {{ color: {accent}; text-decoration: none; white-space: nowrap; }}
    .modern-restaurant .grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); gap: 1rem; padding: 0 1.5rem 1.5rem; }}
    .modern-restaurant .card {{ background: {secondary}; border-radius: 0.75rem; overflow: hidden; padding: 1rem; }}
    .modern-restaurant .card img {{ width: 100%; aspect-ratio: 4 / 3; object-fit: cover; }}
    .modern-restaurant .price {{ color: {accent}; font-weight: bold; }}
    .modern-restaurant .sk {{ background: {secondary}; border-radius: 0.75rem; }}
    .modern-restaurant .sk.hero {{ height: 10rem; border-radius: 0; }}
    .modern-restaurant .sk.tab {{ height: 1.5rem; width: 5rem; }}
    .modern-restaurant .sk.card {{ height: 14rem; }}
  </style>"#,
        bg = p.background,
        text = p.text,
        primary = p.primary,
        secondary = p.secondary,
        accent = p.accent,
    )
}

impl PageRenderer for ModernRestaurant {
    fn render(&self, restaurant: &RestaurantRecord, palette: &ThemePalette) -> String {
        let sections = restaurant.menu_sections();

        let tabs: String = sections
            .iter()
            .map(|(c, _)| {
                format!(
                    "<a href=\"#cat-{}\">{}</a>",
                    html_attr(&c.id),
                    html_escape(&c.name)
                )
            })
            .collect();

        let mut body = String::new();
        for (category, products) in &sections {
            body.push_str(&format!(
                "<section id=\"cat-{}\"><h2>{}</h2><div class=\"grid\">",
                html_attr(&category.id),
                html_escape(&category.name)
            ));
            for product in products {
                let image = product
                    .image
                    .as_deref()
                    .map(|src| {
                        format!(
                            "<img src=\"{}\" alt=\"{}\" />",
                            html_attr(src),
                            html_attr(&product.name)
                        )
                    })
                    .unwrap_or_default();
                body.push_str(&format!(
                    "<article class=\"card\">{}<h3>{}</h3>{}{}</article>",
                    image,
                    html_escape(&product.name),
                    optional_paragraph("description", product.description.as_deref()),
                    price_tag(restaurant, product)
                ));
            }
            body.push_str("</div></section>\n");
        }

        format!(
            "<main class=\"modern-restaurant\">\n  {}\n  <header class=\"hero\">{}<h1>{}</h1>{}</header>\n  <nav>{}</nav>\n{}{}</main>",
            style(palette),
            logo(restaurant),
            html_escape(&restaurant.name),
            optional_paragraph("tagline", restaurant.description.as_deref()),
            tabs,
            body,
            contact_footer(restaurant)
        )
    }
}

impl PageRenderer for ModernRestaurantSkeleton {
    fn render(&self, _restaurant: &RestaurantRecord, palette: &ThemePalette) -> String {
        format!(
            "<main class=\"modern-restaurant skeleton\" aria-busy=\"true\">\n  {}\n  {}\n  <nav>{}</nav>\n  <div class=\"grid\">{}</div></main>",
            style(palette),
            placeholder_bars("hero", 1),
            placeholder_bars("tab", 4),
            placeholder_bars("card", 6)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn record() -> RestaurantRecord {
        let mut r = catalog::builtin()
            .restaurants
            .into_iter()
            .find(|r| r.slug == "urban-grill")
            .unwrap();
        r.settings.show_prices = true;
        r.products[1].is_available = false;
        r
    }

    fn palette() -> ThemePalette {
        catalog::builtin()
            .themes
            .into_iter()
            .find(|t| t.id == "modern-restaurant")
            .unwrap()
            .colors
    }

    #[test]
    fn full_page_lists_available_products() {
        let r = record();
        let html = ModernRestaurant.render(&r, &palette());
        assert!(html.contains("<main class=\"modern-restaurant\">"));
        assert!(html.contains(&r.name));
        assert!(html.contains(&r.products[0].name));
        assert!(!html.contains(&r.products[1].name));
        assert!(html.contains("تومان"));
        assert!(html.contains(&palette().background));
    }

    #[test]
    fn full_page_hides_prices_when_disabled() {
        let mut r = record();
        r.settings.show_prices = false;
        let html = ModernRestaurant.render(&r, &palette());
        assert!(html.contains(&r.products[0].name));
        assert!(!html.contains("تومان"));
        assert!(!html.contains("class=\"price\""));
    }

    #[test]
    fn full_page_escapes_record_text() {
        let mut r = record();
        r.name = "<b>Bar & Grill</b>".into();
        let html = ModernRestaurant.render(&r, &palette());
        assert!(html.contains("&lt;b&gt;Bar &amp; Grill&lt;/b&gt;"));
        assert!(!html.contains("<b>Bar"));
    }

    #[test]
    fn skeleton_shows_no_record_content() {
        let r = record();
        let html = ModernRestaurantSkeleton.render(&r, &palette());
        assert!(html.contains("aria-busy=\"true\""));
        assert!(!html.contains(&r.name));
        for p in &r.products {
            assert!(!html.contains(&p.name));
        }
        for c in &r.categories {
            assert!(!html.contains(&c.name));
        }
    }
}
