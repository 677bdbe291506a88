use super::html::{
    contact_footer, html_escape, logo, optional_paragraph, placeholder_bars, price_tag,
};
use super::PageRenderer;
use crate::model::{RestaurantRecord, ThemePalette};

/// Light single-column menu with centered header.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalCafe;

#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalCafeSkeleton;

fn style(p: &ThemePalette) -> String {
    format!(
        r#"<style>
    .minimal-cafe {{ background: {bg}; color: {text}; font-family: sans-serif; min-height: 100vh; max-width: 40rem; margin: 0 auto; padding: 2rem 1rem; }}
    .minimal-cafe header {{ text-align: center; margin-bottom: 2rem; }}
    .minimal-cafe h1 {{ color: {primary}; margin: 0.5rem 0; }}
    .minimal-cafe h2 {{ border-bottom: 1px solid {secondary}; padding-bottom: 0.25rem; color: {primary}; }}
    .minimal-cafe .item {{ display: flex; justify-content: space-between; gap: 1rem; padding: 0.5rem 0; }}
    .minimal-cafe .price {{ color: {accent}; white-space: nowrap; }}
    .minimal-cafe .sk {{ background: {secondary}; border-radius: 0.25rem; margin: 0.5rem auto; }}
    .minimal-cafe .sk.title {{ height: 2rem; width: 50%; }}
    .minimal-cafe .sk.line {{ height: 1rem; width: 100%; }}
  </style>"#,
        bg = p.background,
        text = p.text,
        primary = p.primary,
        secondary = p.secondary,
        accent = p.accent,
    )
}

impl PageRenderer for MinimalCafe {
    fn render(&self, restaurant: &RestaurantRecord, palette: &ThemePalette) -> String {
        let mut body = String::new();
        for (category, products) in restaurant.menu_sections() {
            body.push_str(&format!(
                "<section class=\"category\"><h2>{}</h2>",
                html_escape(&category.name)
            ));
            for product in products {
                body.push_str(&format!(
                    "<div class=\"item\"><div><h3>{}</h3>{}</div>{}</div>",
                    html_escape(&product.name),
                    optional_paragraph("description", product.description.as_deref()),
                    price_tag(restaurant, product)
                ));
            }
            body.push_str("</section>\n");
        }

        format!(
            "<main class=\"minimal-cafe\">\n  {}\n  <header>{}<h1>{}</h1>{}</header>\n{}{}</main>",
            style(palette),
            logo(restaurant),
            html_escape(&restaurant.name),
            optional_paragraph("tagline", restaurant.description.as_deref()),
            body,
            contact_footer(restaurant)
        )
    }
}

impl PageRenderer for MinimalCafeSkeleton {
    fn render(&self, _restaurant: &RestaurantRecord, palette: &ThemePalette) -> String {
        let mut sections = String::new();
        for _ in 0..3 {
            sections.push_str(&format!(
                "<section>{}{}</section>",
                placeholder_bars("title", 1),
                placeholder_bars("line", 4)
            ));
        }
        format!(
            "<main class=\"minimal-cafe skeleton\" aria-busy=\"true\">\n  {}\n  <header>{}</header>\n{}</main>",
            style(palette),
            placeholder_bars("title", 1),
            sections
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
            .find(|r| r.slug == "demo-cafe")
            .unwrap();
        r.settings.show_prices = true;
        r.products[1].is_available = false;
        r
    }

    fn palette() -> ThemePalette {
        catalog::builtin()
            .themes
            .into_iter()
            .find(|t| t.id == "minimal-cafe")
            .unwrap()
            .colors
    }

    #[test]
    fn full_page_lists_available_products() {
        let r = record();
        let html = MinimalCafe.render(&r, &palette());
        assert!(html.contains("<main class=\"minimal-cafe\">"));
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
        let html = MinimalCafe.render(&r, &palette());
        assert!(html.contains(&r.products[0].name));
        assert!(!html.contains("تومان"));
        assert!(!html.contains("class=\"price\""));
    }

    #[test]
    fn full_page_escapes_record_text() {
        let mut r = record();
        r.name = "<b>Bar & Grill</b>".into();
        let html = MinimalCafe.render(&r, &palette());
        assert!(html.contains("&lt;b&gt;Bar &amp; Grill&lt;/b&gt;"));
        assert!(!html.contains("<b>Bar"));
    }

    #[test]
    fn skeleton_shows_no_record_content() {
        let r = record();
        let html = MinimalCafeSkeleton.render(&r, &palette());
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
