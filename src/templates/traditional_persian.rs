use super::html::{
    contact_footer, html_escape, logo, optional_paragraph, placeholder_bars, price_tag,
};
use super::PageRenderer;
use crate::model::{RestaurantRecord, ThemePalette};

/// Framed, ornamented menu inspired by Persian tilework.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraditionalPersian;

#[derive(Debug, Clone, Copy, Default)]
pub struct TraditionalPersianSkeleton;

const ORNAMENT: &str = "<div class=\"ornament\" aria-hidden=\"true\">❖ ❖ ❖</div>";

fn style(p: &ThemePalette) -> String {
    format!(
        r#"<style>
    .traditional-persian {{ background: {bg}; color: {text}; font-family: serif; min-height: 100vh; padding: 1.5rem; }}
    .traditional-persian .frame {{ border: 3px double {accent}; padding: 1.5rem; max-width: 48rem; margin: 0 auto; background: {secondary}; }}
    .traditional-persian header {{ text-align: center; }}
    .traditional-persian h1, .traditional-persian h2 {{ color: {primary}; text-align: center; }}
    .traditional-persian .ornament {{ color: {accent}; text-align: center; letter-spacing: 0.5rem; }}
    .traditional-persian .item {{ display: grid; grid-template-columns: 1fr auto; border-bottom: 1px dotted {accent}; padding: 0.5rem 0; }}
    .traditional-persian .price {{ color: {primary}; font-weight: bold; }}
    .traditional-persian .sk {{ background: {bg}; border: 1px solid {accent}; margin: 0.5rem auto; }}
    .traditional-persian .sk.title {{ height: 2rem; width: 40%; }}
    .traditional-persian .sk.row {{ height: 1.25rem; width: 90%; }}
  </style>"#,
        bg = p.background,
        text = p.text,
        primary = p.primary,
        secondary = p.secondary,
        accent = p.accent,
    )
}

impl PageRenderer for TraditionalPersian {
    fn render(&self, restaurant: &RestaurantRecord, palette: &ThemePalette) -> String {
        let mut body = String::new();
        for (category, products) in restaurant.menu_sections() {
            body.push_str(&format!(
                "<section class=\"category\">{}<h2>{}</h2>{}",
                ORNAMENT,
                html_escape(&category.name),
                optional_paragraph("category-description", category.description.as_deref())
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
            "<main class=\"traditional-persian\">\n  {}\n  <div class=\"frame\">\n  <header>{}<h1>{}</h1>{}{}</header>\n{}{}</div></main>",
            style(palette),
            logo(restaurant),
            html_escape(&restaurant.name),
            optional_paragraph("tagline", restaurant.description.as_deref()),
            ORNAMENT,
            body,
            contact_footer(restaurant)
        )
    }
}

impl PageRenderer for TraditionalPersianSkeleton {
    fn render(&self, _restaurant: &RestaurantRecord, palette: &ThemePalette) -> String {
        let mut sections = String::new();
        for _ in 0..2 {
            sections.push_str(&format!(
                "<section>{}{}{}</section>",
                ORNAMENT,
                placeholder_bars("title", 1),
                placeholder_bars("row", 5)
            ));
        }
        format!(
            "<main class=\"traditional-persian skeleton\" aria-busy=\"true\">\n  {}\n  <div class=\"frame\"><header>{}</header>\n{}</div></main>",
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
            .find(|r| r.slug == "sonnati-house")
            .unwrap();
        r.settings.show_prices = true;
        r.products[1].is_available = false;
        r
    }

    fn palette() -> ThemePalette {
        catalog::builtin()
            .themes
            .into_iter()
            .find(|t| t.id == "traditional-persian")
            .unwrap()
            .colors
    }

    #[test]
    fn full_page_lists_available_products() {
        let r = record();
        let html = TraditionalPersian.render(&r, &palette());
        assert!(html.contains("<main class=\"traditional-persian\">"));
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
        let html = TraditionalPersian.render(&r, &palette());
        assert!(html.contains(&r.products[0].name));
        assert!(!html.contains("تومان"));
        assert!(!html.contains("class=\"price\""));
    }

    #[test]
    fn full_page_escapes_record_text() {
        let mut r = record();
        r.name = "<b>Bar & Grill</b>".into();
        let html = TraditionalPersian.render(&r, &palette());
        assert!(html.contains("&lt;b&gt;Bar &amp; Grill&lt;/b&gt;"));
        assert!(!html.contains("<b>Bar"));
    }

    #[test]
    fn skeleton_shows_no_record_content() {
        let r = record();
        let html = TraditionalPersianSkeleton.render(&r, &palette());
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
