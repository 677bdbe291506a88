//! Small HTML building helpers shared by the bundled templates.

use crate::metadata::PageMetadata;
use crate::model::{Product, RestaurantRecord};

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn html_attr(s: &str) -> String {
    html_escape(s).replace('"', "&quot;")
}

/// `65000` -> `65,000 تومان`
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{} تومان", out)
}

/// Price markup, or nothing when the restaurant hides prices.
pub fn price_tag(restaurant: &RestaurantRecord, product: &Product) -> String {
    if restaurant.settings.show_prices {
        format!("<span class=\"price\">{}</span>", format_price(product.price))
    } else {
        String::new()
    }
}

pub fn optional_paragraph(class: &str, text: Option<&str>) -> String {
    match text {
        Some(t) if !t.trim().is_empty() => {
            format!("<p class=\"{}\">{}</p>", class, html_escape(t))
        }
        _ => String::new(),
    }
}

pub fn logo(restaurant: &RestaurantRecord) -> String {
    match &restaurant.logo {
        Some(src) => format!(
            "<img class=\"logo\" src=\"{}\" alt=\"{}\" />",
            html_attr(src),
            html_attr(&restaurant.name)
        ),
        None => String::new(),
    }
}

/// Contact and social links footer.
pub fn contact_footer(restaurant: &RestaurantRecord) -> String {
    let mut items = Vec::new();
    if let Some(a) = &restaurant.address {
        items.push(format!("<li class=\"address\">{}</li>", html_escape(a)));
    }
    if let Some(p) = &restaurant.phone {
        items.push(format!(
            "<li class=\"phone\"><a href=\"tel:{}\">{}</a></li>",
            html_attr(p),
            html_escape(p)
        ));
    }
    if let Some(e) = &restaurant.email {
        items.push(format!(
            "<li class=\"email\"><a href=\"mailto:{}\">{}</a></li>",
            html_attr(e),
            html_escape(e)
        ));
    }
    let social = &restaurant.social_links;
    if let Some(handle) = &social.instagram {
        items.push(format!(
            "<li class=\"instagram\"><a href=\"https://instagram.com/{}\">Instagram</a></li>",
            html_attr(handle)
        ));
    }
    if let Some(handle) = &social.telegram {
        items.push(format!(
            "<li class=\"telegram\"><a href=\"https://t.me/{}\">Telegram</a></li>",
            html_attr(handle)
        ));
    }
    if let Some(number) = &social.whatsapp {
        items.push(format!(
            "<li class=\"whatsapp\"><a href=\"https://wa.me/{}\">WhatsApp</a></li>",
            html_attr(number.trim_start_matches('+'))
        ));
    }
    if items.is_empty() {
        return String::new();
    }
    format!("<footer><ul class=\"contact\">{}</ul></footer>", items.join(""))
}

/// `count` grey placeholder bars of the given class.
pub fn placeholder_bars(class: &str, count: usize) -> String {
    (0..count)
        .map(|_| format!("<div class=\"sk {}\"></div>", class))
        .collect::<Vec<_>>()
        .join("")
}

/// Wrap a rendered fragment into a standalone RTL document.
pub fn page(meta: &PageMetadata, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="fa" dir="rtl">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="theme-color" content="{}">
    <meta name="description" content="{}">
    <title>{}</title>
  </head>
  <body>
{}
  </body>
</html>"#,
        html_attr(&meta.theme_color),
        html_attr(&meta.description),
        html_escape(&meta.title),
        body
    )
}
