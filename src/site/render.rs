//! Static HTML rendering for the catalog page.
//!
//! Produces a single self-contained page: inline CSS, a responsive card
//! grid, lazy-loaded thumbnails that hide themselves when the image 404s.
//! Everything interpolated into markup goes through [`escape_html`].

use crate::site::catalog::CatalogCard;

const PAGE_CSS: &str = "\
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial; margin: 0; padding: 16px; background:#f6f7fb }\n\
    .container { max-width: 1200px; margin: 0 auto }\n\
    .grid { display: grid; grid-template-columns: repeat(auto-fill,minmax(260px,1fr)); gap: 12px }\n\
    .card { background: #fff; border-radius: 8px; box-shadow: 0 1px 4px rgba(12,15,20,0.06); overflow: hidden; display:flex; flex-direction:column }\n\
    .thumb { width:100%; height:200px; object-fit:cover; background:#eee; display:block }\n\
    .body { padding: 12px; flex: 1 }\n\
    .meta { font-size: 13px; color:#444; margin-top:8px }\n\
    .muted { color:#666; font-size:12px }\n\
    .top { display:flex; justify-content:space-between; gap:8px }\n\
    .title { font-weight:600 }\n\
    .badge { display:inline-block; padding:4px 8px; background:#f0f3ff; border-radius:6px; font-weight:600; font-size:12px }\n";

/// Escapes text for interpolation into HTML body or attribute positions.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the complete catalog page.
#[must_use]
pub fn render_page(cards: &[CatalogCard]) -> String {
    let card_markup: String = cards.iter().map(render_card).collect();

    format!(
        "<!doctype html>\n\
         <html>\n\
           <head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n\
             <title>Items preview</title>\n\
             <style>{PAGE_CSS}</style>\n\
           </head>\n\
           <body>\n\
             <div class=\"container\">\n\
               <h1>Items</h1>\n\
               <p class=\"muted\">Generated from the items JSON export. \
Shows skin name, base value, dg, status and image (when available).</p>\n\
               <div class=\"grid\">\n{card_markup}               </div>\n\
             </div>\n\
           </body>\n\
         </html>\n"
    )
}

fn render_card(card: &CatalogCard) -> String {
    let name = escape_html(&card.skin_name);
    let weapon = escape_html(&card.weapon);

    let thumb = card
        .image_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .map_or_else(
            || "<div class=\"thumb\"></div>".to_string(),
            |url| {
                format!(
                    "<img class=\"thumb\" src=\"{}\" alt=\"{name}\" loading=\"lazy\" \
                     onerror=\"this.style.display='none'\">",
                    escape_html(url)
                )
            },
        );

    let meta: Vec<String> = [&card.base_value, &card.dg_value, &card.status]
        .into_iter()
        .filter_map(|value| value.as_deref())
        .filter(|value| !value.is_empty())
        .map(|value| format!("<strong>{}</strong>", escape_html(value)))
        .collect();

    format!(
        "                <div class=\"card\">\n\
         \x20                 {thumb}\n\
         \x20                 <div class=\"body\">\n\
         \x20                   <div class=\"top\">\n\
         \x20                     <div class=\"title\">{}</div>\n\
         \x20                     <div class=\"badge\">{weapon}</div>\n\
         \x20                   </div>\n\
         \x20                   <div class=\"meta\">{}</div>\n\
         \x20                 </div>\n\
         \x20               </div>\n",
        if name.is_empty() { "&nbsp;" } else { &name },
        meta.join(" · ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> CatalogCard {
        CatalogCard {
            skin_name: name.to_string(),
            base_value: Some("1500".to_string()),
            dg_value: None,
            status: Some("rising".to_string()),
            image_url: None,
            weapon: "ak47".to_string(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<img src="x" onerror='pwn()'> & co"#),
            "&lt;img src=&quot;x&quot; onerror=&#x27;pwn()&#x27;&gt; &amp; co"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_render_page_contains_cards_and_escapes() {
        let html = render_page(&[card("Glo <script>")]);
        assert!(html.contains("Glo &lt;script&gt;"));
        assert!(!html.contains("Glo <script>"));
        assert!(html.contains("<div class=\"badge\">ak47</div>"));
        // Base and status joined with the separator, empty dg skipped
        assert!(html.contains("<strong>1500</strong> · <strong>rising</strong>"));
    }

    #[test]
    fn test_render_card_without_image_uses_placeholder() {
        let html = render_page(&[card("Glo")]);
        assert!(html.contains("<div class=\"thumb\"></div>"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_render_card_with_image() {
        let mut with_image = card("Glo");
        with_image.image_url = Some("https://img.test/a.png?x=1&y=2".to_string());
        let html = render_page(&[with_image]);
        assert!(html.contains("src=\"https://img.test/a.png?x=1&amp;y=2\""));
        assert!(html.contains("loading=\"lazy\""));
    }

    #[test]
    fn test_render_empty_catalog_is_valid_page() {
        let html = render_page(&[]);
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<div class=\"grid\">"));
    }
}
