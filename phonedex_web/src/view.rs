//! Server-side rendering of the search page.

use phonedex_core::{ResultRecord, SearchParams, WishlistEntry};

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const STYLE: &str = "\
body{font-family:sans-serif;margin:2rem;max-width:72rem}\
form{display:flex;gap:.5rem;flex-wrap:wrap;margin-bottom:1.5rem}\
table{border-collapse:collapse;width:100%}\
td,th{border-bottom:1px solid #ddd;padding:.4rem;text-align:left}\
img{max-height:4rem}\
.empty{color:#777}";

const SCRIPT: &str = "\
async function postWishlist(path, body) {\
  const res = await fetch(path, {method: 'POST', headers: {'Content-Type': 'application/json'}, body: JSON.stringify(body)});\
  if (res.ok) { window.location.reload(); }\
}\
document.querySelectorAll('button[data-add]').forEach(b => b.addEventListener('click', () =>\
  postWishlist('/add_to_wishlist', {phone: b.dataset.phone, imageURL: b.dataset.image})));\
document.querySelectorAll('button[data-remove]').forEach(b => b.addEventListener('click', () =>\
  postWishlist('/remove_from_wishlist', {phone: b.dataset.phone})));";

fn input(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<label>{label} <input name="{name}" value="{}"></label>"#,
        escape_html(value)
    )
}

fn image_cell(url: &str) -> String {
    if url.is_empty() {
        String::new()
    } else {
        format!(r#"<img src="{}" alt="">"#, escape_html(url))
    }
}

fn results_section(results: &[ResultRecord]) -> String {
    if results.is_empty() {
        return r#"<p class="empty">No phones to show.</p>"#.to_string();
    }

    let mut html = String::from(
        "<table><thead><tr><th></th><th>Phone</th><th>Processor</th><th>RAM (GB)</th>\
         <th>Storage</th><th>Price</th><th></th></tr></thead><tbody>",
    );
    for result in results {
        let phone = escape_html(&result.phone);
        let image = escape_html(&result.image_url);
        html.push_str(&format!(
            r#"<tr><td>{}</td><td>{phone}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><button data-add data-phone="{phone}" data-image="{image}">Add to wishlist</button></td></tr>"#,
            image_cell(&result.image_url),
            escape_html(&result.processor),
            result.ram,
            escape_html(&result.rom),
            escape_html(&result.price),
        ));
    }
    html.push_str("</tbody></table>");
    html
}

fn wishlist_section(wishlist: &[WishlistEntry]) -> String {
    if wishlist.is_empty() {
        return r#"<p class="empty">Your wishlist is empty.</p>"#.to_string();
    }

    let mut html = String::from("<ul>");
    for entry in wishlist {
        let phone = escape_html(&entry.phone);
        html.push_str(&format!(
            r#"<li>{} {phone} <button data-remove data-phone="{phone}">Remove</button></li>"#,
            image_cell(&entry.image_url),
        ));
    }
    html.push_str("</ul>");
    html
}

/// Full page: the search form echoing `params`, the results, and the wishlist.
#[must_use]
pub fn render_page(
    params: &SearchParams,
    results: &[ResultRecord],
    wishlist: &[WishlistEntry],
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Phone Finder</title><style>{STYLE}</style></head>
<body>
<h1>Phone Finder</h1>
<form action="/search" method="get">
{}
{}
{}
{}
<button type="submit">Search</button>
</form>
<h2>Results</h2>
{}
<h2>Wishlist</h2>
{}
<script>{SCRIPT}</script>
</body>
</html>
"#,
        input("brand", "Brand", &params.brand),
        input("max_budget", "Max budget", &params.max_budget),
        input("min_ram", "Min RAM (GB)", &params.min_ram),
        input("min_rom", "Min storage (GB)", &params.min_rom),
        results_section(results),
        wishlist_section(wishlist),
    )
}
