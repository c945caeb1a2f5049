//! Server-side HTML rendering. Every page is a plain string assembled around
//! a shared layout and returned through axum's `Html` response type.

pub mod category;
pub mod instance;
pub mod item;
pub mod order;

use crate::logic::ValidationError;
use crate::model::Category;

/// Replace the characters HTML treats specially.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn layout(title: &str, body: &str) -> String {
    let title = escape(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Stockroom</title>
    <style>
        body {{ font-family: sans-serif; margin: 0; display: flex; }}
        nav {{ min-width: 12rem; padding: 1rem; background: #fafafa; }}
        nav a {{ display: block; margin-bottom: .5rem; }}
        main {{ padding: 1rem 2rem; }}
        ul.errors {{ color: #b00020; }}
        label {{ display: block; margin-top: .5rem; }}
    </style>
</head>
<body>
    <nav>
        <a href="/inventory">Home</a>
        <a href="/inventory/categories">Categories</a>
        <a href="/inventory/items">Items</a>
        <a href="/inventory/iteminstances">Item Instances</a>
        <a href="/inventory/orders">Orders</a>
        <a href="/inventory/category/create">Create Category</a>
        <a href="/inventory/item/create">Create Item</a>
        <a href="/inventory/iteminstance/create">Create Item Instance</a>
        <a href="/inventory/order/create">Create Order</a>
    </nav>
    <main>
{body}    </main>
</body>
</html>
"#
    )
}

pub fn errors_block(errors: &[ValidationError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut block = String::from("<ul class=\"errors\">\n");
    for error in errors {
        block.push_str(&format!("    <li>{}</li>\n", escape(&error.to_string())));
    }
    block.push_str("</ul>\n");
    block
}

pub fn home_page(categories: &[Category], search: Option<&str>, error: Option<&str>) -> String {
    let mut body = String::from("<h1>Stockroom</h1>\n");
    body.push_str("<p>Browse the inventory by category, or search for one.</p>\n");
    body.push_str("<form method=\"post\" action=\"/\">\n");
    body.push_str(&format!(
        "    <input type=\"text\" name=\"category\" placeholder=\"Search categories\" value=\"{}\">\n",
        escape(search.unwrap_or(""))
    ));
    body.push_str("    <button type=\"submit\">Search</button>\n</form>\n");
    if let Some(error) = error {
        body.push_str(&format!(
            "<ul class=\"errors\">\n    <li>{}</li>\n</ul>\n",
            escape(error)
        ));
    }
    if !categories.is_empty() {
        body.push_str("<ul>\n");
        for category in categories {
            body.push_str(&format!(
                "    <li><a href=\"{}\">{}</a>: {}</li>\n",
                category.url(),
                escape(&category.name),
                escape(&category.description)
            ));
        }
        body.push_str("</ul>\n");
    }
    layout("Home", &body)
}

pub fn not_found_page(message: &str) -> String {
    layout(
        "Not Found",
        &format!("<h1>Not Found</h1>\n<p>{}</p>\n", escape(message)),
    )
}

pub fn error_page(message: &str) -> String {
    layout(
        "Error",
        &format!("<h1>Something went wrong</h1>\n<p>{}</p>\n", escape(message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<b>"Bob's" & Co</b>"#),
            "&lt;b&gt;&quot;Bob&#39;s&quot; &amp; Co&lt;/b&gt;"
        );
    }

    #[test]
    fn home_page_escapes_searched_text() {
        let page = home_page(&[], Some("<script>"), Some("Category Not Found"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
        assert!(page.contains("Category Not Found"));
    }

    #[test]
    fn home_page_links_categories() {
        let category = Category::new_with_id(
            "cat-1".to_string(),
            "Fasteners".to_string(),
            "Screws and bolts".to_string(),
        );
        let page = home_page(std::slice::from_ref(&category), None, None);
        assert!(page.contains("/inventory/category/cat-1"));
        assert!(page.contains("Fasteners"));
    }
}
