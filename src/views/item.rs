use crate::api::forms::ItemForm;
use crate::logic::ValidationError;
use crate::model::{Category, Item, ItemInstance};
use crate::views::{errors_block, escape, layout};

fn price_display(price: f64) -> String {
    format!("${price:.2}")
}

pub fn list_page(items: &[Item]) -> String {
    let mut body = String::from("<h1>Item List</h1>\n");
    if items.is_empty() {
        body.push_str("<p>There are no items.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for item in items {
            body.push_str(&format!(
                "    <li><a href=\"{}\">{}</a> ({})</li>\n",
                item.url(),
                escape(&item.name),
                price_display(item.price)
            ));
        }
        body.push_str("</ul>\n");
    }
    layout("Item List", &body)
}

/// Detail page with the item's category references resolved for display.
pub fn detail_page(item: &Item, categories: &[Category]) -> String {
    let mut body = format!("<h1>Item: {}</h1>\n", escape(&item.name));
    body.push_str(&format!("<p>{}</p>\n", escape(&item.description)));
    body.push_str(&format!(
        "<p>Price: {}</p>\n",
        price_display(item.price)
    ));
    if let Some(image) = &item.image {
        body.push_str(&format!(
            "<p><img src=\"{}\" alt=\"{}\"></p>\n",
            escape(image),
            escape(&item.name)
        ));
    }
    if !categories.is_empty() {
        body.push_str("<p>Categories:</p>\n<ul>\n");
        for category in categories {
            body.push_str(&format!(
                "    <li><a href=\"{}\">{}</a></li>\n",
                category.url(),
                escape(&category.name)
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str(&format!(
        "<p>\n    <a href=\"{url}/update\">Update</a>\n    <a href=\"{url}/delete\">Delete</a>\n</p>\n",
        url = item.url()
    ));
    layout("Item Detail", &body)
}

pub fn form_page(
    title: &str,
    form: &ItemForm,
    all_categories: &[Category],
    errors: &[ValidationError],
) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(title));
    body.push_str(&errors_block(errors));
    body.push_str("<form method=\"post\">\n");
    body.push_str(&format!(
        "    <label>Name <input type=\"text\" name=\"name\" value=\"{}\"></label>\n",
        escape(&form.name)
    ));
    body.push_str(&format!(
        "    <label>Description <input type=\"text\" name=\"description\" value=\"{}\"></label>\n",
        escape(&form.description)
    ));
    body.push_str("    <fieldset>\n        <legend>Categories</legend>\n");
    for category in all_categories {
        let checked = if form.categories.contains(&category.id) {
            " checked"
        } else {
            ""
        };
        body.push_str(&format!(
            "        <label><input type=\"checkbox\" name=\"categories\" value=\"{}\"{}> {}</label>\n",
            escape(&category.id),
            checked,
            escape(&category.name)
        ));
    }
    body.push_str("    </fieldset>\n");
    body.push_str(&format!(
        "    <label>Price <input type=\"text\" name=\"price\" value=\"{}\"></label>\n",
        escape(&form.price)
    ));
    body.push_str(&format!(
        "    <label>Image path <input type=\"text\" name=\"image\" value=\"{}\"></label>\n",
        escape(&form.image)
    ));
    body.push_str("    <button type=\"submit\">Submit</button>\n</form>\n");
    layout(title, &body)
}

pub fn delete_page(item: &Item, instances: &[ItemInstance]) -> String {
    let mut body = format!("<h1>Delete Item: {}</h1>\n", escape(&item.name));
    if instances.is_empty() {
        body.push_str("<p>Do you really want to delete this item?</p>\n");
        body.push_str("<form method=\"post\">\n    <button type=\"submit\">Delete</button>\n</form>\n");
    } else {
        body.push_str(
            "<p>Delete the following item instances before deleting this item:</p>\n<ul>\n",
        );
        for instance in instances {
            body.push_str(&format!(
                "    <li><a href=\"{}\">{}</a> ({})</li>\n",
                instance.url(),
                escape(&instance.id),
                instance.status.as_str()
            ));
        }
        body.push_str("</ul>\n");
    }
    layout("Delete Item", &body)
}
