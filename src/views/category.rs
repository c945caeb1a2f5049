use crate::api::forms::CategoryForm;
use crate::logic::ValidationError;
use crate::model::{Category, Item};
use crate::views::{errors_block, escape, layout};

pub fn list_page(categories: &[Category]) -> String {
    let mut body = String::from("<h1>Category List</h1>\n");
    if categories.is_empty() {
        body.push_str("<p>There are no categories.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for category in categories {
            body.push_str(&format!(
                "    <li><a href=\"{}\">{}</a></li>\n",
                category.url(),
                escape(&category.name)
            ));
        }
        body.push_str("</ul>\n");
    }
    layout("Category List", &body)
}

pub fn detail_page(category: &Category) -> String {
    let mut body = format!("<h1>Category: {}</h1>\n", escape(&category.name));
    body.push_str(&format!("<p>{}</p>\n", escape(&category.description)));
    body.push_str(&format!(
        "<p>\n    <a href=\"{url}/update\">Update</a>\n    <a href=\"{url}/delete\">Delete</a>\n</p>\n",
        url = category.url()
    ));
    layout("Category Detail", &body)
}

pub fn form_page(title: &str, form: &CategoryForm, errors: &[ValidationError]) -> String {
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
    body.push_str("    <button type=\"submit\">Submit</button>\n</form>\n");
    layout(title, &body)
}

pub fn delete_page(category: &Category, items: &[Item]) -> String {
    let mut body = format!("<h1>Delete Category: {}</h1>\n", escape(&category.name));
    if items.is_empty() {
        body.push_str("<p>Do you really want to delete this category?</p>\n");
        body.push_str("<form method=\"post\">\n    <button type=\"submit\">Delete</button>\n</form>\n");
    } else {
        body.push_str("<p>Delete the following items before deleting this category:</p>\n<ul>\n");
        for item in items {
            body.push_str(&format!(
                "    <li><a href=\"{}\">{}</a></li>\n",
                item.url(),
                escape(&item.name)
            ));
        }
        body.push_str("</ul>\n");
    }
    layout("Delete Category", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_page_keeps_submitted_values_and_errors() {
        let form = CategoryForm {
            name: "Fasteners".to_string(),
            description: String::new(),
        };
        let errors = vec![ValidationError::Required("Description")];
        let page = form_page("Create Category", &form, &errors);
        assert!(page.contains("value=\"Fasteners\""));
        assert!(page.contains("Description is required"));
    }

    #[test]
    fn delete_page_blocks_while_items_remain() {
        let category = Category::new_with_id(
            "cat-1".to_string(),
            "Fasteners".to_string(),
            "Screws and bolts".to_string(),
        );
        let item = Item::new_with_id(
            "item-1".to_string(),
            "Wood screw".to_string(),
            "A screw".to_string(),
            vec!["cat-1".to_string()],
            4.5,
            None,
        );
        let blocked = delete_page(&category, std::slice::from_ref(&item));
        assert!(blocked.contains("Delete the following items"));
        assert!(!blocked.contains("<form"));

        let clear = delete_page(&category, &[]);
        assert!(clear.contains("<form"));
    }
}
