use crate::api::forms::InstanceForm;
use crate::logic::ValidationError;
use crate::model::{InstanceStatus, Item, ItemInstance, Order};
use crate::views::{errors_block, escape, layout};

/// Label an instance by its item's name where the reference still resolves.
fn instance_label(instance: &ItemInstance, item: Option<&Item>) -> String {
    match item {
        Some(item) => escape(&item.name),
        None => escape(&instance.item),
    }
}

pub fn list_page(rows: &[(ItemInstance, Option<Item>)]) -> String {
    let mut body = String::from("<h1>Item Instance List</h1>\n");
    if rows.is_empty() {
        body.push_str("<p>There are no item instances.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for (instance, item) in rows {
            body.push_str(&format!(
                "    <li><a href=\"{}\">{}</a> ({})</li>\n",
                instance.url(),
                instance_label(instance, item.as_ref()),
                instance.status.as_str()
            ));
        }
        body.push_str("</ul>\n");
    }
    layout("Item Instance List", &body)
}

pub fn detail_page(instance: &ItemInstance, item: &Item) -> String {
    let mut body = format!("<h1>Item Instance: {}</h1>\n", escape(&instance.id));
    body.push_str(&format!(
        "<p>Item: <a href=\"{}\">{}</a></p>\n",
        item.url(),
        escape(&item.name)
    ));
    body.push_str(&format!("<p>Status: {}</p>\n", instance.status.as_str()));
    body.push_str(&format!(
        "<p>Imported: {}</p>\n",
        instance.import_date_formatted()
    ));
    if instance.export_date.is_some() {
        body.push_str(&format!(
            "<p>Exported: {}</p>\n",
            instance.export_date_formatted()
        ));
    }
    if let Some(details) = &instance.details {
        body.push_str(&format!("<p>{}</p>\n", escape(details)));
    }
    body.push_str(&format!(
        "<p>\n    <a href=\"{url}/update\">Update</a>\n    <a href=\"{url}/delete\">Delete</a>\n</p>\n",
        url = instance.url()
    ));
    layout("Item Instance Detail", &body)
}

pub fn form_page(
    title: &str,
    form: &InstanceForm,
    items: &[Item],
    errors: &[ValidationError],
) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(title));
    body.push_str(&errors_block(errors));
    body.push_str("<form method=\"post\">\n");

    body.push_str("    <label>Item <select name=\"item\">\n");
    for item in items {
        let selected = if form.item == item.id { " selected" } else { "" };
        body.push_str(&format!(
            "        <option value=\"{}\"{}>{}</option>\n",
            escape(&item.id),
            selected,
            escape(&item.name)
        ));
    }
    body.push_str("    </select></label>\n");

    // A blank form defaults the status selector to Available.
    let current_status = if form.status.is_empty() {
        InstanceStatus::Available.as_str()
    } else {
        form.status.as_str()
    };
    body.push_str("    <label>Status <select name=\"status\">\n");
    for status in InstanceStatus::ALL {
        let selected = if current_status == status.as_str() {
            " selected"
        } else {
            ""
        };
        body.push_str(&format!(
            "        <option value=\"{name}\"{selected}>{name}</option>\n",
            name = status.as_str()
        ));
    }
    body.push_str("    </select></label>\n");

    body.push_str(&format!(
        "    <label>Import date <input type=\"date\" name=\"import_date\" value=\"{}\"></label>\n",
        escape(&form.import_date)
    ));
    body.push_str(&format!(
        "    <label>Export date <input type=\"date\" name=\"export_date\" value=\"{}\"></label>\n",
        escape(&form.export_date)
    ));
    body.push_str(&format!(
        "    <label>Details <input type=\"text\" name=\"details\" value=\"{}\"></label>\n",
        escape(&form.details)
    ));
    body.push_str("    <button type=\"submit\">Submit</button>\n</form>\n");
    layout(title, &body)
}

pub fn delete_page(instance: &ItemInstance, orders: &[Order]) -> String {
    let mut body = format!("<h1>Delete Item Instance: {}</h1>\n", escape(&instance.id));
    if !orders.is_empty() {
        body.push_str("<p>This instance appears in the following orders:</p>\n<ul>\n");
        for order in orders {
            body.push_str(&format!(
                "    <li><a href=\"{}\">Order of {}</a></li>\n",
                order.url(),
                order.order_date_formatted()
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<p>Do you really want to delete this item instance?</p>\n");
    body.push_str("<form method=\"post\">\n    <button type=\"submit\">Delete</button>\n</form>\n");
    layout("Delete Item Instance", &body)
}
