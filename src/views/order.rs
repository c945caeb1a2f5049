use crate::logic::ValidationError;
use crate::model::{Id, Item, ItemInstance, Order};
use crate::views::{errors_block, escape, layout};

pub fn list_page(orders: &[Order]) -> String {
    let mut body = String::from("<h1>Order List</h1>\n");
    if orders.is_empty() {
        body.push_str("<p>There are no orders.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for order in orders {
            body.push_str(&format!(
                "    <li><a href=\"{}\">Order of {}</a>: {} instance(s), ${:.2} ({})</li>\n",
                order.url(),
                order.order_date_formatted(),
                order.instances.len(),
                order.total,
                order.status.as_str()
            ));
        }
        body.push_str("</ul>\n");
    }
    layout("Order List", &body)
}

/// Detail page with each member instance and its item resolved for display.
pub fn detail_page(order: &Order, members: &[(ItemInstance, Option<Item>)]) -> String {
    let mut body = format!("<h1>Order of {}</h1>\n", order.order_date_formatted());
    body.push_str(&format!("<p>Status: {}</p>\n", order.status.as_str()));
    body.push_str(&format!("<p>Total: ${:.2}</p>\n", order.total));
    body.push_str("<p>Item instances:</p>\n<ul>\n");
    for (instance, item) in members {
        let label = match item {
            Some(item) => escape(&item.name),
            None => escape(&instance.item),
        };
        body.push_str(&format!(
            "    <li><a href=\"{}\">{}</a> ({})</li>\n",
            instance.url(),
            label,
            instance.status.as_str()
        ));
    }
    body.push_str("</ul>\n");
    body.push_str(&format!(
        "<p>\n    <a href=\"{url}/update\">Update</a>\n    <a href=\"{url}/delete\">Delete</a>\n</p>\n",
        url = order.url()
    ));
    layout("Order Detail", &body)
}

/// The create/update form: one checkbox per offerable instance. On update the
/// current members are part of `selectable` and arrive pre-checked.
pub fn form_page(
    title: &str,
    selectable: &[(ItemInstance, Option<Item>)],
    checked: &[Id],
    errors: &[ValidationError],
) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(title));
    body.push_str(&errors_block(errors));
    if selectable.is_empty() {
        body.push_str("<p>There are no available item instances to order.</p>\n");
        return layout(title, &body);
    }
    body.push_str("<form method=\"post\">\n");
    body.push_str("    <fieldset>\n        <legend>Item instances</legend>\n");
    for (instance, item) in selectable {
        let label = match item {
            Some(item) => format!("{} (imported {})", escape(&item.name), instance.import_date_formatted()),
            None => escape(&instance.item),
        };
        let checked = if checked.contains(&instance.id) {
            " checked"
        } else {
            ""
        };
        body.push_str(&format!(
            "        <label><input type=\"checkbox\" name=\"instances\" value=\"{}\"{}> {}</label>\n",
            escape(&instance.id),
            checked,
            label
        ));
    }
    body.push_str("    </fieldset>\n");
    body.push_str("    <button type=\"submit\">Submit</button>\n</form>\n");
    layout(title, &body)
}

pub fn delete_page(order: &Order) -> String {
    let mut body = format!("<h1>Delete Order of {}</h1>\n", order.order_date_formatted());
    body.push_str(&format!(
        "<p>Deleting this order releases its {} item instance(s) back to Available.</p>\n",
        order.instances.len()
    ));
    body.push_str("<p>Do you really want to delete this order?</p>\n");
    body.push_str("<form method=\"post\">\n    <button type=\"submit\">Delete</button>\n</form>\n");
    layout("Delete Order", &body)
}
