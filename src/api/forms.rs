//! Submitted form payloads, kept as raw strings so a failed validation can
//! re-render the form with exactly what the user typed.

use serde::Deserialize;

use crate::model::Id;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InstanceForm {
    #[serde(default)]
    pub item: Id,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub import_date: String,
    #[serde(default)]
    pub export_date: String,
    #[serde(default)]
    pub details: String,
}

/// The home-page search box.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub category: String,
}

/// Item form. The category checkboxes submit one `categories` key per checked
/// box, so this is collected from raw key/value pairs rather than a serde
/// struct decode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub description: String,
    pub categories: Vec<Id>,
    pub price: String,
    pub image: String,
}

impl ItemForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => form.name = value,
                "description" => form.description = value,
                "categories" => form.categories.push(value),
                "price" => form.price = value,
                "image" => form.image = value,
                _ => {}
            }
        }
        form
    }
}

/// Order form: nothing but the instance checkboxes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub instances: Vec<Id>,
}

impl OrderForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            if key == "instances" {
                form.instances.push(value);
            }
        }
        form
    }
}

/// Decode an `application/x-www-form-urlencoded` body into its key/value
/// pairs, repeated keys included.
pub fn parse_pairs(body: &[u8]) -> anyhow::Result<Vec<(String, String)>> {
    serde_urlencoded::from_bytes(body).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_checkbox_keys_collect_into_the_list() {
        let pairs = parse_pairs(
            b"name=Wood+screw&description=A%20screw&categories=cat-1&categories=cat-2&price=4.50&image=",
        )
        .unwrap();
        let form = ItemForm::from_pairs(pairs);
        assert_eq!(form.name, "Wood screw");
        assert_eq!(form.description, "A screw");
        assert_eq!(form.categories, vec!["cat-1", "cat-2"]);
        assert_eq!(form.price, "4.50");
        assert_eq!(form.image, "");
    }

    #[test]
    fn missing_checkboxes_degrade_to_an_empty_list() {
        let form = OrderForm::from_pairs(parse_pairs(b"").unwrap());
        assert!(form.instances.is_empty());

        let form = OrderForm::from_pairs(parse_pairs(b"instances=inst-1").unwrap());
        assert_eq!(form.instances, vec!["inst-1"]);
    }
}
