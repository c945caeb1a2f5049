use crate::model::{generate_id, Id};
use serde::{Deserialize, Serialize};

/// A catalog entry. Stock on hand is tracked separately as [`crate::model::ItemInstance`]
/// records referencing this item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Id,
    pub name: String,
    pub description: String,
    /// Ids of the categories this item belongs to (at least one).
    pub categories: Vec<Id>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Item {
    pub fn new(
        name: String,
        description: String,
        categories: Vec<Id>,
        price: f64,
        image: Option<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            name,
            description,
            categories,
            price,
            image,
        }
    }

    pub fn new_with_id(
        id: Id,
        name: String,
        description: String,
        categories: Vec<Id>,
        price: f64,
        image: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            categories,
            price,
            image,
        }
    }

    pub fn url(&self) -> String {
        format!("/inventory/item/{}", self.id)
    }
}

/// Validated input for creating or replacing an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInput {
    pub name: String,
    pub description: String,
    pub categories: Vec<Id>,
    pub price: f64,
    pub image: Option<String>,
}

impl ItemInput {
    pub fn into_item(self) -> Item {
        Item::new(
            self.name,
            self.description,
            self.categories,
            self.price,
            self.image,
        )
    }

    pub fn into_item_with_id(self, id: Id) -> Item {
        Item::new_with_id(
            id,
            self.name,
            self.description,
            self.categories,
            self.price,
            self.image,
        )
    }
}
