use crate::model::{generate_id, Id};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: generate_id(),
            name,
            description,
        }
    }

    pub fn new_with_id(id: Id, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
        }
    }

    /// Canonical page path for this category.
    pub fn url(&self) -> String {
        format!("/inventory/category/{}", self.id)
    }
}

/// Validated input for creating or replacing a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub description: String,
}

impl CategoryInput {
    pub fn into_category(self) -> Category {
        Category::new(self.name, self.description)
    }

    /// Replace-by-id conversion used by the update flow.
    pub fn into_category_with_id(self, id: Id) -> Category {
        Category::new_with_id(id, self.name, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_points_at_detail_page() {
        let category = Category::new_with_id(
            "cat-1".to_string(),
            "Fasteners".to_string(),
            "Screws, bolts and nails".to_string(),
        );
        assert_eq!(category.url(), "/inventory/category/cat-1");
    }

    #[test]
    fn input_conversion_keeps_id_on_update() {
        let input = CategoryInput {
            name: "Fasteners".to_string(),
            description: "Screws, bolts and nails".to_string(),
        };
        let replaced = input.into_category_with_id("cat-1".to_string());
        assert_eq!(replaced.id, "cat-1");
        assert_eq!(replaced.name, "Fasteners");
    }
}
