use crate::model::{Category, Id, InstanceStatus, Item, ItemInstance, Order};
use anyhow::Result;

#[async_trait::async_trait]
pub trait CategoryStore: Send + Sync {
    async fn get_category(&self, id: &Id) -> Result<Option<Category>>;
    /// All categories, sorted by name.
    async fn list_categories(&self) -> Result<Vec<Category>>;
    /// Case-insensitive substring match on the category name.
    async fn search_categories(&self, name_fragment: &str) -> Result<Vec<Category>>;
    async fn upsert_category(&self, category: Category) -> Result<()>;
    async fn delete_category(&self, id: &Id) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait ItemStore: Send + Sync {
    async fn get_item(&self, id: &Id) -> Result<Option<Item>>;
    /// All items, sorted by name.
    async fn list_items(&self) -> Result<Vec<Item>>;
    /// Items referencing the given category.
    async fn find_items_in_category(&self, category_id: &Id) -> Result<Vec<Item>>;
    async fn upsert_item(&self, item: Item) -> Result<()>;
    async fn delete_item(&self, id: &Id) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait ItemInstanceStore: Send + Sync {
    async fn get_instance(&self, id: &Id) -> Result<Option<ItemInstance>>;
    async fn list_instances(&self) -> Result<Vec<ItemInstance>>;
    /// Stock units of the given item.
    async fn find_instances_of_item(&self, item_id: &Id) -> Result<Vec<ItemInstance>>;
    /// Instances in the given status, ordered by their item (the order forms
    /// present them grouped that way).
    async fn find_instances_by_status(&self, status: InstanceStatus) -> Result<Vec<ItemInstance>>;
    async fn upsert_instance(&self, instance: ItemInstance) -> Result<()>;
    async fn delete_instance(&self, id: &Id) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait OrderStore: Send + Sync {
    async fn get_order(&self, id: &Id) -> Result<Option<Order>>;
    async fn list_orders(&self) -> Result<Vec<Order>>;
    /// Orders whose member list contains the given instance.
    async fn find_orders_containing(&self, instance_id: &Id) -> Result<Vec<Order>>;
    async fn upsert_order(&self, order: Order) -> Result<()>;
    async fn delete_order(&self, id: &Id) -> Result<bool>;
}

pub trait Store:
    CategoryStore + ItemStore + ItemInstanceStore + OrderStore + Send + Sync
{
}
