use std::collections::HashMap;

use anyhow::Result;
use tokio::sync::RwLock;

use crate::model::{Category, Id, InstanceStatus, Item, ItemInstance, Order};
use crate::store::traits::{CategoryStore, ItemInstanceStore, ItemStore, OrderStore, Store};

/// In-memory store used by tests and local runs without PostgreSQL.
/// Same sorting and filtering semantics as [`crate::store::PostgresStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    categories: RwLock<HashMap<Id, Category>>,
    items: RwLock<HashMap<Id, Item>>,
    instances: RwLock<HashMap<Id, ItemInstance>>,
    orders: RwLock<HashMap<Id, Order>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CategoryStore for MemoryStore {
    async fn get_category(&self, id: &Id) -> Result<Option<Category>> {
        Ok(self.categories.read().await.get(id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let mut categories: Vec<Category> =
            self.categories.read().await.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn search_categories(&self, name_fragment: &str) -> Result<Vec<Category>> {
        let needle = name_fragment.to_lowercase();
        let mut categories: Vec<Category> = self
            .categories
            .read()
            .await
            .values()
            .filter(|category| category.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn upsert_category(&self, category: Category) -> Result<()> {
        self.categories
            .write()
            .await
            .insert(category.id.clone(), category);
        Ok(())
    }

    async fn delete_category(&self, id: &Id) -> Result<bool> {
        Ok(self.categories.write().await.remove(id).is_some())
    }
}

#[async_trait::async_trait]
impl ItemStore for MemoryStore {
    async fn get_item(&self, id: &Id) -> Result<Option<Item>> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        let mut items: Vec<Item> = self.items.read().await.values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn find_items_in_category(&self, category_id: &Id) -> Result<Vec<Item>> {
        let mut items: Vec<Item> = self
            .items
            .read()
            .await
            .values()
            .filter(|item| item.categories.contains(category_id))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn upsert_item(&self, item: Item) -> Result<()> {
        self.items.write().await.insert(item.id.clone(), item);
        Ok(())
    }

    async fn delete_item(&self, id: &Id) -> Result<bool> {
        Ok(self.items.write().await.remove(id).is_some())
    }
}

#[async_trait::async_trait]
impl ItemInstanceStore for MemoryStore {
    async fn get_instance(&self, id: &Id) -> Result<Option<ItemInstance>> {
        Ok(self.instances.read().await.get(id).cloned())
    }

    async fn list_instances(&self) -> Result<Vec<ItemInstance>> {
        let mut instances: Vec<ItemInstance> =
            self.instances.read().await.values().cloned().collect();
        instances.sort_by(|a, b| a.item.cmp(&b.item));
        Ok(instances)
    }

    async fn find_instances_of_item(&self, item_id: &Id) -> Result<Vec<ItemInstance>> {
        let mut instances: Vec<ItemInstance> = self
            .instances
            .read()
            .await
            .values()
            .filter(|instance| &instance.item == item_id)
            .cloned()
            .collect();
        instances.sort_by(|a, b| a.import_date.cmp(&b.import_date));
        Ok(instances)
    }

    async fn find_instances_by_status(&self, status: InstanceStatus) -> Result<Vec<ItemInstance>> {
        let mut instances: Vec<ItemInstance> = self
            .instances
            .read()
            .await
            .values()
            .filter(|instance| instance.status == status)
            .cloned()
            .collect();
        instances.sort_by(|a, b| a.item.cmp(&b.item));
        Ok(instances)
    }

    async fn upsert_instance(&self, instance: ItemInstance) -> Result<()> {
        self.instances
            .write()
            .await
            .insert(instance.id.clone(), instance);
        Ok(())
    }

    async fn delete_instance(&self, id: &Id) -> Result<bool> {
        Ok(self.instances.write().await.remove(id).is_some())
    }
}

#[async_trait::async_trait]
impl OrderStore for MemoryStore {
    async fn get_order(&self, id: &Id) -> Result<Option<Order>> {
        Ok(self.orders.read().await.get(id).cloned())
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        let mut orders: Vec<Order> = self.orders.read().await.values().cloned().collect();
        orders.sort_by(|a, b| a.order_date.cmp(&b.order_date));
        Ok(orders)
    }

    async fn find_orders_containing(&self, instance_id: &Id) -> Result<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .orders
            .read()
            .await
            .values()
            .filter(|order| order.contains(instance_id))
            .cloned()
            .collect();
        orders.sort_by(|a, b| a.order_date.cmp(&b.order_date));
        Ok(orders)
    }

    async fn upsert_order(&self, order: Order) -> Result<()> {
        self.orders.write().await.insert(order.id.clone(), order);
        Ok(())
    }

    async fn delete_order(&self, id: &Id) -> Result<bool> {
        Ok(self.orders.write().await.remove(id).is_some())
    }
}

impl Store for MemoryStore {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn category(name: &str) -> Category {
        Category::new(name.to_string(), format!("{name} things"))
    }

    #[tokio::test]
    async fn category_crud_round_trip() {
        let store = MemoryStore::new();
        let fasteners = category("Fasteners");
        let id = fasteners.id.clone();

        store.upsert_category(fasteners.clone()).await.unwrap();
        assert_eq!(store.get_category(&id).await.unwrap(), Some(fasteners));

        assert!(store.delete_category(&id).await.unwrap());
        assert_eq!(store.get_category(&id).await.unwrap(), None);
        assert!(!store.delete_category(&id).await.unwrap());
    }

    #[tokio::test]
    async fn categories_list_sorted_and_search_ignores_case() {
        let store = MemoryStore::new();
        store.upsert_category(category("Paint")).await.unwrap();
        store.upsert_category(category("Adhesives")).await.unwrap();
        store.upsert_category(category("Fasteners")).await.unwrap();

        let names: Vec<String> = store
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Adhesives", "Fasteners", "Paint"]);

        let hits = store.search_categories("paIN").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Paint");

        assert!(store.search_categories("garden").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn instances_filter_by_status_and_sort_by_item() {
        let store = MemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        for (item, status) in [
            ("item-b", InstanceStatus::Available),
            ("item-a", InstanceStatus::Available),
            ("item-c", InstanceStatus::Shipped),
        ] {
            store
                .upsert_instance(ItemInstance::new(
                    item.to_string(),
                    status,
                    date,
                    None,
                    None,
                ))
                .await
                .unwrap();
        }

        let available = store
            .find_instances_by_status(InstanceStatus::Available)
            .await
            .unwrap();
        let items: Vec<&str> = available.iter().map(|i| i.item.as_str()).collect();
        assert_eq!(items, vec!["item-a", "item-b"]);
    }

    #[tokio::test]
    async fn orders_found_by_member_instance() {
        let store = MemoryStore::new();
        let order = Order::new(vec!["inst-1".to_string(), "inst-2".to_string()], 30.0);
        store.upsert_order(order.clone()).await.unwrap();

        let containing = store
            .find_orders_containing(&"inst-2".to_string())
            .await
            .unwrap();
        assert_eq!(containing, vec![order]);

        assert!(store
            .find_orders_containing(&"inst-9".to_string())
            .await
            .unwrap()
            .is_empty());
    }
}
