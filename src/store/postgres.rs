use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::{postgres::PgPoolOptions, PgPool, Row};

use crate::model::{Category, Id, InstanceStatus, Item, ItemInstance, Order};
use crate::store::traits::{CategoryStore, ItemInstanceStore, ItemStore, OrderStore, Store};

/// Document-style persistence: one table per entity kind, each row holding
/// the serialized entity as JSONB under its id.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

const MIGRATIONS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS categories (id TEXT PRIMARY KEY, data JSONB NOT NULL)",
    "CREATE TABLE IF NOT EXISTS items (id TEXT PRIMARY KEY, data JSONB NOT NULL)",
    "CREATE TABLE IF NOT EXISTS item_instances (id TEXT PRIMARY KEY, data JSONB NOT NULL)",
    "CREATE TABLE IF NOT EXISTS orders (id TEXT PRIMARY KEY, data JSONB NOT NULL)",
];

impl PostgresStore {
    /// Create a new PostgreSQL store with the given database URL
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .connect(database_url)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        Ok(Self { pool })
    }

    /// Create the document tables if they do not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        for statement in MIGRATIONS {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .context("Failed to run database migrations")?;
        }
        Ok(())
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_document<T: DeserializeOwned>(
        &self,
        table: &str,
        id: &Id,
    ) -> Result<Option<T>> {
        let query = format!("SELECT data FROM {table} WHERE id = $1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to fetch document from {table}"))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let data: serde_json::Value = row.get("data");
        let document =
            serde_json::from_value(data).with_context(|| format!("Corrupt document in {table}"))?;
        Ok(Some(document))
    }

    async fn fetch_documents<T: DeserializeOwned>(&self, query: &str) -> Result<Vec<T>> {
        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list documents")?;

        rows.into_iter()
            .map(|row| {
                let data: serde_json::Value = row.get("data");
                serde_json::from_value(data).context("Corrupt document")
            })
            .collect()
    }

    async fn fetch_documents_matching<T: DeserializeOwned>(
        &self,
        query: &str,
        param: &str,
    ) -> Result<Vec<T>> {
        let rows = sqlx::query(query)
            .bind(param)
            .fetch_all(&self.pool)
            .await
            .context("Failed to query documents")?;

        rows.into_iter()
            .map(|row| {
                let data: serde_json::Value = row.get("data");
                serde_json::from_value(data).context("Corrupt document")
            })
            .collect()
    }

    async fn upsert_document<T: Serialize>(&self, table: &str, id: &Id, document: &T) -> Result<()> {
        let data = serde_json::to_value(document)
            .with_context(|| format!("Failed to serialize document for {table}"))?;
        let query = format!(
            "INSERT INTO {table} (id, data) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET data = EXCLUDED.data"
        );
        sqlx::query(&query)
            .bind(id)
            .bind(data)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to upsert document into {table}"))?;
        Ok(())
    }

    async fn delete_document(&self, table: &str, id: &Id) -> Result<bool> {
        let query = format!("DELETE FROM {table} WHERE id = $1");
        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to delete document from {table}"))?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait::async_trait]
impl CategoryStore for PostgresStore {
    async fn get_category(&self, id: &Id) -> Result<Option<Category>> {
        self.fetch_document("categories", id).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.fetch_documents("SELECT data FROM categories ORDER BY data->>'name'")
            .await
    }

    async fn search_categories(&self, name_fragment: &str) -> Result<Vec<Category>> {
        self.fetch_documents_matching(
            "SELECT data FROM categories \
             WHERE data->>'name' ILIKE '%' || $1 || '%' \
             ORDER BY data->>'name'",
            name_fragment,
        )
        .await
    }

    async fn upsert_category(&self, category: Category) -> Result<()> {
        self.upsert_document("categories", &category.id, &category)
            .await
    }

    async fn delete_category(&self, id: &Id) -> Result<bool> {
        self.delete_document("categories", id).await
    }
}

#[async_trait::async_trait]
impl ItemStore for PostgresStore {
    async fn get_item(&self, id: &Id) -> Result<Option<Item>> {
        self.fetch_document("items", id).await
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        self.fetch_documents("SELECT data FROM items ORDER BY data->>'name'")
            .await
    }

    async fn find_items_in_category(&self, category_id: &Id) -> Result<Vec<Item>> {
        self.fetch_documents_matching(
            "SELECT data FROM items \
             WHERE data->'categories' ? $1 \
             ORDER BY data->>'name'",
            category_id,
        )
        .await
    }

    async fn upsert_item(&self, item: Item) -> Result<()> {
        self.upsert_document("items", &item.id, &item).await
    }

    async fn delete_item(&self, id: &Id) -> Result<bool> {
        self.delete_document("items", id).await
    }
}

#[async_trait::async_trait]
impl ItemInstanceStore for PostgresStore {
    async fn get_instance(&self, id: &Id) -> Result<Option<ItemInstance>> {
        self.fetch_document("item_instances", id).await
    }

    async fn list_instances(&self) -> Result<Vec<ItemInstance>> {
        self.fetch_documents("SELECT data FROM item_instances ORDER BY data->>'item'")
            .await
    }

    async fn find_instances_of_item(&self, item_id: &Id) -> Result<Vec<ItemInstance>> {
        self.fetch_documents_matching(
            "SELECT data FROM item_instances \
             WHERE data->>'item' = $1 \
             ORDER BY data->>'import_date'",
            item_id,
        )
        .await
    }

    async fn find_instances_by_status(&self, status: InstanceStatus) -> Result<Vec<ItemInstance>> {
        self.fetch_documents_matching(
            "SELECT data FROM item_instances \
             WHERE data->>'status' = $1 \
             ORDER BY data->>'item'",
            status.as_str(),
        )
        .await
    }

    async fn upsert_instance(&self, instance: ItemInstance) -> Result<()> {
        self.upsert_document("item_instances", &instance.id, &instance)
            .await
    }

    async fn delete_instance(&self, id: &Id) -> Result<bool> {
        self.delete_document("item_instances", id).await
    }
}

#[async_trait::async_trait]
impl OrderStore for PostgresStore {
    async fn get_order(&self, id: &Id) -> Result<Option<Order>> {
        self.fetch_document("orders", id).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        self.fetch_documents("SELECT data FROM orders ORDER BY data->>'order_date'")
            .await
    }

    async fn find_orders_containing(&self, instance_id: &Id) -> Result<Vec<Order>> {
        self.fetch_documents_matching(
            "SELECT data FROM orders \
             WHERE data->'instances' ? $1 \
             ORDER BY data->>'order_date'",
            instance_id,
        )
        .await
    }

    async fn upsert_order(&self, order: Order) -> Result<()> {
        self.upsert_document("orders", &order.id, &order).await
    }

    async fn delete_order(&self, id: &Id) -> Result<bool> {
        self.delete_document("orders", id).await
    }
}

impl Store for PostgresStore {}
