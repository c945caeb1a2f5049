//! Order bookkeeping: the one piece of cross-entity logic in the app.
//!
//! An order's total is the sum of its member instances' item prices, and
//! membership drives the instances' Available/Pending status. Each step is an
//! independent store write with no transaction around the sequence.

use anyhow::{Context, Result};

use crate::model::{Id, InstanceStatus, Order};
use crate::store::traits::{ItemInstanceStore, ItemStore, OrderStore, Store};

/// Sum of each listed instance's item price.
pub async fn order_total<S: Store>(store: &S, instance_ids: &[Id]) -> Result<f64> {
    let mut total = 0.0;
    for instance_id in instance_ids {
        let instance = store
            .get_instance(instance_id)
            .await?
            .with_context(|| format!("Item instance not found: {instance_id}"))?;
        let item = store
            .get_item(&instance.item)
            .await?
            .with_context(|| format!("Item not found: {}", instance.item))?;
        total += item.price;
    }
    Ok(total)
}

/// Rewrite the status of every listed instance, one write at a time.
/// Instances that have been deleted since the order was written are skipped.
pub async fn mark_instances<S: Store>(
    store: &S,
    instance_ids: &[Id],
    status: InstanceStatus,
) -> Result<()> {
    for instance_id in instance_ids {
        let Some(mut instance) = store.get_instance(instance_id).await? else {
            continue;
        };
        instance.status = status;
        store.upsert_instance(instance).await?;
    }
    Ok(())
}

/// Create flow: price the selection, save the order, then flag every member
/// as Pending.
pub async fn place_order<S: Store>(store: &S, instance_ids: Vec<Id>) -> Result<Order> {
    let total = order_total(store, &instance_ids).await?;
    let order = Order::new(instance_ids, total);
    store.upsert_order(order.clone()).await?;
    mark_instances(store, &order.instances, InstanceStatus::Pending).await?;
    Ok(order)
}

/// Update flow: release the old member set, replace the order under the same
/// id with a fresh date/total, then flag the new member set as Pending.
pub async fn replace_order<S: Store>(
    store: &S,
    existing: &Order,
    instance_ids: Vec<Id>,
) -> Result<Order> {
    let total = order_total(store, &instance_ids).await?;
    mark_instances(store, &existing.instances, InstanceStatus::Available).await?;
    let order = Order::new_with_id(existing.id.clone(), instance_ids, total);
    store.upsert_order(order.clone()).await?;
    mark_instances(store, &order.instances, InstanceStatus::Pending).await?;
    Ok(order)
}

/// Delete flow: release every member, then delete the order itself.
pub async fn release_order<S: Store>(store: &S, order: &Order) -> Result<bool> {
    mark_instances(store, &order.instances, InstanceStatus::Available).await?;
    store.delete_order(&order.id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Item, ItemInstance};
    use crate::store::memory::MemoryStore;
    use crate::store::traits::CategoryStore;
    use chrono::NaiveDate;

    async fn stocked_store() -> (MemoryStore, Vec<Id>) {
        let store = MemoryStore::new();
        let category = Category::new_with_id(
            "cat-1".to_string(),
            "Fasteners".to_string(),
            "Screws and bolts".to_string(),
        );
        store.upsert_category(category).await.unwrap();

        let prices = [("item-1", 4.5), ("item-2", 10.0)];
        for (id, price) in prices {
            store
                .upsert_item(Item::new_with_id(
                    id.to_string(),
                    format!("{id} name"),
                    "stocked".to_string(),
                    vec!["cat-1".to_string()],
                    price,
                    None,
                ))
                .await
                .unwrap();
        }

        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let mut ids = Vec::new();
        for (id, item) in [("inst-1", "item-1"), ("inst-2", "item-1"), ("inst-3", "item-2")] {
            store
                .upsert_instance(ItemInstance::new_with_id(
                    id.to_string(),
                    item.to_string(),
                    InstanceStatus::Available,
                    date,
                    None,
                    None,
                ))
                .await
                .unwrap();
            ids.push(id.to_string());
        }
        (store, ids)
    }

    async fn status_of(store: &MemoryStore, id: &str) -> InstanceStatus {
        store
            .get_instance(&id.to_string())
            .await
            .unwrap()
            .unwrap()
            .status
    }

    #[tokio::test]
    async fn total_sums_member_item_prices() {
        let (store, ids) = stocked_store().await;
        let total = order_total(&store, &ids).await.unwrap();
        assert_eq!(total, 19.0);

        let total = order_total(&store, &ids[..1]).await.unwrap();
        assert_eq!(total, 4.5);
    }

    #[tokio::test]
    async fn total_fails_on_unknown_instance() {
        let (store, _) = stocked_store().await;
        let err = order_total(&store, &["inst-9".to_string()])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("inst-9"));
    }

    #[tokio::test]
    async fn placing_an_order_flags_members_pending() {
        let (store, ids) = stocked_store().await;
        let order = place_order(&store, vec![ids[0].clone(), ids[2].clone()])
            .await
            .unwrap();

        assert_eq!(order.total, 14.5);
        assert_eq!(status_of(&store, "inst-1").await, InstanceStatus::Pending);
        assert_eq!(status_of(&store, "inst-2").await, InstanceStatus::Available);
        assert_eq!(status_of(&store, "inst-3").await, InstanceStatus::Pending);
        assert!(store.get_order(&order.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn replacing_an_order_swaps_member_statuses() {
        let (store, ids) = stocked_store().await;
        let order = place_order(&store, vec![ids[0].clone()]).await.unwrap();

        let replaced = replace_order(&store, &order, vec![ids[1].clone()])
            .await
            .unwrap();

        assert_eq!(replaced.id, order.id);
        assert_eq!(replaced.total, 4.5);
        assert_eq!(status_of(&store, "inst-1").await, InstanceStatus::Available);
        assert_eq!(status_of(&store, "inst-2").await, InstanceStatus::Pending);

        let stored = store.get_order(&order.id).await.unwrap().unwrap();
        assert_eq!(stored.instances, vec![ids[1].clone()]);
    }

    #[tokio::test]
    async fn releasing_an_order_frees_members_and_deletes_it() {
        let (store, ids) = stocked_store().await;
        let order = place_order(&store, ids.clone()).await.unwrap();

        assert!(release_order(&store, &order).await.unwrap());
        for id in ["inst-1", "inst-2", "inst-3"] {
            assert_eq!(status_of(&store, id).await, InstanceStatus::Available);
        }
        assert!(store.get_order(&order.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleted_members_are_skipped_on_release() {
        let (store, ids) = stocked_store().await;
        let order = place_order(&store, ids.clone()).await.unwrap();

        store.delete_instance(&ids[0]).await.unwrap();
        assert!(release_order(&store, &order).await.unwrap());
        assert_eq!(status_of(&store, "inst-2").await, InstanceStatus::Available);
    }
}
