use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::logic::place_order;
use crate::model::{Category, InstanceStatus, Item, ItemInstance};
use crate::store::traits::{CategoryStore, ItemInstanceStore, ItemStore, Store};

fn seed_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("invalid seed date {year}-{month}-{day}"))
}

/// Load a small demonstration inventory. Ids are fixed so reloading
/// overwrites instead of duplicating.
pub async fn load_seed_data<S: Store>(store: &S) -> Result<()> {
    let categories = [
        ("cat-fasteners", "Fasteners", "Screws, bolts, nails and anchors"),
        ("cat-adhesives", "Adhesives", "Glues, epoxies and tapes"),
        ("cat-paint", "Paint", "Interior and exterior paints and primers"),
    ];
    for (id, name, description) in categories {
        store
            .upsert_category(Category::new_with_id(
                id.to_string(),
                name.to_string(),
                description.to_string(),
            ))
            .await?;
    }

    let items = [
        (
            "item-wood-screw",
            "Wood screw 4x40",
            "Box of 200 countersunk wood screws",
            vec!["cat-fasteners"],
            6.99,
            Some("/public/images/wood-screw.jpg"),
        ),
        (
            "item-epoxy",
            "Two-part epoxy",
            "5-minute epoxy, 25ml syringe",
            vec!["cat-adhesives"],
            8.49,
            None,
        ),
        (
            "item-wall-paint",
            "Wall paint, white",
            "Matte interior wall paint, 1L",
            vec!["cat-paint"],
            12.0,
            None,
        ),
        (
            "item-anchor-kit",
            "Anchor and screw kit",
            "Assorted wall anchors with matching screws",
            vec!["cat-fasteners", "cat-adhesives"],
            11.25,
            None,
        ),
    ];
    for (id, name, description, categories, price, image) in items {
        store
            .upsert_item(Item::new_with_id(
                id.to_string(),
                name.to_string(),
                description.to_string(),
                categories.into_iter().map(str::to_string).collect(),
                price,
                image.map(str::to_string),
            ))
            .await?;
    }

    let instances = [
        ("inst-screw-1", "item-wood-screw", (2024, 1, 12)),
        ("inst-screw-2", "item-wood-screw", (2024, 1, 12)),
        ("inst-epoxy-1", "item-epoxy", (2024, 2, 3)),
        ("inst-paint-1", "item-wall-paint", (2024, 2, 18)),
        ("inst-paint-2", "item-wall-paint", (2024, 2, 18)),
        ("inst-anchor-1", "item-anchor-kit", (2024, 3, 1)),
    ];
    for (id, item, (year, month, day)) in instances {
        store
            .upsert_instance(ItemInstance::new_with_id(
                id.to_string(),
                item.to_string(),
                InstanceStatus::Available,
                seed_date(year, month, day)?,
                None,
                Some("Seeded stock".to_string()),
            ))
            .await?;
    }

    // One placed order, so the list pages have something to show.
    place_order(
        store,
        vec!["inst-screw-2".to_string(), "inst-paint-1".to_string()],
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::store::traits::OrderStore;

    #[tokio::test]
    async fn seed_loads_a_consistent_inventory() {
        let store = MemoryStore::new();
        load_seed_data(&store).await.unwrap();

        assert_eq!(store.list_categories().await.unwrap().len(), 3);
        assert_eq!(store.list_items().await.unwrap().len(), 4);
        assert_eq!(store.list_instances().await.unwrap().len(), 6);

        let orders = store.list_orders().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].total, 6.99 + 12.0);

        let member = store
            .get_instance(&"inst-screw-2".to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(member.status, InstanceStatus::Pending);
    }
}
