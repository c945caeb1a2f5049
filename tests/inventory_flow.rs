//! End-to-end CRUD flows driven through the real router against the
//! in-memory store: no live server or database required.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use std::sync::Arc;
use tower::ServiceExt;

use stockroom::api::routes::create_router;
use stockroom::model::{Category, InstanceStatus, Item, ItemInstance};
use stockroom::store::{
    CategoryStore, ItemInstanceStore, ItemStore, MemoryStore, OrderStore,
};

fn app(store: &Arc<MemoryStore>) -> Router {
    create_router().with_state(store.clone())
}

async fn get_page(app: Router, path: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_form(
    app: Router,
    path: &str,
    form_body: &str,
) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(form_body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, location, String::from_utf8(bytes.to_vec()).unwrap())
}

fn id_from_location(location: &str) -> String {
    location.rsplit('/').next().unwrap().to_string()
}

async fn seed_category(store: &MemoryStore, id: &str, name: &str) {
    store
        .upsert_category(Category::new_with_id(
            id.to_string(),
            name.to_string(),
            format!("{name} things"),
        ))
        .await
        .unwrap();
}

async fn seed_item(store: &MemoryStore, id: &str, name: &str, category: &str, price: f64) {
    store
        .upsert_item(Item::new_with_id(
            id.to_string(),
            name.to_string(),
            "stocked".to_string(),
            vec![category.to_string()],
            price,
            None,
        ))
        .await
        .unwrap();
}

async fn seed_instance(store: &MemoryStore, id: &str, item: &str) {
    store
        .upsert_instance(ItemInstance::new_with_id(
            id.to_string(),
            item.to_string(),
            InstanceStatus::Available,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            None,
            None,
        ))
        .await
        .unwrap();
}

async fn instance_status(store: &MemoryStore, id: &str) -> InstanceStatus {
    store
        .get_instance(&id.to_string())
        .await
        .unwrap()
        .unwrap()
        .status
}

#[tokio::test]
async fn home_page_lists_and_searches_categories() {
    let store = Arc::new(MemoryStore::new());
    seed_category(&store, "cat-1", "Fasteners").await;
    seed_category(&store, "cat-2", "Paint").await;

    let (status, body) = get_page(app(&store), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Fasteners"));
    assert!(body.contains("Paint"));

    // Substring search, case-insensitive
    let (status, _, body) = post_form(app(&store), "/", "category=pAiN").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Paint"));
    assert!(!body.contains("Fasteners"));

    // Empty query goes back home
    let (status, location, _) = post_form(app(&store), "/", "category=").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/inventory"));

    // A miss re-renders with an inline error
    let (status, _, body) = post_form(app(&store), "/", "category=garden").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Category Not Found"));
}

#[tokio::test]
async fn category_crud_lifecycle() {
    let store = Arc::new(MemoryStore::new());

    let (status, location, _) = post_form(
        app(&store),
        "/inventory/category/create",
        "name=Fasteners&description=Screws+and+bolts",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    let location = location.unwrap();
    assert!(location.starts_with("/inventory/category/"));
    let id = id_from_location(&location);

    let (status, body) = get_page(app(&store), &location).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Fasteners"));
    assert!(body.contains("Screws and bolts"));

    let (status, location2, _) = post_form(
        app(&store),
        &format!("/inventory/category/{id}/update"),
        "name=Hardware&description=All+hardware",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location2.as_deref(), Some(location.as_str()));
    let (_, body) = get_page(app(&store), &location).await;
    assert!(body.contains("Hardware"));
    assert!(!body.contains("Fasteners"));

    let (status, body) = get_page(app(&store), "/inventory/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Hardware"));

    let (status, location3, _) = post_form(
        app(&store),
        &format!("/inventory/category/{id}/delete"),
        "",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location3.as_deref(), Some("/inventory/categories"));

    let (status, body) = get_page(app(&store), &location).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Category not found"));
}

#[tokio::test]
async fn category_validation_rerenders_the_form() {
    let store = Arc::new(MemoryStore::new());

    let (status, _, body) = post_form(
        app(&store),
        "/inventory/category/create",
        "name=&description=",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Name is required"));
    assert!(body.contains("Description is required"));
    assert!(store.list_categories().await.unwrap().is_empty());
}

#[tokio::test]
async fn category_delete_is_blocked_while_items_remain() {
    let store = Arc::new(MemoryStore::new());
    seed_category(&store, "cat-1", "Fasteners").await;
    seed_item(&store, "item-1", "Wood screw", "cat-1", 4.5).await;

    let (status, location, body) =
        post_form(app(&store), "/inventory/category/cat-1/delete", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(location, None);
    assert!(body.contains("Delete the following items"));
    assert!(body.contains("Wood screw"));
    assert!(store
        .get_category(&"cat-1".to_string())
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn item_crud_lifecycle_with_checkbox_categories() {
    let store = Arc::new(MemoryStore::new());
    seed_category(&store, "cat-1", "Fasteners").await;
    seed_category(&store, "cat-2", "Adhesives").await;

    let (status, location, _) = post_form(
        app(&store),
        "/inventory/item/create",
        "name=Anchor+kit&description=Anchors+with+screws&categories=cat-1&categories=cat-2&price=11.25&image=",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    let location = location.unwrap();
    let id = id_from_location(&location);

    let stored = store.get_item(&id).await.unwrap().unwrap();
    assert_eq!(stored.categories, vec!["cat-1", "cat-2"]);
    assert_eq!(stored.price, 11.25);
    assert_eq!(stored.image, None);

    let (status, body) = get_page(app(&store), &location).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Anchor kit"));
    assert!(body.contains("Fasteners"));
    assert!(body.contains("Adhesives"));
    assert!(body.contains("$11.25"));

    let (status, _, _) = post_form(
        app(&store),
        &format!("/inventory/item/{id}/update"),
        "name=Anchor+kit&description=Anchors+only&categories=cat-1&price=9.99&image=",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    let stored = store.get_item(&id).await.unwrap().unwrap();
    assert_eq!(stored.categories, vec!["cat-1"]);
    assert_eq!(stored.price, 9.99);

    let (status, location2, _) = post_form(
        app(&store),
        &format!("/inventory/item/{id}/delete"),
        "",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location2.as_deref(), Some("/inventory/items"));
    assert!(store.get_item(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn item_rejects_invalid_prices() {
    let store = Arc::new(MemoryStore::new());
    seed_category(&store, "cat-1", "Fasteners").await;

    let (status, _, body) = post_form(
        app(&store),
        "/inventory/item/create",
        "name=Wood+screw&description=A+screw&categories=cat-1&price=4.505&image=",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Price needs to be a valid currency"));
    assert!(store.list_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn item_delete_is_blocked_while_instances_remain() {
    let store = Arc::new(MemoryStore::new());
    seed_category(&store, "cat-1", "Fasteners").await;
    seed_item(&store, "item-1", "Wood screw", "cat-1", 4.5).await;
    seed_instance(&store, "inst-1", "item-1").await;

    let (status, location, body) =
        post_form(app(&store), "/inventory/item/item-1/delete", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(location, None);
    assert!(body.contains("Delete the following item instances"));
    assert!(store.get_item(&"item-1".to_string()).await.unwrap().is_some());
}

#[tokio::test]
async fn instance_crud_lifecycle() {
    let store = Arc::new(MemoryStore::new());
    seed_category(&store, "cat-1", "Fasteners").await;
    seed_item(&store, "item-1", "Wood screw", "cat-1", 4.5).await;

    let (status, location, _) = post_form(
        app(&store),
        "/inventory/iteminstance/create",
        "item=item-1&status=Available&import_date=2024-02-01&export_date=&details=Back+shelf",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    let location = location.unwrap();
    let id = id_from_location(&location);

    let (status, body) = get_page(app(&store), &location).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Wood screw"));
    assert!(body.contains("Imported: Feb 1, 2024"));
    assert!(body.contains("Back shelf"));

    let (status, _, _) = post_form(
        app(&store),
        &format!("/inventory/iteminstance/{id}/update"),
        "item=item-1&status=Shipped&import_date=2024-02-01&export_date=2024-03-05&details=",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    let stored = store.get_instance(&id).await.unwrap().unwrap();
    assert_eq!(stored.status, InstanceStatus::Shipped);
    assert_eq!(
        stored.export_date,
        Some(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
    );
    assert_eq!(stored.details, None);

    let (status, location2, _) = post_form(
        app(&store),
        &format!("/inventory/iteminstance/{id}/delete"),
        "",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location2.as_deref(), Some("/inventory/iteminstances"));
    assert!(store.get_instance(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn instance_rejects_bad_dates() {
    let store = Arc::new(MemoryStore::new());
    seed_category(&store, "cat-1", "Fasteners").await;
    seed_item(&store, "item-1", "Wood screw", "cat-1", 4.5).await;

    let (status, _, body) = post_form(
        app(&store),
        "/inventory/iteminstance/create",
        "item=item-1&status=Available&import_date=02%2F01%2F2024&export_date=&details=",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Invalid date"));
    assert!(store.list_instances().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_ids_render_the_not_found_page() {
    let store = Arc::new(MemoryStore::new());

    for (path, message) in [
        ("/inventory/category/nope", "Category not found"),
        ("/inventory/item/nope", "Item not found"),
        ("/inventory/iteminstance/nope", "Item Instance not found"),
        ("/inventory/order/nope", "Order not found"),
    ] {
        let (status, body) = get_page(app(&store), path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(body.contains(message), "{path}");
    }
}

async fn stocked_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    seed_category(&store, "cat-1", "Fasteners").await;
    seed_item(&store, "item-1", "Wood screw", "cat-1", 4.5).await;
    seed_item(&store, "item-2", "Wall paint", "cat-1", 10.0).await;
    seed_instance(&store, "inst-1", "item-1").await;
    seed_instance(&store, "inst-2", "item-1").await;
    seed_instance(&store, "inst-3", "item-2").await;
    store
}

#[tokio::test]
async fn order_create_prices_and_flags_members() {
    let store = stocked_store().await;

    let (status, body) = get_page(app(&store), "/inventory/order/create").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("value=\"inst-1\""));
    assert!(body.contains("value=\"inst-3\""));

    let (status, location, _) = post_form(
        app(&store),
        "/inventory/order/create",
        "instances=inst-1&instances=inst-3",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    let location = location.unwrap();
    let id = id_from_location(&location);

    let order = store.get_order(&id).await.unwrap().unwrap();
    assert_eq!(order.total, 14.5);
    assert_eq!(order.instances, vec!["inst-1", "inst-3"]);

    assert_eq!(instance_status(&store, "inst-1").await, InstanceStatus::Pending);
    assert_eq!(instance_status(&store, "inst-2").await, InstanceStatus::Available);
    assert_eq!(instance_status(&store, "inst-3").await, InstanceStatus::Pending);

    let (status, body) = get_page(app(&store), &location).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("$14.50"));
    assert!(body.contains("Wood screw"));
    assert!(body.contains("Wall paint"));
}

#[tokio::test]
async fn order_create_requires_a_selection() {
    let store = stocked_store().await;

    let (status, _, body) = post_form(app(&store), "/inventory/order/create", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Item Instances is required"));
    assert!(store.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn order_update_swaps_member_statuses() {
    let store = stocked_store().await;

    let (_, location, _) = post_form(
        app(&store),
        "/inventory/order/create",
        "instances=inst-1",
    )
    .await;
    let id = id_from_location(&location.unwrap());

    // The update form still offers the Pending member, pre-checked.
    let (status, body) =
        get_page(app(&store), &format!("/inventory/order/{id}/update")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("value=\"inst-1\" checked"));

    let (status, _, _) = post_form(
        app(&store),
        &format!("/inventory/order/{id}/update"),
        "instances=inst-3",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let order = store.get_order(&id).await.unwrap().unwrap();
    assert_eq!(order.instances, vec!["inst-3"]);
    assert_eq!(order.total, 10.0);
    assert_eq!(instance_status(&store, "inst-1").await, InstanceStatus::Available);
    assert_eq!(instance_status(&store, "inst-3").await, InstanceStatus::Pending);
}

#[tokio::test]
async fn order_delete_releases_members() {
    let store = stocked_store().await;

    let (_, location, _) = post_form(
        app(&store),
        "/inventory/order/create",
        "instances=inst-1&instances=inst-2",
    )
    .await;
    let id = id_from_location(&location.unwrap());

    let (status, location, _) = post_form(
        app(&store),
        &format!("/inventory/order/{id}/delete"),
        "",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/inventory/orders"));

    assert!(store.get_order(&id).await.unwrap().is_none());
    assert_eq!(instance_status(&store, "inst-1").await, InstanceStatus::Available);
    assert_eq!(instance_status(&store, "inst-2").await, InstanceStatus::Available);
}
