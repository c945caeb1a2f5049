use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::api::{
    category_handlers, handlers, instance_handlers, item_handlers, order_handlers,
};
use crate::store::traits::Store;

pub fn create_router<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Home page and category search
        .route(
            "/",
            get(handlers::home::<S>).post(handlers::search_categories::<S>),
        )
        .route("/inventory", get(handlers::home::<S>))
        // Category routes
        .route(
            "/inventory/categories",
            get(category_handlers::category_list::<S>),
        )
        .route(
            "/inventory/category/create",
            get(category_handlers::category_create_get)
                .post(category_handlers::category_create_post::<S>),
        )
        .route(
            "/inventory/category/:id",
            get(category_handlers::category_detail::<S>),
        )
        .route(
            "/inventory/category/:id/update",
            get(category_handlers::category_update_get::<S>)
                .post(category_handlers::category_update_post::<S>),
        )
        .route(
            "/inventory/category/:id/delete",
            get(category_handlers::category_delete_get::<S>)
                .post(category_handlers::category_delete_post::<S>),
        )
        // Item routes
        .route("/inventory/items", get(item_handlers::item_list::<S>))
        .route(
            "/inventory/item/create",
            get(item_handlers::item_create_get::<S>).post(item_handlers::item_create_post::<S>),
        )
        .route("/inventory/item/:id", get(item_handlers::item_detail::<S>))
        .route(
            "/inventory/item/:id/update",
            get(item_handlers::item_update_get::<S>).post(item_handlers::item_update_post::<S>),
        )
        .route(
            "/inventory/item/:id/delete",
            get(item_handlers::item_delete_get::<S>).post(item_handlers::item_delete_post::<S>),
        )
        // Item instance routes
        .route(
            "/inventory/iteminstances",
            get(instance_handlers::instance_list::<S>),
        )
        .route(
            "/inventory/iteminstance/create",
            get(instance_handlers::instance_create_get::<S>)
                .post(instance_handlers::instance_create_post::<S>),
        )
        .route(
            "/inventory/iteminstance/:id",
            get(instance_handlers::instance_detail::<S>),
        )
        .route(
            "/inventory/iteminstance/:id/update",
            get(instance_handlers::instance_update_get::<S>)
                .post(instance_handlers::instance_update_post::<S>),
        )
        .route(
            "/inventory/iteminstance/:id/delete",
            get(instance_handlers::instance_delete_get::<S>)
                .post(instance_handlers::instance_delete_post::<S>),
        )
        // Order routes
        .route("/inventory/orders", get(order_handlers::order_list::<S>))
        .route(
            "/inventory/order/create",
            get(order_handlers::order_create_get::<S>).post(order_handlers::order_create_post::<S>),
        )
        .route(
            "/inventory/order/:id",
            get(order_handlers::order_detail::<S>),
        )
        .route(
            "/inventory/order/:id/update",
            get(order_handlers::order_update_get::<S>).post(order_handlers::order_update_post::<S>),
        )
        .route(
            "/inventory/order/:id/delete",
            get(order_handlers::order_delete_get::<S>).post(order_handlers::order_delete_post::<S>),
        )
        // Item images and other static assets
        .nest_service("/public", ServeDir::new("public"))
}
