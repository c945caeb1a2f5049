use axum::extract::{Path, RawForm, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::api::forms::{parse_pairs, OrderForm};
use crate::api::handlers::{internal_error, not_found, AppState, PageError};
use crate::api::instance_handlers::with_items;
use crate::logic::{place_order, release_order, replace_order, validate_order};
use crate::model::{Id, InstanceStatus, ItemInstance, Order};
use crate::store::traits::{ItemInstanceStore, OrderStore, Store};
use crate::views;

pub async fn order_list<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Html<String>, PageError> {
    let orders = store.list_orders().await.map_err(internal_error)?;
    Ok(Html(views::order::list_page(&orders)))
}

pub async fn order_detail<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, PageError> {
    let order = store
        .get_order(&id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Order not found: {id}");
            not_found("Order")
        })?;
    let members = member_instances(&store, &order).await?;
    let rows = with_items(&store, members).await?;
    Ok(Html(views::order::detail_page(&order, &rows)))
}

pub async fn order_create_get<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Html<String>, PageError> {
    let available = store
        .find_instances_by_status(InstanceStatus::Available)
        .await
        .map_err(internal_error)?;
    let rows = with_items(&store, available).await?;
    Ok(Html(views::order::form_page("Create Order", &rows, &[], &[])))
}

pub async fn order_create_post<S: Store>(
    State(store): State<AppState<S>>,
    RawForm(body): RawForm,
) -> Result<Response, PageError> {
    let form = OrderForm::from_pairs(parse_pairs(&body).map_err(internal_error)?);
    match validate_order(&form) {
        Err(errors) => {
            log::debug!("Validation error(s) for order");
            let available = store
                .find_instances_by_status(InstanceStatus::Available)
                .await
                .map_err(internal_error)?;
            let rows = with_items(&store, available).await?;
            Ok(
                Html(views::order::form_page("Create Order", &rows, &form.instances, &errors))
                    .into_response(),
            )
        }
        Ok(instance_ids) => {
            let order = place_order(&*store, instance_ids)
                .await
                .map_err(internal_error)?;
            log::debug!("Created new order: {}", order.id);
            Ok(Redirect::to(&order.url()).into_response())
        }
    }
}

pub async fn order_update_get<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, PageError> {
    let order = store
        .get_order(&id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Order to update not found: {id}");
            not_found("Order")
        })?;
    let selectable = selectable_instances(&store, &order).await?;
    let rows = with_items(&store, selectable).await?;
    Ok(Html(views::order::form_page(
        "Update Order",
        &rows,
        &order.instances,
        &[],
    )))
}

pub async fn order_update_post<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
    RawForm(body): RawForm,
) -> Result<Response, PageError> {
    let order = store
        .get_order(&id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Order to update not found: {id}");
            not_found("Order")
        })?;

    let form = OrderForm::from_pairs(parse_pairs(&body).map_err(internal_error)?);
    match validate_order(&form) {
        Err(errors) => {
            log::debug!("Validation error(s) for order {id}");
            let selectable = selectable_instances(&store, &order).await?;
            let rows = with_items(&store, selectable).await?;
            Ok(
                Html(views::order::form_page("Update Order", &rows, &form.instances, &errors))
                    .into_response(),
            )
        }
        Ok(instance_ids) => {
            let updated = replace_order(&*store, &order, instance_ids)
                .await
                .map_err(internal_error)?;
            log::debug!("Updated order: {}", updated.id);
            Ok(Redirect::to(&updated.url()).into_response())
        }
    }
}

pub async fn order_delete_get<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, PageError> {
    let order = store
        .get_order(&id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Order to delete not found: {id}");
            not_found("Order")
        })?;
    Ok(Html(views::order::delete_page(&order)))
}

pub async fn order_delete_post<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Response, PageError> {
    let order = store
        .get_order(&id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Order to delete not found: {id}");
            not_found("Order")
        })?;

    release_order(&*store, &order).await.map_err(internal_error)?;
    log::debug!("Updated order item instances to available: {id}");
    log::debug!("Deleted order: {id}");
    Ok(Redirect::to("/inventory/orders").into_response())
}

async fn member_instances<S: Store>(
    store: &AppState<S>,
    order: &Order,
) -> Result<Vec<ItemInstance>, PageError> {
    let mut members = Vec::with_capacity(order.instances.len());
    for instance_id in &order.instances {
        if let Some(instance) = store
            .get_instance(instance_id)
            .await
            .map_err(internal_error)?
        {
            members.push(instance);
        }
    }
    Ok(members)
}

/// What the update form offers: everything Available plus the order's own
/// members (normally Pending), ordered by item like the create form.
async fn selectable_instances<S: Store>(
    store: &AppState<S>,
    order: &Order,
) -> Result<Vec<ItemInstance>, PageError> {
    let mut selectable = store
        .find_instances_by_status(InstanceStatus::Available)
        .await
        .map_err(internal_error)?;
    for member in member_instances(store, order).await? {
        if !selectable.iter().any(|instance| instance.id == member.id) {
            selectable.push(member);
        }
    }
    selectable.sort_by(|a, b| a.item.cmp(&b.item));
    Ok(selectable)
}
