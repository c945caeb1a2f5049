use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::api::forms::InstanceForm;
use crate::api::handlers::{internal_error, not_found, AppState, PageError};
use crate::logic::validate_instance;
use crate::model::{Id, Item, ItemInstance};
use crate::store::traits::{ItemInstanceStore, ItemStore, OrderStore, Store};
use crate::views;

pub async fn instance_list<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Html<String>, PageError> {
    let instances = store.list_instances().await.map_err(internal_error)?;
    let rows = with_items(&store, instances).await?;
    Ok(Html(views::instance::list_page(&rows)))
}

pub async fn instance_detail<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, PageError> {
    let instance = store
        .get_instance(&id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Item instance not found: {id}");
            not_found("Item Instance")
        })?;
    let item = store
        .get_item(&instance.item)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Item not found for instance {id}: {}", instance.item);
            not_found("Item")
        })?;
    Ok(Html(views::instance::detail_page(&instance, &item)))
}

pub async fn instance_create_get<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Html<String>, PageError> {
    let items = store.list_items().await.map_err(internal_error)?;
    Ok(Html(views::instance::form_page(
        "Create Item Instance",
        &InstanceForm::default(),
        &items,
        &[],
    )))
}

pub async fn instance_create_post<S: Store>(
    State(store): State<AppState<S>>,
    Form(form): Form<InstanceForm>,
) -> Result<Response, PageError> {
    match validate_instance(&form) {
        Err(errors) => {
            log::debug!("Validation error(s) for item instance");
            let items = store.list_items().await.map_err(internal_error)?;
            Ok(Html(views::instance::form_page(
                "Create Item Instance",
                &form,
                &items,
                &errors,
            ))
            .into_response())
        }
        Ok(input) => {
            let instance = input.into_instance();
            store
                .upsert_instance(instance.clone())
                .await
                .map_err(internal_error)?;
            log::debug!("Created new item instance: {}", instance.id);
            Ok(Redirect::to(&instance.url()).into_response())
        }
    }
}

pub async fn instance_update_get<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, PageError> {
    let instance = store
        .get_instance(&id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Item instance to update not found: {id}");
            not_found("Item Instance")
        })?;
    let items = store.list_items().await.map_err(internal_error)?;
    let form = InstanceForm {
        item: instance.item.clone(),
        status: instance.status.as_str().to_string(),
        import_date: instance.import_date_value(),
        export_date: instance.export_date_value(),
        details: instance.details.clone().unwrap_or_default(),
    };
    Ok(Html(views::instance::form_page(
        "Update Item Instance",
        &form,
        &items,
        &[],
    )))
}

pub async fn instance_update_post<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
    Form(form): Form<InstanceForm>,
) -> Result<Response, PageError> {
    match validate_instance(&form) {
        Err(errors) => {
            log::debug!("Validation error(s) for item instance {id}");
            let items = store.list_items().await.map_err(internal_error)?;
            Ok(Html(views::instance::form_page(
                "Update Item Instance",
                &form,
                &items,
                &errors,
            ))
            .into_response())
        }
        Ok(input) => {
            if store
                .get_instance(&id)
                .await
                .map_err(internal_error)?
                .is_none()
            {
                log::debug!("Item instance to update not found: {id}");
                return Err(not_found("Item Instance"));
            }
            let instance = input.into_instance_with_id(id);
            store
                .upsert_instance(instance.clone())
                .await
                .map_err(internal_error)?;
            log::debug!("Updated item instance: {}", instance.id);
            Ok(Redirect::to(&instance.url()).into_response())
        }
    }
}

pub async fn instance_delete_get<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, PageError> {
    let instance = store
        .get_instance(&id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Item instance to delete not found: {id}");
            not_found("Item Instance")
        })?;
    let orders = store
        .find_orders_containing(&id)
        .await
        .map_err(internal_error)?;
    Ok(Html(views::instance::delete_page(&instance, &orders)))
}

pub async fn instance_delete_post<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Response, PageError> {
    if store
        .get_instance(&id)
        .await
        .map_err(internal_error)?
        .is_none()
    {
        log::debug!("Item instance to delete not found: {id}");
        return Err(not_found("Item Instance"));
    }
    store.delete_instance(&id).await.map_err(internal_error)?;
    log::debug!("Deleted item instance: {id}");
    Ok(Redirect::to("/inventory/iteminstances").into_response())
}

pub(crate) async fn with_items<S: Store>(
    store: &AppState<S>,
    instances: Vec<ItemInstance>,
) -> Result<Vec<(ItemInstance, Option<Item>)>, PageError> {
    let mut rows = Vec::with_capacity(instances.len());
    for instance in instances {
        let item = store
            .get_item(&instance.item)
            .await
            .map_err(internal_error)?;
        rows.push((instance, item));
    }
    Ok(rows)
}
