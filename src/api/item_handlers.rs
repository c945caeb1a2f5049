use axum::extract::{Path, RawForm, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::api::forms::{parse_pairs, ItemForm};
use crate::api::handlers::{internal_error, not_found, AppState, PageError};
use crate::logic::validate_item;
use crate::model::{Category, Id, Item};
use crate::store::traits::{CategoryStore, ItemInstanceStore, ItemStore, Store};
use crate::views;

pub async fn item_list<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Html<String>, PageError> {
    let items = store.list_items().await.map_err(internal_error)?;
    Ok(Html(views::item::list_page(&items)))
}

pub async fn item_detail<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, PageError> {
    let item = store
        .get_item(&id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Item not found: {id}");
            not_found("Item")
        })?;
    let categories = resolve_categories(&store, &item).await?;
    Ok(Html(views::item::detail_page(&item, &categories)))
}

pub async fn item_create_get<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Html<String>, PageError> {
    let categories = store.list_categories().await.map_err(internal_error)?;
    Ok(Html(views::item::form_page(
        "Create Item",
        &ItemForm::default(),
        &categories,
        &[],
    )))
}

pub async fn item_create_post<S: Store>(
    State(store): State<AppState<S>>,
    RawForm(body): RawForm,
) -> Result<Response, PageError> {
    let form = ItemForm::from_pairs(parse_pairs(&body).map_err(internal_error)?);
    match validate_item(&form) {
        Err(errors) => {
            log::debug!("Validation error(s) for item {:?}", form.name);
            let categories = store.list_categories().await.map_err(internal_error)?;
            Ok(
                Html(views::item::form_page("Create Item", &form, &categories, &errors))
                    .into_response(),
            )
        }
        Ok(input) => {
            let item = input.into_item();
            store.upsert_item(item.clone()).await.map_err(internal_error)?;
            log::debug!("Created new item: {}", item.id);
            Ok(Redirect::to(&item.url()).into_response())
        }
    }
}

pub async fn item_update_get<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, PageError> {
    let item = store
        .get_item(&id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Item to update not found: {id}");
            not_found("Item")
        })?;
    let categories = store.list_categories().await.map_err(internal_error)?;
    let form = ItemForm {
        name: item.name,
        description: item.description,
        categories: item.categories,
        price: format!("{:.2}", item.price),
        image: item.image.unwrap_or_default(),
    };
    Ok(Html(views::item::form_page(
        "Update Item",
        &form,
        &categories,
        &[],
    )))
}

pub async fn item_update_post<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
    RawForm(body): RawForm,
) -> Result<Response, PageError> {
    let form = ItemForm::from_pairs(parse_pairs(&body).map_err(internal_error)?);
    match validate_item(&form) {
        Err(errors) => {
            log::debug!("Validation error(s) for item {:?}", form.name);
            let categories = store.list_categories().await.map_err(internal_error)?;
            Ok(
                Html(views::item::form_page("Update Item", &form, &categories, &errors))
                    .into_response(),
            )
        }
        Ok(input) => {
            if store.get_item(&id).await.map_err(internal_error)?.is_none() {
                log::debug!("Item to update not found: {id}");
                return Err(not_found("Item"));
            }
            let item = input.into_item_with_id(id);
            store.upsert_item(item.clone()).await.map_err(internal_error)?;
            log::debug!("Updated item: {}", item.id);
            Ok(Redirect::to(&item.url()).into_response())
        }
    }
}

pub async fn item_delete_get<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, PageError> {
    let item = store
        .get_item(&id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Item to delete not found: {id}");
            not_found("Item")
        })?;
    let instances = store
        .find_instances_of_item(&id)
        .await
        .map_err(internal_error)?;
    Ok(Html(views::item::delete_page(&item, &instances)))
}

/// Deletion is blocked by re-rendering the confirmation page while stock
/// units of the item remain.
pub async fn item_delete_post<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Response, PageError> {
    let item = store
        .get_item(&id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Item to delete not found: {id}");
            not_found("Item")
        })?;
    let instances = store
        .find_instances_of_item(&id)
        .await
        .map_err(internal_error)?;

    if !instances.is_empty() {
        log::debug!("Instances exist for item delete: {id}");
        return Ok(Html(views::item::delete_page(&item, &instances)).into_response());
    }

    store.delete_item(&id).await.map_err(internal_error)?;
    log::debug!("Deleted item: {id}");
    Ok(Redirect::to("/inventory/items").into_response())
}

async fn resolve_categories<S: Store>(
    store: &AppState<S>,
    item: &Item,
) -> Result<Vec<Category>, PageError> {
    let mut categories = Vec::with_capacity(item.categories.len());
    for category_id in &item.categories {
        if let Some(category) = store
            .get_category(category_id)
            .await
            .map_err(internal_error)?
        {
            categories.push(category);
        }
    }
    Ok(categories)
}
