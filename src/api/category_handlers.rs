use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::api::forms::CategoryForm;
use crate::api::handlers::{internal_error, not_found, AppState, PageError};
use crate::logic::validate_category;
use crate::model::Id;
use crate::store::traits::{CategoryStore, ItemStore, Store};
use crate::views;

pub async fn category_list<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Html<String>, PageError> {
    let categories = store.list_categories().await.map_err(internal_error)?;
    Ok(Html(views::category::list_page(&categories)))
}

pub async fn category_detail<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, PageError> {
    let category = store
        .get_category(&id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Category not found: {id}");
            not_found("Category")
        })?;
    Ok(Html(views::category::detail_page(&category)))
}

pub async fn category_create_get() -> Html<String> {
    Html(views::category::form_page(
        "Create Category",
        &CategoryForm::default(),
        &[],
    ))
}

pub async fn category_create_post<S: Store>(
    State(store): State<AppState<S>>,
    Form(form): Form<CategoryForm>,
) -> Result<Response, PageError> {
    match validate_category(&form) {
        Err(errors) => {
            log::debug!("Validation error(s) for category {:?}", form.name);
            Ok(
                Html(views::category::form_page("Create Category", &form, &errors))
                    .into_response(),
            )
        }
        Ok(input) => {
            let category = input.into_category();
            store
                .upsert_category(category.clone())
                .await
                .map_err(internal_error)?;
            log::debug!("Created new category: {}", category.id);
            Ok(Redirect::to(&category.url()).into_response())
        }
    }
}

pub async fn category_update_get<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, PageError> {
    let category = store
        .get_category(&id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Category to update not found: {id}");
            not_found("Category")
        })?;
    let form = CategoryForm {
        name: category.name,
        description: category.description,
    };
    Ok(Html(views::category::form_page(
        "Update Category",
        &form,
        &[],
    )))
}

pub async fn category_update_post<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
    Form(form): Form<CategoryForm>,
) -> Result<Response, PageError> {
    match validate_category(&form) {
        Err(errors) => {
            log::debug!("Validation error(s) for category {:?}", form.name);
            Ok(
                Html(views::category::form_page("Update Category", &form, &errors))
                    .into_response(),
            )
        }
        Ok(input) => {
            if store
                .get_category(&id)
                .await
                .map_err(internal_error)?
                .is_none()
            {
                log::debug!("Category to update not found: {id}");
                return Err(not_found("Category"));
            }
            let category = input.into_category_with_id(id);
            store
                .upsert_category(category.clone())
                .await
                .map_err(internal_error)?;
            log::debug!("Updated category: {}", category.id);
            Ok(Redirect::to(&category.url()).into_response())
        }
    }
}

pub async fn category_delete_get<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, PageError> {
    let category = store
        .get_category(&id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Category to delete not found: {id}");
            not_found("Category")
        })?;
    let items = store
        .find_items_in_category(&id)
        .await
        .map_err(internal_error)?;
    Ok(Html(views::category::delete_page(&category, &items)))
}

/// Deletion is blocked by re-rendering the confirmation page while dependent
/// items remain.
pub async fn category_delete_post<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Response, PageError> {
    let category = store
        .get_category(&id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            log::debug!("Category to delete not found: {id}");
            not_found("Category")
        })?;
    let items = store
        .find_items_in_category(&id)
        .await
        .map_err(internal_error)?;

    if !items.is_empty() {
        log::debug!("Items exist for category delete: {id}");
        return Ok(Html(views::category::delete_page(&category, &items)).into_response());
    }

    store.delete_category(&id).await.map_err(internal_error)?;
    log::debug!("Deleted category: {id}");
    Ok(Redirect::to("/inventory/categories").into_response())
}
