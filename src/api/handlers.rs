use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::api::forms::SearchForm;
use crate::store::traits::{CategoryStore, Store};
use crate::views;

pub type AppState<S> = Arc<S>;

/// A failed page: the status plus the rendered error body.
pub type PageError = (StatusCode, Html<String>);

pub(crate) fn internal_error(err: anyhow::Error) -> PageError {
    log::error!("request failed: {err:#}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(views::error_page(
            "Something went wrong while talking to the store.",
        )),
    )
}

pub(crate) fn not_found(kind: &str) -> PageError {
    (
        StatusCode::NOT_FOUND,
        Html(views::not_found_page(&format!("{kind} not found"))),
    )
}

/// Home page: every category, sorted by name, plus the search box.
pub async fn home<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Html<String>, PageError> {
    let categories = store.list_categories().await.map_err(internal_error)?;
    Ok(Html(views::home_page(&categories, None, None)))
}

/// Category search from the home page. An empty query goes back home; a miss
/// re-renders the page with an inline error.
pub async fn search_categories<S: Store>(
    State(store): State<AppState<S>>,
    Form(form): Form<SearchForm>,
) -> Result<Response, PageError> {
    let query = form.category.trim();
    if query.is_empty() {
        return Ok(Redirect::to("/inventory").into_response());
    }

    let matches = store
        .search_categories(query)
        .await
        .map_err(internal_error)?;
    if matches.is_empty() {
        log::debug!("No results for searched category: {query}");
        return Ok(
            Html(views::home_page(&[], Some(query), Some("Category Not Found"))).into_response(),
        );
    }

    log::debug!("Searched for category: {query}");
    Ok(Html(views::home_page(&matches, Some(query), None)).into_response())
}
