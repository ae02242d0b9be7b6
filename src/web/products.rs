//! Browser-facing handlers. Writes redirect back into the catalog with a
//! one-shot flash; not-found never surfaces as an error page, it bounces to
//! the listing with an error flash. Validation failures re-render the form
//! inline instead of redirecting.

use axum::{
    Form, Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    dto::products::{CreateProductRequest, UpdateProductRequest},
    response::PageInfo,
    routes::params::ListingParams,
    services::product_service::{self, NewProduct},
    state::AppState,
    web::{
        flash::{Flash, set_flash, take_flash},
        views,
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/products/new", get(new_form))
        .route("/products", post(store))
        .route("/products/{code}", get(show))
        .route("/products/{code}/edit", get(edit))
        .route("/products/{code}", post(update))
        .route("/products/{code}/delete", post(destroy))
}

async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
    jar: CookieJar,
) -> Response {
    let query = params.normalize();

    match product_service::find_page(&state.orm, &query).await {
        Ok((rows, total)) => {
            let pagination = PageInfo::new(query.page, query.size, total);
            let (jar, flash) = take_flash(jar);
            let html = views::index(&rows, &query, &pagination, flash.as_ref());
            (jar, Html(html)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "listing retrieval failed");
            let failure = Flash::error("Failed to retrieve records.");
            let html = views::index(&[], &query, &PageInfo::new(1, 10, 0), Some(&failure));
            Html(html).into_response()
        }
    }
}

async fn new_form() -> Html<String> {
    Html(views::create_form(None))
}

async fn store(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(payload): Form<CreateProductRequest>,
) -> Response {
    if !payload.missing_fields().is_empty() {
        return Html(views::create_form(Some(
            "Please fill in all required fields.",
        )))
        .into_response();
    }

    let new = NewProduct {
        code: payload.code.unwrap_or_default(),
        name: payload.name.unwrap_or_default(),
        category: payload.category.unwrap_or_default(),
        brand: payload.brand.filter(|b| !b.is_empty()),
        kind: payload.kind.filter(|k| !k.is_empty()),
        description: payload.description.unwrap_or_default(),
    };

    match product_service::create(&state.orm, new).await {
        Ok(_) => {
            let jar = set_flash(jar, Flash::success("Product created successfully!"));
            (jar, Redirect::to("/")).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "product creation failed");
            Html(views::create_form(Some(
                "An error occurred while creating the product. Please try again.",
            )))
            .into_response()
        }
    }
}

async fn show(State(state): State<AppState>, jar: CookieJar, Path(code): Path<String>) -> Response {
    match product_service::find_by_code(&state.orm, &code).await {
        Ok(Some(product)) => {
            let (jar, flash) = take_flash(jar);
            (jar, Html(views::show(&product, flash.as_ref()))).into_response()
        }
        Ok(None) => not_found_redirect(jar),
        Err(err) => {
            tracing::error!(error = %err, "product retrieval failed");
            Html(views::error_page("Failed to retrieve product details.")).into_response()
        }
    }
}

async fn edit(State(state): State<AppState>, jar: CookieJar, Path(code): Path<String>) -> Response {
    match product_service::find_by_code(&state.orm, &code).await {
        Ok(Some(product)) => {
            let (jar, _) = take_flash(jar);
            (jar, Html(views::edit_form(&product, None))).into_response()
        }
        Ok(None) => not_found_redirect(jar),
        Err(err) => {
            tracing::error!(error = %err, "product retrieval failed");
            Html(views::error_page("Failed to retrieve product for editing.")).into_response()
        }
    }
}

async fn update(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(code): Path<String>,
    Form(payload): Form<UpdateProductRequest>,
) -> Response {
    // An all-empty submission produces an empty patch; that is a validation
    // problem, not a missing record, so re-render the form instead of
    // letting the gateway's zero-rows result read as not-found.
    let patch = payload.into_patch();
    if patch.is_empty() {
        return match product_service::find_by_code(&state.orm, &code).await {
            Ok(Some(product)) => Html(views::edit_form(
                &product,
                Some("At least one field must be provided to update."),
            ))
            .into_response(),
            Ok(None) => not_found_redirect(jar),
            Err(err) => {
                tracing::error!(error = %err, "product retrieval failed");
                Html(views::error_page("Failed to update product.")).into_response()
            }
        };
    }

    match product_service::update_by_code(&state.orm, &code, patch).await {
        Ok(0) => not_found_redirect(jar),
        Ok(_) => {
            let jar = set_flash(jar, Flash::success("Product updated successfully!"));
            (jar, Redirect::to(&format!("/products/{code}"))).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "product update failed");
            Html(views::error_page("Failed to update product.")).into_response()
        }
    }
}

async fn destroy(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(code): Path<String>,
) -> Response {
    match product_service::delete_by_code(&state.orm, &code).await {
        Ok(0) => not_found_redirect(jar),
        Ok(_) => {
            let jar = set_flash(jar, Flash::success("Product deleted successfully!"));
            (jar, Redirect::to("/")).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "product deletion failed");
            Html(views::error_page("Failed to delete product.")).into_response()
        }
    }
}

fn not_found_redirect(jar: CookieJar) -> Response {
    let jar = set_flash(jar, Flash::error("Product not found."));
    (jar, Redirect::to("/")).into_response()
}
