use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    dto::products::{CreateProductRequest, UpdateProductRequest},
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, PageInfo},
    routes::params::ListingParams,
    services::product_service::{self, NewProduct},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(list_products))
        .route("/", axum::routing::post(create_product))
        .route("/{code}", axum::routing::get(get_product))
        .route("/{code}", axum::routing::put(update_product))
        .route("/{code}", axum::routing::delete(delete_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("size" = Option<String>, Query, description = "Page size 1-100, default 10; junk values coerce to the default"),
        ("page" = Option<String>, Query, description = "Page number, default 1"),
        ("sort" = Option<String>, Query, description = "Sort column, default id"),
        ("dir" = Option<String>, Query, description = "ASC or DESC, default ASC"),
    ),
    responses(
        (status = 200, description = "Paginated product listing", body = ApiResponse<Vec<Product>>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    tracing::info!("retrieving product listing");
    let query = params.normalize();

    let (rows, total) = product_service::find_page(&state.orm, &query)
        .await
        .map_err(AppError::store("Fail retrieving data!"))?;

    let pagination = PageInfo::new(query.page, query.size, total);
    Ok(Json(ApiResponse::page(rows, pagination)))
}

#[utoipa::path(
    get,
    path = "/api/products/{code}",
    params(
        ("code" = String, Path, description = "Product code")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<Product>),
        (status = 400, description = "Empty product code"),
        (status = 404, description = "No product with that code"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<ApiResponse<Product>>> {
    if code.trim().is_empty() {
        return Err(AppError::BadRequest("Product code is required.".into()));
    }

    let product = product_service::find_by_code(&state.orm, &code)
        .await
        .map_err(AppError::store("Error retrieving product data!"))?
        .ok_or_else(AppError::not_found)?;

    Ok(Json(ApiResponse::data(product)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<Product>),
        (status = 400, description = "Required fields missing"),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let missing = payload.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "The following fields are required: {}.",
            missing.join(", ")
        )));
    }

    let new = NewProduct {
        code: payload.code.unwrap_or_default(),
        name: payload.name.unwrap_or_default(),
        category: payload.category.unwrap_or_default(),
        brand: payload.brand,
        kind: payload.kind,
        description: payload.description.unwrap_or_default(),
    };

    let product = product_service::create(&state.orm, new)
        .await
        .map_err(AppError::store("Error creating product!"))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data_with_message(
            "Product created successfully.",
            product,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/products/{code}",
    params(
        ("code" = String, Path, description = "Product code")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<Product>),
        (status = 400, description = "No updatable field provided"),
        (status = 404, description = "No product with that code"),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<UpdateProductRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    if payload.is_empty() {
        return Err(AppError::BadRequest(
            "At least one field (name, category, brand, type, description) must be provided to update."
                .into(),
        ));
    }

    let rows = product_service::update_by_code(&state.orm, &code, payload.into_patch())
        .await
        .map_err(AppError::store("Error updating product!"))?;
    if rows == 0 {
        return Err(AppError::not_found());
    }

    Ok(Json(ApiResponse::message("Product updated successfully.")))
}

#[utoipa::path(
    delete,
    path = "/api/products/{code}",
    params(
        ("code" = String, Path, description = "Product code")
    ),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<Product>),
        (status = 404, description = "No product with that code"),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let rows = product_service::delete_by_code(&state.orm, &code)
        .await
        .map_err(AppError::store("Error deleting product!"))?;
    if rows == 0 {
        return Err(AppError::not_found());
    }

    Ok(Json(ApiResponse::message("Product deleted successfully.")))
}
