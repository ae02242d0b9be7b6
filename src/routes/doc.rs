use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::products,
    models::Product,
    response::{ApiResponse, PageInfo},
    routes::{health, products as product_routes},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        product_routes::list_products,
        product_routes::get_product,
        product_routes::create_product,
        product_routes::update_product,
        product_routes::delete_product,
    ),
    components(
        schemas(
            Product,
            products::CreateProductRequest,
            products::UpdateProductRequest,
            PageInfo,
            ApiResponse<Product>,
            ApiResponse<Vec<Product>>,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product catalog endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
