//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use axum_helpers::{
    JsonBody,
    errors::responses::{BadRequestJsonResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{AddProductRequest, ProductResponse};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Mount point of [`router`]
pub const URL: &str = "/products";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(add_product, get_products),
    components(
        schemas(AddProductRequest, ProductResponse),
        responses(BadRequestJsonResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Products", description = "Product catalogue endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router; nest it under [`URL`].
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/addproduct", post(add_product::<R>))
        .route("/getproducts", get(get_products::<R>))
        .with_state(shared_service)
}

/// Add a product
///
/// The identity is assigned by storage; an `id` in the body is ignored.
#[utoipa::path(
    post,
    path = "/addproduct",
    tag = "Products",
    request_body = AddProductRequest,
    responses(
        (status = 200, description = "Product stored", body = ProductResponse),
        (status = 400, response = BadRequestJsonResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(request): JsonBody<AddProductRequest>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.add_product(request).await?;
    Ok(Json(product))
}

/// List every product
#[utoipa::path(
    get,
    path = "/getproducts",
    tag = "Products",
    responses(
        (status = 200, description = "All products, empty when none exist", body = Vec<ProductResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<ProductResponse>>> {
    let products = service.get_products().await?;
    Ok(Json(products))
}
