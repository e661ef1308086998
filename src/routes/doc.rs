use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::search::{FieldError, Filter, SearchResponse},
    models::Product,
    response::{ErrorBody, ErrorDetails, ErrorPayload},
    routes::products,
};

#[derive(OpenApi)]
#[openapi(
    paths(products::search_products),
    components(
        schemas(
            Product,
            Filter,
            FieldError,
            SearchResponse,
            ErrorBody,
            ErrorPayload,
            ErrorDetails
        )
    ),
    tags(
        (name = "Products", description = "Catalog search"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
