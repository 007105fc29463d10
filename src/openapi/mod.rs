use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::dto::{OrderCreateRequest, OrderResponse};
use crate::errors::ErrorResponse;
use crate::handlers::{health, orders, root};

/// Route serving the Swagger UI.
pub const DOCS_PATH: &str = "/docs";
/// Route serving the raw OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dairy Sales API",
        version = "1.0.0",
        description = r#"
Records sales orders of dairy products placed by supermarkets with vendors.

Reference data (vendors, supermarkets, purchasing representatives, payment
methods, products) is loaded outside this API. Creating an order only
succeeds when every referenced row already exists.

Every response carries an `x-request-id` header; error bodies repeat it.
        "#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        root::welcome,
        health::health_check,
        orders::create_order,
        orders::list_orders,
    ),
    components(schemas(
        OrderCreateRequest,
        OrderResponse,
        ErrorResponse,
        root::WelcomeResponse,
        health::HealthResponse,
        health::ComponentStatus,
    )),
    tags(
        (name = "Orders", description = "Order registration and listing"),
        (name = "Health", description = "Service status"),
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(DOCS_PATH)
        .url(OPENAPI_JSON_PATH, ApiDoc::openapi())
        .config(utoipa_swagger_ui::Config::from(OPENAPI_JSON_PATH).try_it_out_enabled(true))
}
