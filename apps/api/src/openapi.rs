//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Book Trade API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Trade API",
        version = "0.1.0",
        description = "User registration with CEP-resolved addresses and JWT authentication",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    components(
        schemas(
            domain_users::RegisterUser,
            domain_users::UserPublic,
            domain_users::LoginRequest,
            domain_users::TokenResponse,
        )
    ),
    tags(
        (name = "Users", description = "User registration and lookup endpoints"),
        (name = "Auth", description = "Authentication endpoints")
    )
)]
pub struct ApiDoc;
