use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct WelcomeDoc { pub message: String, pub port: String }

#[derive(ToSchema)]
pub struct ItemDoc { pub id: String, pub value: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::home::home,
        crate::routes::items::create_item,
        crate::routes::items::read_item,
        crate::routes::items::update_item,
        crate::routes::items::delete_item,
    ),
    components(
        schemas(
            HealthResponse,
            WelcomeDoc,
            ItemDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "crud")
    )
)]
pub struct ApiDoc;
