use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Masjid directory
        crate::api::routes::masjids::list_masjids,
        crate::api::routes::masjids::get_masjid,
        crate::api::routes::masjids::add_masjid,
        crate::api::routes::masjids::update_masjid,
        crate::api::routes::masjids::delete_masjid,
        crate::api::routes::masjids::delete_all_masjids,
        crate::api::routes::masjids::bulk_create_masjids,
        // Health check
        crate::api::routes::health,
        crate::api::routes::ready,
    ),
    components(
        schemas(
            crate::api::dtos::masjid_dto::CreateMasjidRequest,
            crate::api::dtos::masjid_dto::UpdateMasjidRequest,
            crate::api::dtos::masjid_dto::MasjidResponse,
            crate::api::dtos::masjid_dto::MessageResponse,
            crate::api::dtos::masjid_dto::MasjidCreatedResponse,
            crate::api::dtos::masjid_dto::BulkMasjidsCreatedResponse,
            crate::api::dtos::common::ErrorResponse,
            crate::api::dtos::common::RouteNotFoundResponse,
        )
    ),
    tags(
        (name = "masjids", description = "Masjid directory and Jumu'ah times"),
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "Masjid Directory API",
        version = "0.1.0",
        description = "Masjid listing with prayer times, ranked by distance from the caller",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;
