use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::api::dtos::{
    BulkMasjidsCreatedResponse, CreateMasjidRequest, MasjidCreatedResponse, MasjidListQuery,
    MessageResponse, UpdateMasjidRequest,
};
use crate::api::routes::{api_not_found, AppState};
use crate::application::user_position;
use crate::error::{AppError, AppResult};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/public/masjids")
            .app_data(
                web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
                    AppError::BadRequest(format!("invalid request body: {err}")).into()
                }),
            )
            .app_data(
                web::PathConfig::default().error_handler(|_err, _req: &HttpRequest| {
                    AppError::BadRequest("invalid masjid id".to_string()).into()
                }),
            )
            .route("/getall", web::get().to(list_masjids))
            .route("/getone/{id}", web::get().to(get_masjid))
            .route("/addmasjid", web::post().to(add_masjid))
            .route("/update/{id}", web::put().to(update_masjid))
            .route("/deleteone/{id}", web::delete().to(delete_masjid))
            .route("/deleteall", web::delete().to(delete_all_masjids))
            .route("/bulk", web::post().to(bulk_create_masjids))
            .default_service(web::route().to(api_not_found)),
    );
}

#[utoipa::path(
    get,
    path = "/api/public/masjids/getall",
    params(MasjidListQuery),
    responses(
        (status = 200, description = "Masjids, nearest first when lat/lng are given", body = [MasjidResponse])
    ),
    tag = "masjids"
)]
async fn list_masjids(
    state: web::Data<AppState>,
    query: web::Query<MasjidListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    state.metrics.record_listing(user_position(&query).is_some());
    let result = state.masjid_service.list(query).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/public/masjids/getone/{id}",
    params(("id" = Uuid, Path, description = "Masjid document id")),
    responses(
        (status = 200, description = "The masjid, or null when it does not exist", body = MasjidResponse)
    ),
    tag = "masjids"
)]
async fn get_masjid(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let result = state.masjid_service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    post,
    path = "/api/public/masjids/addmasjid",
    request_body = CreateMasjidRequest,
    responses(
        (status = 200, description = "Masjid created", body = MasjidCreatedResponse),
        (status = 400, description = "Required field missing", body = ErrorResponse)
    ),
    tag = "masjids"
)]
async fn add_masjid(
    state: web::Data<AppState>,
    payload: web::Json<CreateMasjidRequest>,
) -> AppResult<HttpResponse> {
    let data = state.masjid_service.create(payload.into_inner()).await?;
    state.metrics.record_masjids_created(1);
    Ok(HttpResponse::Ok().json(MasjidCreatedResponse {
        msg: "Masjid added successfully".to_string(),
        data,
    }))
}

#[utoipa::path(
    put,
    path = "/api/public/masjids/update/{id}",
    params(("id" = Uuid, Path, description = "Masjid document id")),
    request_body = UpdateMasjidRequest,
    responses(
        (status = 200, description = "Supplied fields overwritten", body = MessageResponse)
    ),
    tag = "masjids"
)]
async fn update_masjid(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateMasjidRequest>,
) -> AppResult<HttpResponse> {
    state
        .masjid_service
        .update(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Masjid data updated")))
}

#[utoipa::path(
    delete,
    path = "/api/public/masjids/deleteone/{id}",
    params(("id" = Uuid, Path, description = "Masjid document id")),
    responses(
        (status = 200, description = "Masjid deleted", body = MessageResponse)
    ),
    tag = "masjids"
)]
async fn delete_masjid(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.masjid_service.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Masjid deleted")))
}

#[utoipa::path(
    delete,
    path = "/api/public/masjids/deleteall",
    responses(
        (status = 200, description = "Every masjid deleted", body = MessageResponse)
    ),
    tag = "masjids"
)]
async fn delete_all_masjids(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.masjid_service.delete_all().await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("All masjids deleted")))
}

#[utoipa::path(
    post,
    path = "/api/public/masjids/bulk",
    request_body = [CreateMasjidRequest],
    responses(
        (status = 200, description = "Masjids created in order", body = BulkMasjidsCreatedResponse),
        (status = 409, description = "A computed masjid id is already taken", body = ErrorResponse)
    ),
    tag = "masjids"
)]
async fn bulk_create_masjids(
    state: web::Data<AppState>,
    payload: web::Json<Vec<CreateMasjidRequest>>,
) -> AppResult<HttpResponse> {
    let masjids = state
        .masjid_service
        .create_many(payload.into_inner())
        .await?;
    state.metrics.record_masjids_created(masjids.len() as u64);
    Ok(HttpResponse::Ok().json(BulkMasjidsCreatedResponse {
        msg: "Bulk masjids created".to_string(),
        masjids,
    }))
}
