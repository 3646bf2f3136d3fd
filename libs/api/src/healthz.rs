use axum::http::StatusCode;

#[utoipa::path(
    get,
    path = "/healthz",
    responses((status = 200, description = "service is up"))
)]
pub(super) async fn get_health() -> StatusCode {
    StatusCode::OK
}
