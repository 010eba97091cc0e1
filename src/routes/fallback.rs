use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
};

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    log::warn!("no route for {}", uri.path());
    (StatusCode::NOT_FOUND, "Not Found")
}
