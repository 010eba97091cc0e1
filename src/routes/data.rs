use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

pub const GREETING: &str = "Hallo von Render-Backend!";

#[derive(ToSchema, Serialize, Debug)]
pub struct DataResponse {
    #[schema(example = "Hallo von Render-Backend!")]
    pub message: String,
}

impl Default for DataResponse {
    fn default() -> Self {
        DataResponse {
            message: GREETING.to_string(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/data",
    responses(
        (status = 200, description = "Greeting from the backend", body = DataResponse)
    )
)]
pub async fn get() -> impl IntoResponse {
    (StatusCode::OK, Json(DataResponse::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_single_message_field() {
        let body = serde_json::to_value(DataResponse::default()).unwrap();

        assert_eq!(body, serde_json::json!({ "message": GREETING }));
    }
}
