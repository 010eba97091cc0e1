use std::time::Instant;

use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    args::Args,
    errors::StartupError,
    routes::{data, fallback},
};

#[derive(OpenApi)]
#[openapi(paths(data::get), components(schemas(data::DataResponse)))]
pub struct ApiDoc;

pub fn router(args: &Args) -> Result<Router, StartupError> {
    let mut app = Router::new()
        .route("/api/data", get(data::get))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .fallback(fallback::not_found)
        .layer(GlobalConcurrencyLimitLayer::new(args.concurrency_limit.get()))
        .layer(CompressionLayer::new());

    if let Some(origin) = &args.cors_origin {
        let cors = CorsLayer::new()
            .allow_origin(HeaderValue::from_str(origin)?)
            .allow_methods([Method::GET]);
        app = app.layer(cors);
    }

    Ok(app.layer(middleware::from_fn(log_request)))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    log::info!(
        "{method} {path} {} {:?}",
        response.status().as_u16(),
        started.elapsed()
    );

    response
}
