// File: services/hopigo_backend/src/main.rs
use axum::{routing::get, Router};
use hopigo_availability::routes as availability_routes;
use hopigo_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() {
    hopigo_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));

    let availability_router = availability_routes::routes(config.clone())
        .expect("Invalid provider schedule configuration");

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the HopiGo booking API!" }))
        .merge(availability_router);

    #[allow(unused_mut)] // mutated only when the openapi feature is enabled
    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use hopigo_availability::doc::AvailabilityApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "HopiGo Booking API",
                version = "0.1.0",
                description = "Provider availability and booking endpoints",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags((name = "availability", description = "Availability and booking endpoints")),
            servers((url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(AvailabilityApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    let app = app.layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
