use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Build the application router, with interactive API documentation served
/// at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Turnstile", description = "Event ticketing API"),
        tags(
            (name = controller::payment::PAYMENT_TAG, description = "Checkout and payment listings"),
            (name = controller::ticket::TICKET_TAG, description = "Ticket listings"),
        )
    )]
    struct ApiDoc;

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::payment::checkout))
        .routes(routes!(controller::payment::get_transactions))
        .routes(routes!(controller::payment::get_orders))
        .routes(routes!(controller::ticket::get_created_tickets))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
