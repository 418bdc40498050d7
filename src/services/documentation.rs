use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the palette service.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::palette::get_palette,
        crate::routes::config::get_config,
        crate::routes::config::replace_config,
        crate::routes::config::update_base_color,
        crate::routes::config::update_lightness,
        crate::routes::config::update_background,
        crate::routes::config::update_lightness_correction,
        crate::routes::matching::match_startup_corpus,
        crate::routes::matching::match_uploaded_corpus,
        crate::routes::sse::palette_stream,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::palette::PaletteResponse,
            crate::dto::palette::SwatchSummary,
            crate::dto::config::ConfigInput,
            crate::dto::config::BaseColorInput,
            crate::dto::config::LightnessStepInput,
            crate::dto::config::UpdateBaseColorRequest,
            crate::dto::config::UpdateLightnessRequest,
            crate::dto::config::UpdateBackgroundRequest,
            crate::dto::config::UpdateLightnessCorrectionRequest,
            crate::dto::config::ConfigResponse,
            crate::dto::config::BaseColorSummary,
            crate::dto::matching::MatchRequest,
            crate::dto::matching::MatchReportResponse,
            crate::dto::matching::MatchRow,
            crate::dto::matching::ClosestSwatch,
            crate::dto::sse::Handshake,
            crate::dto::sse::PaletteRebuiltEvent,
            crate::engine::LchCoords,
            crate::engine::scale::InterpolationModel,
            crate::engine::matcher::MatchStats,
            crate::engine::matcher::QualityBucket,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "palette", description = "Generated palette"),
        (name = "config", description = "Palette configuration edits"),
        (name = "match", description = "Corpus matching reports"),
        (name = "sse", description = "Server-sent events streams"),
    )
)]
pub struct ApiDoc;
