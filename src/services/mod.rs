/// Configuration edits.
pub mod config_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Corpus matching against the current palette.
pub mod match_service;
/// Palette rebuilds and snapshot installation.
pub mod palette_service;
/// Server-Sent Events message generation.
pub mod sse_events;
/// Server-Sent Events broadcasting service.
pub mod sse_service;
