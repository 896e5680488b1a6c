/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Daily puzzle lookup, reveal scheduling and play counting.
pub mod puzzle_service;
/// Storage reconnection loop and degraded-mode tracking.
pub mod storage_supervisor;
