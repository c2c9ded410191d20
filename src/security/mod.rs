mod cors;
mod headers;

pub use cors::cors_middleware;
pub use headers::security_headers;
