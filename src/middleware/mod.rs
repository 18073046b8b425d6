// Middleware module.
// Request logging and CORS configuration for the API surface.

pub mod cors;
pub mod logging;

pub use cors::*;
pub use logging::*;
