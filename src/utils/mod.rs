// Utility functions.
// Session extraction, receipt identifier generation and input validation.

pub mod auth;
pub mod ids;
pub mod validation;

pub use auth::*;
pub use ids::*;
pub use validation::*;
