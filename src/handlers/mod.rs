// API handlers.
// One module per endpoint family; all request handling logic lives here.

pub mod chart_handlers;
pub mod claim_handlers;
pub mod donation_handlers;
pub mod health_handlers;
pub mod lightning_handlers;
pub mod spotify_handlers;

pub use chart_handlers::*;
pub use claim_handlers::*;
pub use donation_handlers::*;
pub use health_handlers::*;
pub use lightning_handlers::*;
pub use spotify_handlers::*;
