// Service layer.
// One service per donation path plus the chart catalog and the Spotify
// upstream client.

pub mod chart_service;
pub mod claim_service;
pub mod escrow_service;
pub mod mock_donation_service;
pub mod spotify_service;
pub mod stripe_proxy;

pub use chart_service::ChartCatalog;
pub use claim_service::ClaimService;
pub use escrow_service::EscrowService;
pub use mock_donation_service::MockDonationService;
pub use spotify_service::{SpotifyError, SpotifyService};
pub use stripe_proxy::{ProxyResult, StripeProxy};
