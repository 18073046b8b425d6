// Embeddable donation flow client.
// A UI-agnostic state machine for driving a donation from method
// selection through submission, plus the HTTP client it talks through.

pub mod api;
pub mod flow;

pub use api::*;
pub use flow::*;
