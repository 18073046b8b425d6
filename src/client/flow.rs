// Donation flow state machine.
// Mirrors the checkout widget: pick a payment method, enter an amount,
// connect a Lightning wallet when needed, then submit. The machine
// refuses to submit while a submission is in flight or while required
// inputs are missing.

use crate::client::api::{DonationApi, DonationConfirmation};
use crate::utils::random_suffix;
use rust_decimal::Decimal;
use std::str::FromStr;

/// How the donation is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Lightning,
    Traditional,
}

/// Supported Lightning wallet connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletKind {
    Phoenix,
    Breez,
}

impl WalletKind {
    pub fn label(&self) -> &'static str {
        match self {
            WalletKind::Phoenix => "phoenix",
            WalletKind::Breez => "breez",
        }
    }
}

/// Where the flow currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    Submitting,
    Succeeded(DonationConfirmation),
    Failed(String),
}

/// One donation attempt against a single artist.
#[derive(Debug)]
pub struct DonationFlow {
    artist_id: String,
    artist_name: String,
    method: PaymentMethod,
    amount: Option<Decimal>,
    wallet: Option<String>,
    state: FlowState,
}

impl DonationFlow {
    pub fn new(artist_id: impl Into<String>, artist_name: impl Into<String>) -> Self {
        Self {
            artist_id: artist_id.into(),
            artist_name: artist_name.into(),
            method: PaymentMethod::default(),
            amount: None,
            wallet: None,
            state: FlowState::Idle,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn wallet(&self) -> Option<&str> {
        self.wallet.as_deref()
    }

    /// Switch the payment method. Switching away from Lightning keeps
    /// the connected wallet so switching back does not force a
    /// reconnect.
    pub fn select_method(&mut self, method: PaymentMethod) {
        self.method = method;
    }

    /// Record the entered amount. Unparseable or non-positive text
    /// clears it.
    pub fn enter_amount(&mut self, text: &str) {
        self.amount = Decimal::from_str(text.trim())
            .ok()
            .filter(|d| d > &Decimal::ZERO);
    }

    /// Connect a wallet of the given kind, producing a fresh simulated
    /// wallet address.
    pub fn connect_wallet(&mut self, kind: WalletKind) {
        self.wallet = Some(format!("{}_{}", kind.label(), random_suffix(9)));
    }

    /// Whether submission is currently allowed.
    pub fn can_submit(&self) -> bool {
        if matches!(self.state, FlowState::Submitting) {
            return false;
        }
        if self.amount.is_none() {
            return false;
        }
        match self.method {
            PaymentMethod::Lightning => self.wallet.is_some(),
            PaymentMethod::Traditional => true,
        }
    }

    /// Submit the donation. Returns true when the donation succeeded.
    ///
    /// Success clears the amount and wallet so the flow is ready for
    /// another donation; failure keeps them so the user can retry.
    pub async fn submit(&mut self, api: &dyn DonationApi) -> bool {
        if !self.can_submit() {
            return false;
        }
        let amount = match self.amount {
            Some(amount) => amount,
            None => return false,
        };

        self.state = FlowState::Submitting;

        let result = match self.method {
            PaymentMethod::Traditional => {
                api.donate(&self.artist_id, &self.artist_name, amount).await
            }
            PaymentMethod::Lightning => {
                let wallet = match self.wallet.as_deref() {
                    Some(wallet) => wallet.to_string(),
                    None => {
                        self.state = FlowState::Idle;
                        return false;
                    }
                };
                api.donate_lightning(&self.artist_id, &self.artist_name, amount, &wallet)
                    .await
            }
        };

        match result {
            Ok(confirmation) => {
                self.amount = None;
                self.wallet = None;
                self.state = FlowState::Succeeded(confirmation);
                true
            }
            Err(e) => {
                self.state = FlowState::Failed(e.to_string());
                false
            }
        }
    }

    /// Dismiss a terminal state and return to idle.
    pub fn acknowledge(&mut self) {
        if !matches!(self.state, FlowState::Submitting) {
            self.state = FlowState::Idle;
        }
    }
}
