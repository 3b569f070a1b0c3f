//! # Navigation Types
//!
//! Routes, route parameters and explainer sheets exchanged with the [`Navigator`].
//!
//! [`Navigator`]: crate::core::service::Navigator

use serde::Serialize;
use serde_json::{Map, Value};
use shared::{Asset, Network};

/// Screens the selection engine can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Route {
    /// The currency selection screen itself
    CurrencySelectScreen,
    /// Swap composer inside the exchange modal
    MainExchangeScreen,
    /// Exchange modal root, used when entering from discovery
    ExchangeModal,
    /// Informational/confirmation sheet
    ExplainSheet,
}

/// Parameters attached to a [`Route`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum NavigationParams {
    #[default]
    None,
    /// Open the exchange with both legs pre-filled.
    Exchange {
        input_asset: Option<Asset>,
        output_asset: Option<Asset>,
        /// Opaque entry parameters forwarded unchanged
        params: Map<String, Value>,
    },
}

/// Interruptive sheet presented by a selection guard.
///
/// The user's answer comes back through
/// [`CurrencySelect::acknowledge_interruption`](crate::app::CurrencySelect::acknowledge_interruption)
/// or [`CurrencySelect::dismiss_interruption`](crate::app::CurrencySelect::dismiss_interruption).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ExplainSheet {
    /// Selecting this asset resets the other leg, which is on a different network.
    SwapResetInputs { network: Network },
    /// No wallet assets on the target network; offers a bridge link.
    ObtainL2Assets {
        asset_name: String,
        network: Option<Network>,
        network_name: String,
    },
}

impl ExplainSheet {
    /// Stable sheet identifier
    pub fn kind(&self) -> &'static str {
        match self {
            ExplainSheet::SwapResetInputs { .. } => "swapResetInputs",
            ExplainSheet::ObtainL2Assets { .. } => "obtainL2Assets",
        }
    }
}
