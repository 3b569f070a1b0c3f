//! # Selection Guard Chain
//!
//! Checks run between activating a list item and finalizing the selection.
//! Either check can interrupt with an explainer sheet and park the chain until
//! the user answers.
//!
//! ```text
//! Idle ─► CheckingLiquidity ──────────► CheckingNetworkMatch ─────────► Finalizing ─► Done
//!               │                              │        ▲
//!               ▼                              ▼        │ acknowledge
//!      AwaitingLiquidityAck            AwaitingNetworkAck
//!               │ acknowledge (escape link)    │ dismiss
//!               │ or dismiss                   ▼
//!               └──────────────────────────► Abandoned
//! ```
//!
//! - **Liquidity**: output leg on a non-primary chain while the wallet holds
//!   nothing on that chain. The sheet only offers a way out (a bridge link);
//!   this chain never finalizes.
//! - **Network match**: the candidate sits on a different network than the
//!   other leg and the one-time warning has not been acknowledged yet. On
//!   acknowledgment the parked [`PendingFinalize`] resumes exactly once.

use shared::{Asset, Network};

use crate::app::Role;
use crate::core::navigation::ExplainSheet;

/// Type tag applied to output-leg selections on the primary chain.
pub const PRIMARY_TOKEN_TYPE: &str = "token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Idle,
    CheckingLiquidity,
    AwaitingLiquidityAck,
    CheckingNetworkMatch,
    AwaitingNetworkAck,
    Finalizing,
    Done,
    Abandoned,
}

impl GuardState {
    /// Waiting on the user
    pub fn is_interrupted(&self) -> bool {
        matches!(self, GuardState::AwaitingLiquidityAck | GuardState::AwaitingNetworkAck)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GuardState::Done | GuardState::Abandoned)
    }
}

/// Deferred finalize, parked while the network warning is showing.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFinalize {
    pub asset: Asset,
}

/// What the caller must do after driving the chain.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardStep {
    /// Present this sheet and wait for the user
    Interrupted(ExplainSheet),
    /// All checks passed: finalize with this (possibly re-tagged) asset
    Finalize(Asset),
    /// The user escaped from the liquidity explainer: open the bridge link
    Escape,
    /// Chain ended without a selection
    Abandoned,
    /// Nothing to do in the current state
    Ignored,
}

/// Snapshot the checks decide on.
#[derive(Debug, Clone)]
pub struct GuardContext<'a> {
    pub role: Role,
    pub active_chain_id: u64,
    pub primary_chain_id: u64,
    pub wallet_assets: &'a [Asset],
    /// The other leg of the trade
    pub counterpart: Option<&'a Asset>,
    /// Whether the cross-network warning was already acknowledged on this install
    pub warning_acknowledged: bool,
}

/// Guard chain for one item activation.
#[derive(Debug, Clone)]
pub struct GuardChain {
    state: GuardState,
    candidate: Asset,
    resume: Option<PendingFinalize>,
}

impl GuardChain {
    pub fn new(candidate: Asset) -> Self {
        Self {
            state: GuardState::Idle,
            candidate,
            resume: None,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn candidate(&self) -> &Asset {
        &self.candidate
    }

    /// Run the checks from `Idle`.
    pub fn start(&mut self, ctx: &GuardContext<'_>) -> GuardStep {
        if self.state != GuardState::Idle {
            return GuardStep::Ignored;
        }

        self.state = GuardState::CheckingLiquidity;
        if let Some(sheet) = liquidity_sheet(&self.candidate, ctx) {
            self.state = GuardState::AwaitingLiquidityAck;
            return GuardStep::Interrupted(sheet);
        }

        let asset = if ctx.role == Role::Output && ctx.active_chain_id == ctx.primary_chain_id {
            self.candidate.with_type(PRIMARY_TOKEN_TYPE)
        } else {
            self.candidate.clone()
        };

        self.state = GuardState::CheckingNetworkMatch;
        if needs_network_warning(&asset, ctx) {
            let sheet = ExplainSheet::SwapResetInputs {
                network: asset.network,
            };
            self.resume = Some(PendingFinalize { asset });
            self.state = GuardState::AwaitingNetworkAck;
            return GuardStep::Interrupted(sheet);
        }

        self.state = GuardState::Finalizing;
        GuardStep::Finalize(asset)
    }

    /// The user acknowledged the sheet currently showing.
    pub fn acknowledge(&mut self) -> GuardStep {
        match self.state {
            GuardState::AwaitingLiquidityAck => {
                self.state = GuardState::Abandoned;
                GuardStep::Escape
            }
            GuardState::AwaitingNetworkAck => match self.resume.take() {
                Some(PendingFinalize { asset }) => {
                    self.state = GuardState::Finalizing;
                    GuardStep::Finalize(asset)
                }
                None => {
                    self.state = GuardState::Abandoned;
                    GuardStep::Abandoned
                }
            },
            _ => GuardStep::Ignored,
        }
    }

    /// The user closed the sheet without acknowledging.
    pub fn dismiss(&mut self) -> GuardStep {
        if self.state.is_interrupted() {
            self.resume = None;
            self.state = GuardState::Abandoned;
            GuardStep::Abandoned
        } else {
            GuardStep::Ignored
        }
    }

    /// Finalize ran.
    pub fn complete(&mut self) {
        if self.state == GuardState::Finalizing {
            self.state = GuardState::Done;
        }
    }
}

/// Missing-liquidity explainer, if the output chain has no wallet assets.
fn liquidity_sheet(candidate: &Asset, ctx: &GuardContext<'_>) -> Option<ExplainSheet> {
    if ctx.role != Role::Output || ctx.active_chain_id == ctx.primary_chain_id {
        return None;
    }

    let network = Network::from_chain_id(ctx.active_chain_id);
    let held_on_chain = ctx
        .wallet_assets
        .iter()
        .filter(|asset| Some(asset.network) == network)
        .count();
    if held_on_chain > 0 {
        return None;
    }

    let network_name = network
        .map(|n| n.display_name().to_string())
        .unwrap_or_else(|| format!("Chain {}", ctx.active_chain_id));

    Some(ExplainSheet::ObtainL2Assets {
        asset_name: candidate.symbol.clone(),
        network,
        network_name,
    })
}

fn needs_network_warning(asset: &Asset, ctx: &GuardContext<'_>) -> bool {
    match ctx.counterpart {
        Some(other) => other.network != asset.network && !ctx.warning_acknowledged,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str, network: Network) -> Asset {
        Asset {
            id: id.to_string(),
            address: format!("0x{}", id),
            mainnet_address: None,
            symbol: id.to_uppercase(),
            name: id.to_string(),
            network,
            asset_type: None,
            implementations: None,
            balance: None,
        }
    }

    fn ctx<'a>(
        role: Role,
        chain: u64,
        wallet: &'a [Asset],
        counterpart: Option<&'a Asset>,
        acknowledged: bool,
    ) -> GuardContext<'a> {
        GuardContext {
            role,
            active_chain_id: chain,
            primary_chain_id: 1,
            wallet_assets: wallet,
            counterpart,
            warning_acknowledged: acknowledged,
        }
    }

    #[test]
    fn test_passes_straight_through_when_nothing_to_warn() {
        let wallet = vec![asset("eth", Network::Mainnet)];
        let other = asset("dai", Network::Mainnet);
        let mut chain = GuardChain::new(asset("usdc", Network::Mainnet));

        let step = chain.start(&ctx(Role::Input, 1, &wallet, Some(&other), false));
        assert!(matches!(step, GuardStep::Finalize(ref a) if a.id == "usdc"));
        assert_eq!(chain.state(), GuardState::Finalizing);
        chain.complete();
        assert_eq!(chain.state(), GuardState::Done);
    }

    #[test]
    fn test_output_on_primary_chain_is_tagged_token() {
        let wallet = Vec::new();
        let mut chain = GuardChain::new(asset("usdc", Network::Mainnet));
        match chain.start(&ctx(Role::Output, 1, &wallet, None, false)) {
            GuardStep::Finalize(asset) => assert_eq!(asset.asset_type.as_deref(), Some("token")),
            other => panic!("unexpected step {:?}", other),
        }

        let mut chain = GuardChain::new(asset("usdc", Network::Mainnet));
        match chain.start(&ctx(Role::Input, 1, &wallet, None, false)) {
            GuardStep::Finalize(asset) => assert_eq!(asset.asset_type, None),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_liquidity_guard_interrupts_without_wallet_assets_on_chain() {
        let wallet = vec![asset("eth", Network::Mainnet), asset("op", Network::Optimism)];
        let mut chain = GuardChain::new(asset("matic", Network::Polygon));

        let step = chain.start(&ctx(Role::Output, 137, &wallet, None, true));
        assert_eq!(
            step,
            GuardStep::Interrupted(ExplainSheet::ObtainL2Assets {
                asset_name: "MATIC".to_string(),
                network: Some(Network::Polygon),
                network_name: "Polygon".to_string(),
            })
        );
        assert_eq!(chain.state(), GuardState::AwaitingLiquidityAck);

        // Acknowledging only escapes; it never finalizes
        assert_eq!(chain.acknowledge(), GuardStep::Escape);
        assert_eq!(chain.state(), GuardState::Abandoned);
        assert_eq!(chain.acknowledge(), GuardStep::Ignored);
    }

    #[test]
    fn test_liquidity_guard_dismiss_abandons() {
        let wallet = Vec::new();
        let mut chain = GuardChain::new(asset("arb", Network::Arbitrum));
        chain.start(&ctx(Role::Output, 42161, &wallet, None, true));
        assert_eq!(chain.dismiss(), GuardStep::Abandoned);
        assert!(chain.state().is_terminal());
    }

    #[test]
    fn test_liquidity_guard_skipped_with_assets_on_chain_or_input_role() {
        let wallet = vec![asset("wmatic", Network::Polygon)];
        let mut chain = GuardChain::new(asset("usdc", Network::Polygon));
        assert!(matches!(
            chain.start(&ctx(Role::Output, 137, &wallet, None, true)),
            GuardStep::Finalize(_)
        ));

        let empty = Vec::new();
        let mut chain = GuardChain::new(asset("usdc", Network::Polygon));
        assert!(matches!(
            chain.start(&ctx(Role::Input, 137, &empty, None, true)),
            GuardStep::Finalize(_)
        ));
    }

    #[test]
    fn test_unknown_chain_counts_as_no_liquidity() {
        let wallet = vec![asset("eth", Network::Mainnet)];
        let mut chain = GuardChain::new(asset("ftm", Network::Mainnet));
        match chain.start(&ctx(Role::Output, 250, &wallet, None, true)) {
            GuardStep::Interrupted(ExplainSheet::ObtainL2Assets { network, network_name, .. }) => {
                assert_eq!(network, None);
                assert_eq!(network_name, "Chain 250");
            }
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_network_guard_resumes_once_on_acknowledge() {
        let wallet = Vec::new();
        let other = asset("eth", Network::Mainnet);
        let mut chain = GuardChain::new(asset("op", Network::Optimism));

        let step = chain.start(&ctx(Role::Input, 10, &wallet, Some(&other), false));
        assert_eq!(
            step,
            GuardStep::Interrupted(ExplainSheet::SwapResetInputs { network: Network::Optimism })
        );
        assert_eq!(chain.state(), GuardState::AwaitingNetworkAck);

        assert!(matches!(chain.acknowledge(), GuardStep::Finalize(ref a) if a.id == "op"));
        assert_eq!(chain.acknowledge(), GuardStep::Ignored);
        assert_eq!(chain.dismiss(), GuardStep::Ignored);
    }

    #[test]
    fn test_network_guard_dismiss_abandons() {
        let wallet = Vec::new();
        let other = asset("eth", Network::Mainnet);
        let mut chain = GuardChain::new(asset("op", Network::Optimism));
        chain.start(&ctx(Role::Input, 10, &wallet, Some(&other), false));

        assert_eq!(chain.dismiss(), GuardStep::Abandoned);
        assert_eq!(chain.acknowledge(), GuardStep::Ignored);
        assert_eq!(chain.state(), GuardState::Abandoned);
    }

    #[test]
    fn test_network_guard_silent_once_acknowledged_or_without_counterpart() {
        let wallet = Vec::new();
        let other = asset("eth", Network::Mainnet);

        let mut chain = GuardChain::new(asset("op", Network::Optimism));
        assert!(matches!(
            chain.start(&ctx(Role::Input, 10, &wallet, Some(&other), true)),
            GuardStep::Finalize(_)
        ));

        let mut chain = GuardChain::new(asset("op", Network::Optimism));
        assert!(matches!(
            chain.start(&ctx(Role::Input, 10, &wallet, None, false)),
            GuardStep::Finalize(_)
        ));
    }

    #[test]
    fn test_start_only_from_idle() {
        let wallet = Vec::new();
        let mut chain = GuardChain::new(asset("eth", Network::Mainnet));
        chain.start(&ctx(Role::Input, 1, &wallet, None, false));
        assert_eq!(chain.start(&ctx(Role::Input, 1, &wallet, None, false)), GuardStep::Ignored);
    }
}
