//! Core settlement domain: balance calculation and transfer resolution.

mod balance;
mod error;
mod settlement;

pub use balance::{compute_balances, BalanceSheet};
pub use error::{DomainError, InvalidInputReason};
pub use settlement::resolve_transfers;

use shared::{SettlementRequest, SettlementResponse};
use tracing::info;

/// Near-zero tolerance for settled balances; absorbs floating-point drift
pub const EPSILON: f64 = 1e-6;

/// Stateless facade over the balance calculator and settlement resolver
#[derive(Clone, Default)]
pub struct SettlementService;

impl SettlementService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the full settlement plan for one batch of entries.
    ///
    /// The computation is deterministic and pure, so a failed request will
    /// fail identically on retry; errors go straight back to the caller.
    pub fn compute_settlement(
        &self,
        request: SettlementRequest,
    ) -> Result<SettlementResponse, DomainError> {
        info!("Computing settlement for {} entries", request.entries.len());

        let sheet = compute_balances(&request.entries)?;
        let transfers = resolve_transfers(&sheet.balances)?;

        info!(
            "Settlement plan ready: {} participants, {} transfers",
            sheet.balances.len(),
            transfers.len()
        );

        Ok(SettlementResponse {
            total: sheet.total,
            equal_share: sheet.equal_share,
            balances: sheet.balances,
            transfers,
        })
    }
}
