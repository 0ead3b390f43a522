//! Settlement resolution: turns net balances into a minimal list of
//! point-to-point transfers.
//!
//! Greedy largest-magnitude matching: repeatedly pay the biggest
//! outstanding debt toward the biggest outstanding credit. Every round
//! fully retires at least one participant, so N participants with nonzero
//! balances settle in at most N - 1 transfers.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use shared::{BalanceLine, Transfer};

use super::error::DomainError;
use super::EPSILON;

/// One side of an unsettled balance.
///
/// Ordered so a max-heap yields the largest outstanding amount first and
/// breaks ties on first-seen input position, keeping the transfer list
/// deterministic for a given input order.
struct Outstanding {
    amount: f64,
    position: usize,
    name: String,
}

impl Ord for Outstanding {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount
            .total_cmp(&other.amount)
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for Outstanding {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Outstanding {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Outstanding {}

/// Resolve net balances into transfers that drive every balance to zero.
///
/// Requires the nets to sum to zero within tolerance; an imbalanced sheet
/// fails with `InconsistentBalance` before any transfer is emitted.
pub fn resolve_transfers(balances: &[BalanceLine]) -> Result<Vec<Transfer>, DomainError> {
    let residual: f64 = balances.iter().map(|line| line.net).sum();
    if residual.abs() > EPSILON {
        return Err(DomainError::InconsistentBalance { residual });
    }

    let mut creditors = BinaryHeap::new();
    let mut debtors = BinaryHeap::new();
    for (position, line) in balances.iter().enumerate() {
        if line.net > EPSILON {
            creditors.push(Outstanding {
                amount: line.net,
                position,
                name: line.name.clone(),
            });
        } else if line.net < -EPSILON {
            debtors.push(Outstanding {
                amount: -line.net,
                position,
                name: line.name.clone(),
            });
        }
    }

    let mut transfers = Vec::new();
    loop {
        let Some(creditor) = creditors.pop() else { break };
        let Some(debtor) = debtors.pop() else { break };

        let settled = creditor.amount.min(debtor.amount);
        transfers.push(Transfer {
            from: debtor.name.clone(),
            to: creditor.name.clone(),
            amount: settled,
        });

        // Whichever side still has an outstanding amount above tolerance
        // goes back into contention; at least one side is always retired.
        let credit_left = creditor.amount - settled;
        if credit_left > EPSILON {
            creditors.push(Outstanding {
                amount: credit_left,
                ..creditor
            });
        }
        let debt_left = debtor.amount - settled;
        if debt_left > EPSILON {
            debtors.push(Outstanding {
                amount: debt_left,
                ..debtor
            });
        }
    }

    // Zero-sum holds on entry and each round settles exact minima, so both
    // sides exhaust together.
    debug_assert!(creditors.is_empty() && debtors.is_empty());

    Ok(transfers)
}
