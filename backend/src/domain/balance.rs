//! Balance calculation: raw contribution entries in, per-participant net
//! balances out.
//!
//! Entries recorded under the same name are merged into a single
//! participant, and the equal share divides by the number of distinct
//! participants after merging. Output order follows the first appearance
//! of each name in the input, which downstream settlement relies on for
//! deterministic tie-breaking.

use std::collections::HashMap;

use shared::{BalanceLine, BalanceStatus, Entry};

use super::error::{DomainError, InvalidInputReason};
use super::EPSILON;

/// Totals and per-participant balances derived from one batch of entries
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSheet {
    pub total: f64,
    pub equal_share: f64,
    pub balances: Vec<BalanceLine>,
}

/// Compute net balances relative to the equal share.
///
/// Pure function of the input: no side effects, nothing persisted.
pub fn compute_balances(entries: &[Entry]) -> Result<BalanceSheet, DomainError> {
    if entries.is_empty() {
        return Err(InvalidInputReason::NoEntries.into());
    }

    let mut order: Vec<&str> = Vec::new();
    let mut paid_by_name: HashMap<&str, f64> = HashMap::new();

    for (index, entry) in entries.iter().enumerate() {
        let name = entry.name.trim();
        if name.is_empty() {
            return Err(InvalidInputReason::EmptyName { index }.into());
        }
        if entry.amount < 0.0 {
            return Err(InvalidInputReason::NegativeAmount {
                name: name.to_string(),
                amount: entry.amount,
            }
            .into());
        }

        match paid_by_name.get_mut(name) {
            Some(paid) => *paid += entry.amount,
            None => {
                order.push(name);
                paid_by_name.insert(name, entry.amount);
            }
        }
    }

    let total: f64 = entries.iter().map(|entry| entry.amount).sum();
    let equal_share = total / order.len() as f64;

    let balances = order
        .iter()
        .map(|&name| {
            let paid = paid_by_name[name];
            let net = paid - equal_share;
            BalanceLine {
                name: name.to_string(),
                paid,
                net,
                status: BalanceStatus::from_net(net, EPSILON),
            }
        })
        .collect();

    Ok(BalanceSheet {
        total,
        equal_share,
        balances,
    })
}
