use serde::{Deserialize, Serialize};
use std::fmt;

/// One contribution record: a participant's name and the amount they paid
/// toward the shared total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    /// Amount paid (non-negative; validated by the backend)
    pub amount: f64,
}

/// Request for computing a settlement plan from one batch of entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementRequest {
    pub entries: Vec<Entry>,
}

/// Whether a participant ends up receiving money, paying money, or even
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceStatus {
    Receives,
    Pays,
    Settled,
}

impl BalanceStatus {
    /// Classify a net balance, treating anything within `epsilon` of zero
    /// as settled.
    pub fn from_net(net: f64, epsilon: f64) -> Self {
        if net > epsilon {
            BalanceStatus::Receives
        } else if net < -epsilon {
            BalanceStatus::Pays
        } else {
            BalanceStatus::Settled
        }
    }
}

/// Per-participant outcome of the balance calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceLine {
    pub name: String,
    /// Total amount this participant paid (entries with the same name are merged)
    pub paid: f64,
    /// Paid minus the equal share; positive means the group owes them money
    pub net: f64,
    pub status: BalanceStatus,
}

/// A single payment instruction in the settlement plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    /// Strictly positive payment amount
    pub amount: f64,
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pays {} {}", self.from, self.to, format_amount(self.amount))
    }
}

/// Full settlement plan for one batch of entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementResponse {
    /// Sum of all amounts paid
    pub total: f64,
    /// Total divided equally among the distinct participants
    pub equal_share: f64,
    /// One line per distinct participant, in first-seen input order
    pub balances: Vec<BalanceLine>,
    /// Payments that drive every balance to zero, in emission order
    pub transfers: Vec<Transfer>,
}

/// Format an amount for display with two decimal places
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_status_from_net() {
        assert_eq!(BalanceStatus::from_net(10.0, 1e-6), BalanceStatus::Receives);
        assert_eq!(BalanceStatus::from_net(-10.0, 1e-6), BalanceStatus::Pays);
        assert_eq!(BalanceStatus::from_net(0.0, 1e-6), BalanceStatus::Settled);

        // Values inside the tolerance band count as settled
        assert_eq!(BalanceStatus::from_net(5e-7, 1e-6), BalanceStatus::Settled);
        assert_eq!(BalanceStatus::from_net(-5e-7, 1e-6), BalanceStatus::Settled);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(33.333333), "33.33");
        assert_eq!(format_amount(75.0), "75.00");
        assert_eq!(format_amount(0.005), "0.01");
    }

    #[test]
    fn test_transfer_display() {
        let transfer = Transfer {
            from: "Bea".to_string(),
            to: "Ana".to_string(),
            amount: 33.333333,
        };
        assert_eq!(transfer.to_string(), "Bea pays Ana 33.33");
    }

    #[test]
    fn test_settlement_request_roundtrip() {
        let json = r#"{"entries":[{"name":"Ana","amount":100.0},{"name":"Bea","amount":0.0}]}"#;
        let request: SettlementRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.entries.len(), 2);
        assert_eq!(request.entries[0].name, "Ana");
        assert_eq!(request.entries[0].amount, 100.0);

        let back = serde_json::to_string(&request).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_settlement_response_serializes_all_sections() {
        let response = SettlementResponse {
            total: 100.0,
            equal_share: 50.0,
            balances: vec![
                BalanceLine {
                    name: "Ana".to_string(),
                    paid: 100.0,
                    net: 50.0,
                    status: BalanceStatus::Receives,
                },
                BalanceLine {
                    name: "Bea".to_string(),
                    paid: 0.0,
                    net: -50.0,
                    status: BalanceStatus::Pays,
                },
            ],
            transfers: vec![Transfer {
                from: "Bea".to_string(),
                to: "Ana".to_string(),
                amount: 50.0,
            }],
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["total"], 100.0);
        assert_eq!(value["equal_share"], 50.0);
        assert_eq!(value["balances"][0]["status"], "Receives");
        assert_eq!(value["balances"][1]["status"], "Pays");
        assert_eq!(value["transfers"][0]["from"], "Bea");
        assert_eq!(value["transfers"][0]["to"], "Ana");
    }
}
