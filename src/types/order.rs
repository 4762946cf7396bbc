//! Return order types

use serde::{Deserialize, Serialize};

/// Processing status of a return order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnStatus {
    InProcess,
    Rejected,
    Completed,
}

impl ReturnStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            ReturnStatus::InProcess => "In Process",
            ReturnStatus::Rejected => "Rejected",
            ReturnStatus::Completed => "Completed",
        }
    }
}

/// A return awaiting transport to a warehouse of its category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnOrder {
    pub id: String,
    pub product_name: String,
    pub category: String,
    pub status: ReturnStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(ReturnStatus::InProcess.as_str(), "In Process");
        assert_eq!(ReturnStatus::Rejected.as_str(), "Rejected");
        assert_eq!(ReturnStatus::Completed.as_str(), "Completed");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ReturnStatus::InProcess).unwrap();
        assert_eq!(json, "\"in_process\"");
    }
}
