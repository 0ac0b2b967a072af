//! Side, OrderType, OrderStatus, and Period enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SpiralError;

/// Order and order-book side
///
/// Spiral uses `bid`/`ask` for order sides as well as book sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy side
    Bid,
    /// Sell side
    Ask,
}

impl Side {
    /// Returns the side as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bid => "bid",
            Self::Ask => "ask",
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Bid => Self::Ask,
            Self::Ask => Self::Bid,
        }
    }
}

impl FromStr for Side {
    type Err = SpiralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bid" => Ok(Self::Bid),
            "ask" => Ok(Self::Ask),
            other => Err(SpiralError::UnknownSide(other.to_string())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Limit order - executes at the specified price or better
    Limit,
    /// Market order - executes immediately at the best available price
    Market,
}

impl OrderType {
    /// Returns the order type as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "limit",
            Self::Market => "market",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Submitted,
    Accepted,
    Waiting,
    Rejected,
    PartialFilled,
    Filled,
    CancelRequested,
    CancelRejected,
    Cancelled,
    ModifyRequested,
    ModifyRejected,
    Modified,
    /// Any status string the client does not recognize
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Returns true once the order can no longer fill
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Filled | Self::Cancelled)
    }

    /// Returns true while the order is live on the book
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            Self::Submitted
                | Self::Accepted
                | Self::Waiting
                | Self::PartialFilled
                | Self::CancelRequested
                | Self::ModifyRequested
                | Self::Modified
        )
    }
}

/// K-line candle period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// 1 minute
    #[serde(rename = "1")]
    M1,
    /// 5 minutes
    #[serde(rename = "5")]
    M5,
    /// 15 minutes
    #[serde(rename = "15")]
    M15,
    /// 1 hour
    #[serde(rename = "60")]
    H1,
}

impl Period {
    /// Returns the period as used in the `period` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M1 => "1",
            Self::M5 => "5",
            Self::M15 => "15",
            Self::H1 => "60",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Currency codes Spiral listed at the time of writing
pub mod currencies {
    pub const USDT: &str = "USDT";
    pub const BTC: &str = "BTC";
    pub const ETH: &str = "ETH";
    pub const LTC: &str = "LTC";
    pub const BCH: &str = "BCH";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_serde() {
        assert_eq!(serde_json::to_string(&Side::Bid).unwrap(), "\"bid\"");
        let parsed: Side = serde_json::from_str("\"ask\"").unwrap();
        assert_eq!(parsed, Side::Ask);
    }

    #[test]
    fn test_side_from_str() {
        assert_eq!("bid".parse::<Side>().unwrap(), Side::Bid);
        assert!(matches!(
            "buy".parse::<Side>(),
            Err(SpiralError::UnknownSide(s)) if s == "buy"
        ));
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Bid.opposite(), Side::Ask);
        assert_eq!(Side::Ask.opposite(), Side::Bid);
    }

    #[test]
    fn test_order_status_serde() {
        let parsed: OrderStatus = serde_json::from_str("\"partial_filled\"").unwrap();
        assert_eq!(parsed, OrderStatus::PartialFilled);

        let parsed: OrderStatus = serde_json::from_str("\"cancel_requested\"").unwrap();
        assert_eq!(parsed, OrderStatus::CancelRequested);

        // Statuses the client does not know map to Unknown instead of failing
        let parsed: OrderStatus = serde_json::from_str("\"halted\"").unwrap();
        assert_eq!(parsed, OrderStatus::Unknown);
    }

    #[test]
    fn test_order_status_liveness() {
        assert!(OrderStatus::PartialFilled.is_open());
        assert!(!OrderStatus::Filled.is_open());
        assert!(OrderStatus::Filled.is_terminal());
        assert!(!OrderStatus::Waiting.is_terminal());
    }

    #[test]
    fn test_period_as_str() {
        assert_eq!(Period::M1.as_str(), "1");
        assert_eq!(Period::H1.as_str(), "60");
        assert_eq!(serde_json::to_string(&Period::M15).unwrap(), "\"15\"");
    }
}
