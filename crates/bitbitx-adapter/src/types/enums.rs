/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use crate::http::{BitbitxError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Limit,
    Market,
}

/// Composite order side as the shared trading interface models it:
/// the exchange splits this into a `(side, type)` string pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
    BuyMarket,
    SellMarket,
}

impl TradeSide {
    /// Map the exchange's `(side, type)` pair to a composite side.
    pub fn from_remote(side: &str, order_type: &str) -> Result<Self> {
        match (side, order_type) {
            ("buy", "limit") => Ok(TradeSide::Buy),
            ("sell", "limit") => Ok(TradeSide::Sell),
            ("buy", "market") => Ok(TradeSide::BuyMarket),
            ("sell", "market") => Ok(TradeSide::SellMarket),
            _ => Err(BitbitxError::MalformedResponse(format!(
                "unknown trade side {side}/{order_type}"
            ))),
        }
    }

    /// Split into the `(side, type)` pair the exchange expects.
    pub fn to_remote(self) -> (&'static str, &'static str) {
        match self {
            TradeSide::Buy => ("buy", "limit"),
            TradeSide::Sell => ("sell", "limit"),
            TradeSide::BuyMarket => ("buy", "market"),
            TradeSide::SellMarket => ("sell", "market"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "new", alias = "suspended")]
    Unfinished,
    #[serde(rename = "partiallyFilled")]
    PartiallyFilled,
    #[serde(rename = "filled")]
    Filled,
    #[serde(rename = "canceled")]
    Cancelled,
    #[serde(rename = "expired")]
    Rejected,
}

impl OrderStatus {
    /// Map the exchange's status string, without panicking on an
    /// unknown value.
    pub fn from_remote(status: &str) -> Result<Self> {
        match status {
            "new" | "suspended" => Ok(OrderStatus::Unfinished),
            "partiallyFilled" => Ok(OrderStatus::PartiallyFilled),
            "filled" => Ok(OrderStatus::Filled),
            "canceled" => Ok(OrderStatus::Cancelled),
            "expired" => Ok(OrderStatus::Rejected),
            other => Err(BitbitxError::MalformedResponse(format!(
                "unknown order status {other}"
            ))),
        }
    }

    /// Whether the order can still trade
    pub fn is_open(self) -> bool {
        matches!(self, OrderStatus::Unfinished | OrderStatus::PartiallyFilled)
    }
}

/// Candle periods accepted by the kline endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KlinePeriod {
    M1,
    M3,
    M5,
    M15,
    M30,
    H1,
    H4,
    D1,
    D7,
    Month1,
}

impl KlinePeriod {
    /// The period string the exchange expects
    pub fn as_remote(self) -> &'static str {
        match self {
            KlinePeriod::M1 => "M1",
            KlinePeriod::M3 => "M3",
            KlinePeriod::M5 => "M5",
            KlinePeriod::M15 => "M15",
            KlinePeriod::M30 => "M30",
            KlinePeriod::H1 => "H1",
            KlinePeriod::H4 => "H4",
            KlinePeriod::D1 => "D1",
            KlinePeriod::D7 => "D7",
            KlinePeriod::Month1 => "1M",
        }
    }

    /// Parse a period string, rejecting anything the exchange does not accept
    pub fn from_remote(period: &str) -> Result<Self> {
        match period {
            "M1" => Ok(KlinePeriod::M1),
            "M3" => Ok(KlinePeriod::M3),
            "M5" => Ok(KlinePeriod::M5),
            "M15" => Ok(KlinePeriod::M15),
            "M30" => Ok(KlinePeriod::M30),
            "H1" => Ok(KlinePeriod::H1),
            "H4" => Ok(KlinePeriod::H4),
            "D1" => Ok(KlinePeriod::D1),
            "D7" => Ok(KlinePeriod::D7),
            "1M" => Ok(KlinePeriod::Month1),
            other => Err(BitbitxError::MalformedResponse(format!(
                "invalid kline period {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_side_mapping() {
        assert_eq!(TradeSide::from_remote("buy", "limit").unwrap(), TradeSide::Buy);
        assert_eq!(
            TradeSide::from_remote("sell", "market").unwrap(),
            TradeSide::SellMarket
        );
        assert_eq!(TradeSide::BuyMarket.to_remote(), ("buy", "market"));
        assert!(TradeSide::from_remote("buy", "stop").is_err());
    }

    #[test]
    fn test_order_status_mapping() {
        assert_eq!(OrderStatus::from_remote("new").unwrap(), OrderStatus::Unfinished);
        assert_eq!(
            OrderStatus::from_remote("suspended").unwrap(),
            OrderStatus::Unfinished
        );
        assert_eq!(
            OrderStatus::from_remote("partiallyFilled").unwrap(),
            OrderStatus::PartiallyFilled
        );
        assert_eq!(OrderStatus::from_remote("filled").unwrap(), OrderStatus::Filled);
        assert_eq!(
            OrderStatus::from_remote("canceled").unwrap(),
            OrderStatus::Cancelled
        );
        assert_eq!(
            OrderStatus::from_remote("expired").unwrap(),
            OrderStatus::Rejected
        );

        let err = OrderStatus::from_remote("teleported").unwrap_err();
        assert!(matches!(err, BitbitxError::MalformedResponse(_)));
    }

    #[test]
    fn test_order_status_is_open() {
        assert!(OrderStatus::Unfinished.is_open());
        assert!(OrderStatus::PartiallyFilled.is_open());
        assert!(!OrderStatus::Filled.is_open());
        assert!(!OrderStatus::Cancelled.is_open());
    }

    #[test]
    fn test_order_status_serde_aliases() {
        let status: OrderStatus = serde_json::from_str(r#""suspended""#).unwrap();
        assert_eq!(status, OrderStatus::Unfinished);
    }

    #[test]
    fn test_kline_period_roundtrip() {
        for period in [
            KlinePeriod::M1,
            KlinePeriod::M30,
            KlinePeriod::H4,
            KlinePeriod::D7,
            KlinePeriod::Month1,
        ] {
            assert_eq!(KlinePeriod::from_remote(period.as_remote()).unwrap(), period);
        }
        assert!(KlinePeriod::from_remote("M2").is_err());
    }
}
