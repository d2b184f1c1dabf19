/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderStatus, OrderType, Side};
use crate::http::{BitbitxError, Result};

/// A listed asset
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Currency {
    pub symbol: String,
    pub name: String,
}

impl Currency {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }

    /// Yuan Chain New, the listing this adapter was written for
    pub fn ycc() -> Self {
        Self::new("YCC", "Yuan Chain New")
    }

    pub fn btc() -> Self {
        Self::new("BTC", "Bitcoin")
    }
}

/// A traded market: base currency quoted in the second currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: Currency,
    pub quote: Currency,
}

impl CurrencyPair {
    pub fn new(base: Currency, quote: Currency) -> Self {
        Self { base, quote }
    }

    pub fn ycc_btc() -> Self {
        Self::new(Currency::ycc(), Currency::btc())
    }

    /// Join the two symbols with `joiner`; the exchange uses the empty
    /// joiner ("YCCBTC").
    pub fn to_symbol(&self, joiner: &str) -> String {
        format!("{}{}{}", self.base.symbol, joiner, self.quote.symbol)
    }
}

/// Ticker snapshot as the ticker endpoint returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    #[serde(with = "rust_decimal::serde::str")]
    pub last: Decimal,
    #[serde(rename = "bid", with = "rust_decimal::serde::str")]
    pub buy: Decimal,
    #[serde(rename = "ask", with = "rust_decimal::serde::str")]
    pub sell: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub high: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub low: Decimal,
    #[serde(rename = "volume", with = "rust_decimal::serde::str")]
    pub vol: Decimal,
}

/// One price level of the order book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthLevel {
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(rename = "size", with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// Order book snapshot; the exchange keys the sides `ask` and `bid`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depth {
    #[serde(rename = "ask")]
    pub asks: Vec<DepthLevel>,
    #[serde(rename = "bid")]
    pub bids: Vec<DepthLevel>,
}

/// A public trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: i64,
    pub side: Side,
    #[serde(rename = "quantity", with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// RFC3339 as sent by the exchange
    pub timestamp: String,
}

/// One candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kline {
    /// RFC3339 as sent by the exchange
    pub timestamp: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub open: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub close: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub high: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub low: Decimal,
    /// Base currency volume, eg ETH for the pair ETHBTC
    #[serde(rename = "volume", with = "rust_decimal::serde::str")]
    pub vol: Decimal,
}

/// An order as the order endpoints return it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(rename = "clientOrderId")]
    pub client_order_id: String,
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: OrderStatus,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(rename = "quantity", with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(rename = "cumQuantity", with = "rust_decimal::serde::str")]
    pub cum_quantity: Decimal,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Balance of one currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAccount {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub available: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub reserved: Decimal,
}

/// All currency balances keyed by symbol
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Account {
    pub sub_accounts: BTreeMap<String, SubAccount>,
}

impl Account {
    pub fn from_rows(rows: Vec<SubAccount>) -> Self {
        let sub_accounts = rows
            .into_iter()
            .map(|sub| (sub.currency.clone(), sub))
            .collect();
        Self { sub_accounts }
    }
}

/// Parse an exchange RFC3339 timestamp into unix seconds
pub fn parse_timestamp(timestamp: &str) -> Result<i64> {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.timestamp())
        .map_err(|e| BitbitxError::MalformedResponse(format!("bad timestamp {timestamp}: {e}")))
}
