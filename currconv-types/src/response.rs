//! Response shapes returned by the currency converter API.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Convert
// ─────────────────────────────────────────────────────────────────────────────

/// Query metadata echoed back by the convert endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInfo {
    /// Number of pairs in the query
    pub count: u32,
}

/// Latest rate for a single pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub id: String,
    pub val: f64,
    pub to: String,
    pub fr: String,
}

/// Result of the convert endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Convert {
    pub query: QueryInfo,
    pub results: HashMap<String, ConversionResult>,
}

/// Compact convert result: pair to rate.
pub type ConvertCompact = HashMap<String, f64>;

// ─────────────────────────────────────────────────────────────────────────────
// Historical convert
// ─────────────────────────────────────────────────────────────────────────────

/// Rates for a single pair over one or more days, keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalResult {
    pub id: String,
    pub to: String,
    pub fr: String,
    pub val: BTreeMap<String, f64>,
}

/// Result of the historical convert endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertHistorical {
    pub query: QueryInfo,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub results: HashMap<String, HistoricalResult>,
}

/// Compact historical result: pair to date to rate.
pub type ConvertHistoricalCompact = HashMap<String, BTreeMap<String, f64>>;

// ─────────────────────────────────────────────────────────────────────────────
// Currencies & countries
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    pub id: String,
    pub currency_name: String,
    /// Not every currency has a symbol
    #[serde(default)]
    pub currency_symbol: String,
}

/// Result of the currencies endpoint, keyed by currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currencies {
    pub results: HashMap<String, CurrencyInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    pub id: String,
    pub alpha3: String,
    pub currency_id: String,
    pub currency_name: String,
    #[serde(default)]
    pub currency_symbol: String,
    pub name: String,
}

/// Result of the countries endpoint, keyed by ISO alpha-2 code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countries {
    pub results: HashMap<String, CountryInfo>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Usage & errors
// ─────────────────────────────────────────────────────────────────────────────

/// Current API usage for the key making the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub timestamp: DateTime<Utc>,
    pub usage: u64,
}

/// Body the service sends with a non-200 status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub status: u16,
    pub error: String,
}
