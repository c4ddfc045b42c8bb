//! Provides a specialized map of exchange rates relative to one base currency.

use crate::currency::Currency;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

/// Exchange rates for every supported currency, relative to an implicit
/// base currency (the form's current "from" selection).
///
/// The table is replaced wholesale on every successful fetch and is never
/// partially updated. An empty table is a valid state, both before the
/// first fetch completes and after a fetch that never succeeded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable(HashMap<Currency, f64>);

impl RateTable {
    /// Creates a new, empty `RateTable`.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Builds a table from the raw code-to-rate mapping returned by the
    /// rate service.
    ///
    /// Codes are normalized through the case-insensitive [`Currency`]
    /// parser here, at the boundary; codes the converter does not support
    /// are dropped.
    pub fn from_raw(raw: &HashMap<String, f64>) -> Self {
        let mut table = Self::new();
        for (code, &rate) in raw {
            if let Ok(currency) = code.parse::<Currency>() {
                table.insert(currency, rate);
            }
        }
        table
    }

    /// Inserts or updates the rate for a currency, returning the previous
    /// rate if one was present.
    pub fn insert(&mut self, currency: Currency, rate: f64) -> Option<f64> {
        self.0.insert(currency, rate)
    }

    /// Retrieves the rate for a currency.
    pub fn get(&self, currency: Currency) -> Option<f64> {
        self.0.get(&currency).copied()
    }

    /// Returns `true` when no rates have been loaded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of rates in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns an iterator over `(currency, rate)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.0.iter().map(|(&currency, &rate)| (currency, rate))
    }
}

impl FromIterator<(Currency, f64)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (Currency, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_normalizes_key_casing() {
        let raw = HashMap::from([
            ("PKR".to_string(), 280.5),
            ("eur".to_string(), 0.92),
            ("Gbp".to_string(), 0.79),
        ]);
        let table = RateTable::from_raw(&raw);
        assert_eq!(table.get(Currency::PKR), Some(280.5));
        assert_eq!(table.get(Currency::EUR), Some(0.92));
        assert_eq!(table.get(Currency::GBP), Some(0.79));
    }

    #[test]
    fn from_raw_drops_unsupported_codes() {
        let raw = HashMap::from([
            ("USD".to_string(), 1.0),
            ("XAU".to_string(), 0.0004),
            ("DOGE".to_string(), 7.5),
        ]);
        let table = RateTable::from_raw(&raw);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(Currency::USD), Some(1.0));
    }

    #[test]
    fn empty_table_is_a_valid_state() {
        let table = RateTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get(Currency::PKR), None);
    }
}
