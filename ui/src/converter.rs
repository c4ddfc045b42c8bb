//! The conversion form's state and the operations that mutate it.

use api::currency::Currency;
use api::rate_table::RateTable;

/// All mutable state owned by the conversion form.
///
/// The two input controls are stateless; every mutation funnels through
/// the methods here, from discrete, serialized event callbacks. Any input
/// change invalidates the previously converted amount, so the user must
/// press Convert again after editing. The initial zeroed state is
/// constructed rather than set, so it never counts as an invalidation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionState {
    amount: f64,
    from: Currency,
    to: Currency,
    converted: f64,
}

impl Default for ConversionState {
    fn default() -> Self {
        Self {
            amount: 0.0,
            from: Currency::USD,
            to: Currency::PKR,
            converted: 0.0,
        }
    }
}

impl ConversionState {
    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn from(&self) -> Currency {
        self.from
    }

    pub fn to(&self) -> Currency {
        self.to
    }

    pub fn converted(&self) -> f64 {
        self.converted
    }

    /// Sets the input amount and invalidates the converted result.
    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
        self.converted = 0.0;
    }

    /// Sets the source currency and invalidates the converted result.
    pub fn set_from(&mut self, from: Currency) {
        self.from = from;
        self.converted = 0.0;
    }

    /// Sets the destination currency and invalidates the converted result.
    pub fn set_to(&mut self, to: Currency) {
        self.to = to;
        self.converted = 0.0;
    }

    /// Exchanges the two currencies and, with them, the two amounts: the
    /// field that held the converted result becomes the new input amount
    /// and vice versa. One atomic transition; applying it twice restores
    /// the original state exactly.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
        std::mem::swap(&mut self.amount, &mut self.converted);
    }

    /// Multiplies the amount by the destination currency's rate.
    ///
    /// If no rate exists or the amount is zero, the state is left
    /// untouched with no error; the submit button's disabled state is
    /// what keeps the user out of this path.
    pub fn convert(&mut self, rates: &RateTable) {
        if self.amount <= 0.0 {
            return;
        }
        if let Some(rate) = rates.get(self.to) {
            self.converted = self.amount * rate;
        }
    }
}

/// Reduces a raw amount keystroke string to a number.
///
/// Every character that is not an ASCII digit or a decimal point is
/// stripped; an empty or unparseable remainder maps to zero.
pub fn sanitize_amount(input: &str) -> f64 {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(Currency, f64)]) -> RateTable {
        entries.iter().copied().collect()
    }

    #[test]
    fn sanitize_strips_non_numeric_characters() {
        assert_eq!(sanitize_amount("12a.3b4"), 12.34);
        assert_eq!(sanitize_amount("1,234"), 1234.0);
        assert_eq!(sanitize_amount("$99"), 99.0);
    }

    #[test]
    fn sanitize_defaults_to_zero() {
        assert_eq!(sanitize_amount(""), 0.0);
        assert_eq!(sanitize_amount("abc"), 0.0);
        assert_eq!(sanitize_amount("1.2.3"), 0.0);
    }

    #[test]
    fn setters_invalidate_converted_amount() {
        let mut state = ConversionState::default();
        state.set_amount(100.0);
        state.convert(&table(&[(Currency::PKR, 280.5)]));
        assert_eq!(state.converted(), 28050.0);

        state.set_amount(50.0);
        assert_eq!(state.converted(), 0.0);

        state.convert(&table(&[(Currency::PKR, 280.5)]));
        state.set_from(Currency::EUR);
        assert_eq!(state.converted(), 0.0);

        state.convert(&table(&[(Currency::PKR, 280.5)]));
        state.set_to(Currency::PKR);
        assert_eq!(state.converted(), 0.0);
    }

    #[test]
    fn convert_multiplies_by_destination_rate() {
        let mut state = ConversionState::default();
        state.set_amount(100.0);
        state.convert(&table(&[(Currency::PKR, 280.5)]));
        assert_eq!(state.converted(), 28050.0);
    }

    #[test]
    fn convert_with_zero_amount_is_inert() {
        let mut state = ConversionState::default();
        state.convert(&table(&[(Currency::PKR, 280.5)]));
        assert_eq!(state, ConversionState::default());
    }

    #[test]
    fn convert_without_a_rate_is_inert() {
        let mut state = ConversionState::default();
        state.set_amount(100.0);
        let before = state;
        state.convert(&table(&[(Currency::EUR, 0.92)]));
        assert_eq!(state, before);
    }

    #[test]
    fn swap_exchanges_both_pairs() {
        let mut state = ConversionState::default();
        state.set_amount(100.0);
        state.convert(&table(&[(Currency::PKR, 280.5)]));

        state.swap();
        assert_eq!(state.from(), Currency::PKR);
        assert_eq!(state.to(), Currency::USD);
        assert_eq!(state.amount(), 28050.0);
        assert_eq!(state.converted(), 100.0);
    }

    #[test]
    fn swap_is_an_involution() {
        let mut state = ConversionState::default();
        state.set_amount(42.0);
        state.convert(&table(&[(Currency::PKR, 280.5)]));
        let before = state;

        state.swap();
        state.swap();
        assert_eq!(state, before);
    }
}
