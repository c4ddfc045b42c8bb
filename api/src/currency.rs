//! Defines the currencies supported by the converter.

use serde::Deserialize;
use serde::Serialize;

/// A currency supported by the conversion form, identified by its ISO 4217 code.
///
/// Parsing is case-insensitive, so codes coming back from the rate service
/// ("USD") and codes used by the selector UI ("usd") normalize to the same
/// variant. This is the single casing boundary in the application.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, Default, strum::EnumIter, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    #[default]
    USD, // United States Dollar
    EUR, // Euro
    GBP, // Great British Pound
    JPY, // Japanese Yen
    CAD, // Canadian Dollar
    AUD, // Australian Dollar
    CHF, // Swiss Franc
    CNY, // Chinese Yuan
    SEK, // Swedish Krona
    NZD, // New Zealand Dollar
    MXN, // Mexican Peso
    SGD, // Singapore Dollar
    HKD, // Hong Kong Dollar
    NOK, // Norwegian Krone
    TRY, // Turkish Lira
    RUB, // Russian Ruble
    INR, // Indian Rupee
    BRL, // Brazilian Real
    ZAR, // South African Rand
    KRW, // South Korean Won
    PKR, // Pakistani Rupee
    BDT, // Bangladeshi Taka
    LKR, // Sri Lankan Rupee
    NPR, // Nepalese Rupee
    PHP, // Philippine Peso
    THB, // Thai Baht
    VND, // Vietnamese Đồng
    IDR, // Indonesian Rupiah
    MYR, // Malaysian Ringgit
    DKK, // Danish Krone
    PLN, // Polish Złoty
    CZK, // Czech Koruna
    HUF, // Hungarian Forint
    RON, // Romanian Leu
    BGN, // Bulgarian Lev
    HRK, // Croatian Kuna
}

impl Currency {
    /// Returns every supported currency, in selector display order.
    pub fn all() -> impl Iterator<Item = Currency> {
        <Self as strum::IntoEnumIterator>::iter()
    }

    /// Returns the uppercase ISO 4217 code (e.g., "USD").
    /// This is handled by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the lowercase code shown in the currency selector.
    pub fn lower_code(&self) -> String {
        self.code().to_ascii_lowercase()
    }

    /// Returns the graphical symbol for the currency, if one exists.
    ///
    /// Currencies without an entry in the symbol table render their
    /// uppercase code instead; see [`Currency::display_symbol`].
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::JPY => "¥",
            Self::CAD => "C$",
            Self::AUD => "A$",
            Self::CHF => "CHF",
            Self::CNY => "¥",
            Self::SEK => "kr",
            Self::NZD => "NZ$",
            Self::MXN => "$",
            Self::SGD => "S$",
            Self::HKD => "HK$",
            Self::NOK => "kr",
            Self::TRY => "₺",
            Self::RUB => "₽",
            Self::INR => "₹",
            Self::BRL => "R$",
            Self::ZAR => "R",
            Self::KRW => "₩",
            Self::PKR => "Rs",
            Self::BDT => "৳",
            Self::LKR => "₨",
            Self::NPR => "₨",
            Self::PHP => "₱",
            Self::THB => "฿",
            Self::VND => "₫",
            Self::IDR => "Rp",
            Self::MYR => "RM",
            Self::DKK => "kr",
            Self::PLN | Self::CZK | Self::HUF | Self::RON | Self::BGN | Self::HRK => return None,
        };
        Some(symbol)
    }

    /// Returns the symbol used for display, falling back to the uppercase code.
    pub fn display_symbol(&self) -> &'static str {
        self.symbol().unwrap_or_else(|| self.code())
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::USD => "United States Dollar",
            Self::EUR => "Euro",
            Self::GBP => "Great British Pound",
            Self::JPY => "Japanese Yen",
            Self::CAD => "Canadian Dollar",
            Self::AUD => "Australian Dollar",
            Self::CHF => "Swiss Franc",
            Self::CNY => "Chinese Yuan",
            Self::SEK => "Swedish Krona",
            Self::NZD => "New Zealand Dollar",
            Self::MXN => "Mexican Peso",
            Self::SGD => "Singapore Dollar",
            Self::HKD => "Hong Kong Dollar",
            Self::NOK => "Norwegian Krone",
            Self::TRY => "Turkish Lira",
            Self::RUB => "Russian Ruble",
            Self::INR => "Indian Rupee",
            Self::BRL => "Brazilian Real",
            Self::ZAR => "South African Rand",
            Self::KRW => "South Korean Won",
            Self::PKR => "Pakistani Rupee",
            Self::BDT => "Bangladeshi Taka",
            Self::LKR => "Sri Lankan Rupee",
            Self::NPR => "Nepalese Rupee",
            Self::PHP => "Philippine Peso",
            Self::THB => "Thai Baht",
            Self::VND => "Vietnamese Đồng",
            Self::IDR => "Indonesian Rupiah",
            Self::MYR => "Malaysian Ringgit",
            Self::DKK => "Danish Krone",
            Self::PLN => "Polish Złoty",
            Self::CZK => "Czech Koruna",
            Self::HUF => "Hungarian Forint",
            Self::RON => "Romanian Leu",
            Self::BGN => "Bulgarian Lev",
            Self::HRK => "Croatian Kuna",
        }
    }

    /// Formats a converted amount for display in the destination field
    /// (e.g., `"Rs 1,234.50"`).
    ///
    /// A zero (or non-finite) amount formats to an empty string so the
    /// field stays blank until a conversion has actually been performed.
    pub fn format_converted(&self, amount: f64) -> String {
        if !amount.is_finite() || amount <= 0.0 {
            return String::new();
        }
        format!("{} {}", self.display_symbol(), group_thousands(amount))
    }
}

/// Renders an amount with two fixed decimal places and comma-grouped
/// thousands (`1234.5` -> `"1,234.50"`).
fn group_thousands(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push('.');
    grouped.push_str(frac_part);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("usd".parse::<Currency>(), Ok(Currency::USD));
        assert_eq!("PKR".parse::<Currency>(), Ok(Currency::PKR));
        assert_eq!("Eur".parse::<Currency>(), Ok(Currency::EUR));
        assert!("xxx".parse::<Currency>().is_err());
    }

    #[test]
    fn codes_round_trip() {
        for currency in Currency::all() {
            assert_eq!(currency.lower_code().parse::<Currency>(), Ok(currency));
            assert_eq!(currency.code().len(), 3);
        }
    }

    #[test]
    fn display_symbol_falls_back_to_code() {
        assert_eq!(Currency::PKR.display_symbol(), "Rs");
        assert_eq!(Currency::PLN.symbol(), None);
        assert_eq!(Currency::PLN.display_symbol(), "PLN");
    }

    #[test]
    fn formats_with_symbol_and_grouping() {
        assert_eq!(Currency::PKR.format_converted(1234.5), "Rs 1,234.50");
        assert_eq!(Currency::USD.format_converted(1_000_000.0), "$ 1,000,000.00");
        assert_eq!(Currency::PLN.format_converted(1234.5), "PLN 1,234.50");
        assert_eq!(Currency::EUR.format_converted(7.0), "€ 7.00");
    }

    #[test]
    fn zero_amount_formats_to_empty_string() {
        assert_eq!(Currency::PKR.format_converted(0.0), "");
        assert_eq!(Currency::USD.format_converted(f64::NAN), "");
    }

    #[test]
    fn grouping_handles_short_and_exact_groups() {
        assert_eq!(group_thousands(5.0), "5.00");
        assert_eq!(group_thousands(100.0), "100.00");
        assert_eq!(group_thousands(1000.0), "1,000.00");
        assert_eq!(group_thousands(28050.0), "28,050.00");
    }
}
