//=============================================================================
// File: ui/src/screens/converter.rs
//=============================================================================
use api::currency::Currency;
use dioxus::prelude::*;

use crate::components::currency_input::CurrencyInput;
use crate::components::pico::{Button, ButtonType, Card};
use crate::converter::ConversionState;
use crate::hooks::use_rate_table::{use_rate_table, RateInfo};

/// The submit affordance is held disabled while the adapter loads, after
/// a fetch failure, and while no rate exists for the destination currency.
fn submit_disabled(info: &RateInfo, to: Currency) -> bool {
    info.loading || info.error.is_some() || info.rates.get(to).is_none()
}

fn submit_label(info: &RateInfo, from: Currency, to: Currency) -> String {
    if info.loading {
        "Loading...".to_string()
    } else if info.error.is_some() {
        "API Error".to_string()
    } else {
        format!("Convert {} to {}", from.code(), to.code())
    }
}

/// The conversion form: two input controls, a swap button between them,
/// and a submit button whose enabled state follows the rate adapter.
#[component]
pub fn ConverterScreen() -> Element {
    let mut state = use_signal(ConversionState::default);

    // The rate subscription is keyed on the "from" currency alone; edits
    // to the amount or the destination currency must not restart it.
    let base = use_memo(move || state.read().from());
    let info = use_rate_table(base);

    let current = *state.read();
    let disabled = submit_disabled(&info, current.to());
    let label = submit_label(&info, current.from(), current.to());

    // The destination field shows the symbol-prefixed result, or stays
    // blank while no conversion has been performed.
    let formatted_converted = current.to().format_converted(current.converted());

    let rates_for_submit = info.rates.clone();

    rsx! {
        Card {
            if let Some(err) = info.error.as_ref() {
                div {
                    style: "border: 1px solid var(--pico-color-red-500); border-radius: var(--pico-border-radius); color: var(--pico-color-red-500); padding: 0.75rem; margin-bottom: 1rem;",
                    "Error loading currency data: {err}"
                }
            }
            form {
                onsubmit: move |event| {
                    event.prevent_default();
                    state.with_mut(|s| s.convert(&rates_for_submit));
                },
                div {
                    style: "margin-bottom: 0.5rem;",
                    CurrencyInput {
                        label: "From",
                        amount: current.amount(),
                        selected: current.from(),
                        on_amount_change: move |amount| state.with_mut(|s| s.set_amount(amount)),
                        on_currency_change: move |currency| state.with_mut(|s| s.set_from(currency)),
                    }
                }
                div {
                    style: "display: flex; justify-content: center; margin-bottom: 0.5rem;",
                    Button {
                        button_type: ButtonType::Contrast,
                        outline: true,
                        on_click: move |_| state.with_mut(|s| s.swap()),
                        "Swap"
                    }
                }
                div {
                    style: "margin-bottom: 1rem;",
                    CurrencyInput {
                        label: "To",
                        amount: current.converted(),
                        formatted: formatted_converted,
                        selected: current.to(),
                        amount_disabled: true,
                        on_amount_change: move |_| {},
                        on_currency_change: move |currency| state.with_mut(|s| s.set_to(currency)),
                    }
                }
                Button {
                    html_type: "submit",
                    disabled,
                    "{label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_info(entries: &[(Currency, f64)]) -> RateInfo {
        RateInfo {
            rates: entries.iter().copied().collect(),
            loading: false,
            error: None,
        }
    }

    #[test]
    fn submit_is_disabled_while_loading() {
        let info = RateInfo {
            loading: true,
            ..RateInfo::default()
        };
        assert!(submit_disabled(&info, Currency::PKR));
        assert_eq!(submit_label(&info, Currency::USD, Currency::PKR), "Loading...");
    }

    #[test]
    fn submit_is_disabled_after_a_fetch_failure() {
        // A failed fetch leaves the prior table in place, but the button
        // must stay disabled and report the error state.
        let info = RateInfo {
            rates: [(Currency::PKR, 280.5)].into_iter().collect(),
            loading: false,
            error: Some("rate service returned HTTP 500".to_string()),
        };
        assert!(submit_disabled(&info, Currency::PKR));
        assert_eq!(submit_label(&info, Currency::USD, Currency::PKR), "API Error");
    }

    #[test]
    fn submit_is_disabled_without_a_destination_rate() {
        let info = ready_info(&[(Currency::EUR, 0.92)]);
        assert!(submit_disabled(&info, Currency::PKR));
    }

    #[test]
    fn submit_is_enabled_when_a_rate_is_ready() {
        let info = ready_info(&[(Currency::PKR, 280.5)]);
        assert!(!submit_disabled(&info, Currency::PKR));
        assert_eq!(
            submit_label(&info, Currency::USD, Currency::PKR),
            "Convert USD to PKR"
        );
    }
}
