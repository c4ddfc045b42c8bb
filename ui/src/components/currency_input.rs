// ui/src/components/currency_input.rs
use api::currency::Currency;
use dioxus::prelude::*;

use crate::converter::sanitize_amount;

/// One labeled amount-plus-currency control of the conversion form.
///
/// The control holds no state of its own: the owner passes the current
/// values down and receives edits back through the two event handlers.
/// Keystrokes are sanitized before being reported, and a disabled amount
/// field never emits a change. When `formatted` is set and non-empty it
/// overrides the raw numeric value shown in the field, which is how the
/// owner injects the symbol-prefixed converted amount.
#[component]
pub fn CurrencyInput(
    label: String,
    amount: f64,
    #[props(optional)] formatted: Option<String>,
    selected: Currency,
    on_amount_change: EventHandler<f64>,
    on_currency_change: EventHandler<Currency>,
    #[props(default = false)] amount_disabled: bool,
    #[props(default = false)] currency_disabled: bool,
) -> Element {
    let display_value = match formatted {
        Some(ref text) if !text.is_empty() => text.clone(),
        _ => amount.to_string(),
    };

    rsx! {
        div {
            style: "display: flex; gap: 1rem; align-items: flex-end;",
            div {
                style: "flex-grow: 1;",
                label {
                    style: "margin-bottom: 0.25rem;",
                    "{label}"
                }
                input {
                    r#type: "text",
                    class: "pico-input",
                    style: "margin-bottom: 0; width: 100%;",
                    inputmode: "decimal",
                    placeholder: "Amount",
                    value: "{display_value}",
                    disabled: amount_disabled,
                    oninput: move |event| {
                        if amount_disabled {
                            return;
                        }
                        on_amount_change.call(sanitize_amount(&event.value()));
                    },
                }
            }
            div {
                style: "flex-shrink: 0; text-align: right;",
                label {
                    style: "margin-bottom: 0.25rem;",
                    "Currency Type"
                }
                select {
                    style: "margin-bottom: 0; width: auto;",
                    value: "{selected.lower_code()}",
                    disabled: currency_disabled,
                    onchange: move |event| {
                        // Options come from the same enum, so a parse failure
                        // here would mean the DOM sent back an unknown code.
                        if let Ok(currency) = event.value().parse::<Currency>() {
                            on_currency_change.call(currency);
                        }
                    },
                    for currency in Currency::all() {
                        option {
                            key: "{currency.code()}",
                            value: "{currency.lower_code()}",
                            selected: currency == selected,
                            title: "{currency.name()}",
                            "{currency.lower_code()}"
                        }
                    }
                }
            }
        }
    }
}
