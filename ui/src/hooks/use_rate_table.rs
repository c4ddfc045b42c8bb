use api::currency::Currency;
use api::rate_provider::ExchangeRateApi;
use api::rate_provider::RateProvider;
use api::rate_table::RateTable;
use dioxus::prelude::*;

/// The rate adapter's observable output for one render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RateInfo {
    /// The last successfully fetched table. Kept through later failures,
    /// so it may be stale-but-present rather than empty.
    pub rates: RateTable,
    /// True while a fetch for the current base currency is in flight.
    pub loading: bool,
    /// The most recent fetch failure, cleared optimistically whenever a
    /// new fetch begins.
    pub error: Option<String>,
}

/// Subscribes to the exchange-rate service, keyed on the base currency.
///
/// Every change of `base` (including the first activation) restarts the
/// fetch; exactly one request is issued per distinct activation, with no
/// caching or retry. Restarting drops the superseded in-flight future, so
/// an out-of-date response can never overwrite a newer table.
pub fn use_rate_table(base: Memo<Currency>) -> RateInfo {
    let mut rates = use_signal(RateTable::default);
    let mut error = use_signal(|| None::<String>);
    // The base currency whose fetch most recently completed, success or
    // failure. `None` until the first response lands. Restarting the
    // resource does not reset its state signal, so pending-ness is
    // derived from this instead.
    let mut landed_base = use_signal(|| None::<Currency>);

    let resource = use_resource(move || async move {
        let base = base();
        (base, ExchangeRateApi::default().latest_rates(base).await)
    });

    // Fold each completed fetch into the retained table. The peek-compare
    // guards keep an unchanged result from re-triggering subscribers.
    use_effect(move || {
        if let Some((fetched_base, result)) = &*resource.read() {
            if *landed_base.peek() != Some(*fetched_base) {
                landed_base.set(Some(*fetched_base));
            }
            match result {
                Ok(table) => {
                    error.set(None);
                    if *rates.peek() != *table {
                        rates.set(table.clone());
                    }
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("rate fetch failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        }
    });

    let rates_now = rates.read().clone();
    let landed = *landed_base.read();
    let last_error = error.read().clone();

    assemble(rates_now, landed, base(), last_error)
}

/// Builds the adapter's observable output.
///
/// A fetch counts as in flight until a response for the *current* base
/// currency has landed; while it is, any previous error is masked,
/// mirroring the optimistic reset at the start of each fetch cycle.
fn assemble(
    rates: RateTable,
    landed_base: Option<Currency>,
    current_base: Currency,
    error: Option<String>,
) -> RateInfo {
    let loading = landed_base != Some(current_base);
    RateInfo {
        rates,
        loading,
        error: if loading { None } else { error },
    }
}
