//! Ticker Bar Component
//!
//! "LIVE MARKETS" strip that moves its highlight through the market quotes.

use gloo_timers::callback::Interval;
use leptos::*;

use econboard::ticker::{TickerCycle, TickerItem, MARKET_TICKER, TICKER_CAPTION, TICKER_INTERVAL_MS};

/// Market ticker strip
#[component]
pub fn TickerBar() -> impl IntoView {
    let cycle = create_rw_signal(TickerCycle::new(MARKET_TICKER.len()));

    let interval = Interval::new(TICKER_INTERVAL_MS as u32, move || {
        cycle.update(|c| {
            c.advance();
        });
    });
    on_cleanup(move || drop(interval));

    view! {
        <div class="bg-gray-800 border-b border-gray-700 overflow-hidden">
            <div class="container mx-auto px-4 py-2 flex items-center gap-6 text-sm">
                <span class="flex items-center gap-2 font-bold text-primary whitespace-nowrap">
                    <span class="w-2 h-2 rounded-full bg-green-500 animate-pulse"></span>
                    {TICKER_CAPTION}
                </span>

                <div class="flex items-center gap-6 overflow-x-auto">
                    {MARKET_TICKER
                        .iter()
                        .enumerate()
                        .map(move |(idx, item)| view! {
                            <TickerEntry
                                item=item
                                current=Signal::derive(move || cycle.with(|c| c.is_current(idx)))
                            />
                        })
                        .collect_view()}
                </div>

                <span class="ml-auto text-xs text-muted-foreground whitespace-nowrap">
                    "Last Updated: "
                    {move || {
                        // Re-read on every advance so the clock follows the ticker
                        cycle.track();
                        chrono::Local::now().format("%H:%M:%S").to_string()
                    }}
                </span>
            </div>
        </div>
    }
}

/// One quote in the strip
#[component]
fn TickerEntry(item: &'static TickerItem, #[prop(into)] current: Signal<bool>) -> impl IntoView {
    let polarity = item.polarity();

    view! {
        <div class=move || entry_class(current.get())>
            <span class="font-semibold">{item.symbol}</span>
            <span>{item.value_text()}</span>
            <span class=polarity.ticker_class()>
                {item.arrow().map(|a| format!("{} ", a))}
                {item.change_text()}
            </span>
        </div>
    }
}

fn entry_class(current: bool) -> &'static str {
    if current {
        "ticker-item current flex items-center gap-2 whitespace-nowrap"
    } else {
        "ticker-item flex items-center gap-2 whitespace-nowrap"
    }
}
