//! Data Panel
//!
//! Listed-company metrics, the Excel upload card and the stock/IPO tables.

use leptos::*;

use econboard::dashboard::panels::{UPLOAD_BUTTON_LABEL, UPLOAD_HEADING, UPLOAD_HINT};
use econboard::dashboard::{
    panel, FinancialYear, Icon, IpoListing, StockQuote, Tab, UploadLog, RECENT_IPOS, TOP_STOCKS,
};

use crate::components::{MetricCard, PanelHeader};

/// Listed and unlisted company data
#[component]
pub fn DataDashboard(
    #[prop(into)] selected_year: Signal<FinancialYear>,
    #[prop(into)] on_year_change: Callback<FinancialYear>,
) -> impl IntoView {
    let panel = panel(Tab::Data);

    view! {
        <div class="space-y-8">
            <PanelHeader panel=panel selected_year=selected_year on_year_change=on_year_change />

            <UploadCard />

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {panel.metrics
                    .iter()
                    .map(|metric| view! { <MetricCard metric=metric /> })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <TopStocks stocks=&TOP_STOCKS />
                <RecentIpos ipos=&RECENT_IPOS />
            </div>
        </div>
    }
}

/// Simulated Excel upload; each click records one synthesized file name
#[component]
fn UploadCard() -> impl IntoView {
    let uploads = create_rw_signal(UploadLog::new());

    let on_upload = move |_| {
        uploads.update(|log| {
            let name = log.record();
            web_sys::console::log_1(&format!("Simulated upload: {}", name).into());
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6 border border-dashed border-gray-600">
            <h2 class="text-xl font-semibold flex items-center gap-2 mb-2">
                <span>{Icon::FileSpreadsheet.glyph()}</span>
                {UPLOAD_HEADING}
            </h2>
            <p class="text-gray-400 text-sm mb-4">{UPLOAD_HINT}</p>

            <button
                on:click=on_upload
                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium
                       transition-colors flex items-center gap-2"
            >
                <span>{Icon::Upload.glyph()}</span>
                {UPLOAD_BUTTON_LABEL}
            </button>

            <Show when=move || uploads.with(|log| !log.is_empty())>
                <div class="mt-6">
                    <h3 class="text-sm font-semibold text-gray-300 mb-2">"Recent Uploads:"</h3>
                    <ul class="space-y-2">
                        {move || {
                            uploads.with(|log| {
                                log.files()
                                    .iter()
                                    .map(|name| view! {
                                        <li class="flex items-center justify-between bg-gray-700 rounded px-3 py-2 text-sm">
                                            <span>{name.clone()}</span>
                                            <span class="text-growth">"✓ Processed"</span>
                                        </li>
                                    })
                                    .collect_view()
                            })
                        }}
                    </ul>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn TopStocks(stocks: &'static [StockQuote]) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Top Performing Stocks"</h2>
            <div class="space-y-3">
                {stocks
                    .iter()
                    .map(|stock| view! {
                        <div class="flex items-center justify-between">
                            <span class="font-medium">{stock.name}</span>
                            <div class="flex items-center gap-4">
                                <span class=stock.change_class()>{stock.change_text()}</span>
                                <span class="text-gray-300">{stock.price_text()}</span>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn RecentIpos(ipos: &'static [IpoListing]) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Recent IPOs"</h2>
            <div class="space-y-3">
                {ipos
                    .iter()
                    .map(|ipo| view! {
                        <div class="flex items-center justify-between">
                            <div>
                                <p class="font-medium">{ipo.name}</p>
                                <p class="text-xs text-gray-400">{format!("{} • {}", ipo.exchange, ipo.date)}</p>
                            </div>
                            <span class="text-primary font-semibold">{ipo.size}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
