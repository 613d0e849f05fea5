//! App Root Component
//!
//! Owns the active tab and the selected financial year and hands both, with
//! their setters, down to the ticker, tab strip and active panel.

use leptos::*;

use econboard::dashboard::{DashboardState, FinancialYear, Tab};

use crate::components::{TabNavigation, TickerBar};
use crate::pages::{DataDashboard, EconomyDashboard, MarketsDashboard};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = create_rw_signal(DashboardState::default());

    let active_tab = Signal::derive(move || state.with(|s| s.active_tab));
    let selected_year = Signal::derive(move || state.with(|s| s.selected_year.clone()));

    let on_tab_change = Callback::new(move |tab: Tab| {
        state.update(|s| {
            s.select_tab(tab);
        });
    });
    let on_year_change = Callback::new(move |year: FinancialYear| {
        state.update(|s| s.select_year(year));
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <TickerBar />

            <TabNavigation active_tab=active_tab on_tab_change=on_tab_change />

            <main class="container mx-auto px-6 py-8 max-w-7xl">
                {move || match active_tab.get() {
                    Tab::Economy => view! {
                        <EconomyDashboard selected_year=selected_year on_year_change=on_year_change />
                    }.into_view(),
                    Tab::Markets => view! {
                        <MarketsDashboard selected_year=selected_year on_year_change=on_year_change />
                    }.into_view(),
                    Tab::Data => view! {
                        <DataDashboard selected_year=selected_year on_year_change=on_year_change />
                    }.into_view(),
                }}
            </main>
        </div>
    }
}
