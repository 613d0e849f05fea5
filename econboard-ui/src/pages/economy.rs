//! Economy Panel

use leptos::*;

use econboard::dashboard::{panel, FinancialYear, Tab};

use super::analytics::AnalyticsPanel;

/// Indian economy indicators
#[component]
pub fn EconomyDashboard(
    #[prop(into)] selected_year: Signal<FinancialYear>,
    #[prop(into)] on_year_change: Callback<FinancialYear>,
) -> impl IntoView {
    view! {
        <AnalyticsPanel
            panel=panel(Tab::Economy)
            selected_year=selected_year
            on_year_change=on_year_change
        />
    }
}
