//! Markets Panel

use leptos::*;

use econboard::dashboard::{panel, FinancialYear, Tab};

use super::analytics::AnalyticsPanel;

/// Indices, flows and market capitalisation
#[component]
pub fn MarketsDashboard(
    #[prop(into)] selected_year: Signal<FinancialYear>,
    #[prop(into)] on_year_change: Callback<FinancialYear>,
) -> impl IntoView {
    view! {
        <AnalyticsPanel
            panel=panel(Tab::Markets)
            selected_year=selected_year
            on_year_change=on_year_change
        />
    }
}
