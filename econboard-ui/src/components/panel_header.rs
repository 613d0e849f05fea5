//! Panel Header Component

use leptos::*;

use econboard::dashboard::{FinancialYear, Panel};

use super::YearSelector;

/// Title, subtitle and year selector shared by every panel
#[component]
pub fn PanelHeader(
    panel: &'static Panel,
    #[prop(into)] selected_year: Signal<FinancialYear>,
    #[prop(into)] on_year_change: Callback<FinancialYear>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
            <div>
                <h1 class="text-3xl font-bold flex items-center gap-3">
                    <span>{panel.tab.icon().glyph()}</span>
                    {panel.title}
                </h1>
                <p class="text-gray-400 mt-1">{panel.subtitle}</p>
            </div>
            <YearSelector selected_year=selected_year on_year_change=on_year_change />
        </div>
    }
}
