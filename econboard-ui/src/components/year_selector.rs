//! Year Selector Component

use leptos::*;

use econboard::dashboard::{FinancialYear, Icon};

/// Controlled dropdown over the financial-year labels
#[component]
pub fn YearSelector(
    #[prop(into)] selected_year: Signal<FinancialYear>,
    #[prop(into)] on_year_change: Callback<FinancialYear>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <span class="text-primary">{Icon::Calendar.glyph()}</span>
            <label class="text-sm text-gray-400">"Financial Year:"</label>
            <select
                on:change=move |ev| on_year_change.call(FinancialYear::new(event_target_value(&ev)))
                prop:value=move || selected_year.get().as_str().to_string()
                class="bg-gray-700 rounded px-3 py-2 text-sm
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                {FinancialYear::options()
                    .map(|year| {
                        let label = year.as_str().to_string();
                        view! { <option value=label.clone()>{label}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
