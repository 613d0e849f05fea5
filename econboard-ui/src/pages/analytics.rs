//! Analytics Panel Body
//!
//! Metric grid, analysis panel and charts shared by the economy and markets
//! panels. The card selection lives here and resets when the panel unmounts.

use leptos::*;

use econboard::dashboard::{FinancialYear, MetricSelection, Panel};

use crate::components::{AnalysisPanel, MetricCard, PanelHeader, TimeSeriesChart};

#[component]
pub fn AnalyticsPanel(
    panel: &'static Panel,
    selected_year: Signal<FinancialYear>,
    on_year_change: Callback<FinancialYear>,
) -> impl IntoView {
    let selection = create_rw_signal(MetricSelection::new());

    let on_card_click = Callback::new(move |title: &'static str| {
        selection.update(|s| s.toggle(title));
    });
    let on_close = Callback::new(move |_: ()| selection.update(|s| s.clear()));

    view! {
        <div class="space-y-8">
            <PanelHeader panel=panel selected_year=selected_year on_year_change=on_year_change />

            // Metric grid
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {panel.metrics
                    .iter()
                    .map(move |metric| {
                        let selected = Signal::derive(move || {
                            selection.with(|s| s.is_selected(metric.title))
                        });
                        view! {
                            <MetricCard metric=metric on_click=on_card_click selected=selected />
                        }
                    })
                    .collect_view()}
            </div>

            // Analysis for the selected card
            {move || {
                let template = panel.analysis?;
                let title = selection.with(|s| s.selected().map(str::to_string))?;
                Some(view! { <AnalysisPanel template=template metric=title on_close=on_close /> })
            }}

            // Charts
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                {panel.charts
                    .iter()
                    .map(|spec| view! { <TimeSeriesChart spec=*spec /> })
                    .collect_view()}
            </div>
        </div>
    }
}
