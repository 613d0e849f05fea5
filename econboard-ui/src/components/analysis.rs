//! Analysis Panel Component
//!
//! Static commentary shown beneath the metric grid for the selected card.

use leptos::*;

use econboard::dashboard::AnalysisTemplate;

#[component]
pub fn AnalysisPanel(
    template: &'static AnalysisTemplate,
    /// Title of the selected metric
    metric: String,
    /// Closes the panel
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6 border border-primary-500">
            <div class="flex items-start justify-between mb-4">
                <h2 class="text-xl font-semibold">{template.heading_for(&metric)}</h2>
                <button
                    on:click=move |_| on_close.call(())
                    class="text-gray-400 hover:text-white"
                >
                    "✕"
                </button>
            </div>
            <p class="text-gray-300 mb-6">{template.intro_for(&metric)}</p>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {template.sections
                    .iter()
                    .map(|section| view! {
                        <div>
                            <h3 class="font-semibold mb-2 text-primary">{section.heading}</h3>
                            <ul class="space-y-1 text-sm text-gray-300">
                                {section.items
                                    .iter()
                                    .map(|item| view! { <li>{format!("• {}", item)}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
