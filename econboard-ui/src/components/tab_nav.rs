//! Tab Navigation Component
//!
//! Strip of the three dashboard tabs.

use leptos::*;

use econboard::dashboard::Tab;

/// Tab strip; the caller owns the active tab
#[component]
pub fn TabNavigation(
    #[prop(into)] active_tab: Signal<Tab>,
    #[prop(into)] on_tab_change: Callback<Tab>,
) -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center space-x-1 h-14">
                    {Tab::ALL
                        .into_iter()
                        .map(|tab| view! {
                            <TabButton tab=tab active_tab=active_tab on_tab_change=on_tab_change />
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

/// Individual tab button
#[component]
fn TabButton(tab: Tab, active_tab: Signal<Tab>, on_tab_change: Callback<Tab>) -> impl IntoView {
    view! {
        <button
            id=tab.id()
            on:click=move |_| on_tab_change.call(tab)
            class=move || {
                let base = "flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if active_tab.get() == tab {
                    format!("{} tab-active", base)
                } else {
                    format!("{} text-gray-300 hover:text-white hover:bg-gray-700", base)
                }
            }
        >
            <span>{tab.icon().glyph()}</span>
            <span>{tab.label()}</span>
        </button>
    }
}
