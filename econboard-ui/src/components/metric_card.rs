//! Metric Card Component
//!
//! Displays a single metric with its value, change and trend indicator.

use leptos::*;

use econboard::dashboard::Metric;

/// Metric card component
#[component]
pub fn MetricCard(
    /// Metric literal to display
    metric: &'static Metric,
    /// Click handler; when set the card is clickable and receives the title
    #[prop(optional, into)]
    on_click: Option<Callback<&'static str>>,
    /// Whether this card is the one opened for analysis
    #[prop(optional, into)]
    selected: MaybeSignal<bool>,
) -> impl IntoView {
    let polarity = metric.polarity();
    let clickable = on_click.is_some();

    let handle_click = move |_| {
        if let Some(cb) = on_click {
            cb.call(metric.title);
        }
    };

    view! {
        <div
            class=move || card_class(clickable, selected.get())
            on:click=handle_click
        >
            // Header with icon, title and trend indicator
            <div class="flex items-start justify-between mb-4">
                <div class="flex items-center gap-2">
                    {metric.icon.map(|icon| view! {
                        <span class="text-primary">{icon.glyph()}</span>
                    })}
                    <h3 class="font-semibold text-sm text-muted-foreground">{metric.title}</h3>
                </div>
                {metric.change.map(|_| view! {
                    <span class=format!("flex items-center gap-1 {}", polarity.indicator_class())>
                        {polarity.indicator()}
                    </span>
                })}
            </div>

            <div class="space-y-2">
                <div class="flex items-baseline gap-2">
                    <span class="text-2xl font-bold">{metric.display_value()}</span>
                    {metric.unit.map(|u| view! {
                        <span class="text-sm text-muted-foreground">{u}</span>
                    })}
                </div>

                {metric.change_text().map(|text| view! {
                    <div class=format!("text-sm font-medium {}", polarity.text_class())>
                        {text}
                    </div>
                })}

                {metric.description.map(|d| view! {
                    <p class="text-xs text-muted-foreground leading-relaxed">{d}</p>
                })}
            </div>

            {clickable.then(|| view! {
                <div class="mt-4 text-xs text-primary opacity-0 group-hover:opacity-100 transition-opacity">
                    "Click to analyze →"
                </div>
            })}
        </div>
    }
}

fn card_class(clickable: bool, selected: bool) -> String {
    let mut class = String::from("metric-card group");
    if clickable {
        class.push_str(" cursor-pointer");
    }
    if selected {
        class.push_str(" selected");
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_class() {
        assert_eq!(card_class(false, false), "metric-card group");
        assert_eq!(card_class(true, false), "metric-card group cursor-pointer");
        assert_eq!(card_class(true, true), "metric-card group cursor-pointer selected");
    }
}
