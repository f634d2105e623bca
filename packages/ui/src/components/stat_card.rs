use dioxus::prelude::*;

#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] hint: Option<String>,
    #[props(default = "blue".to_string())] tone: String,
) -> Element {
    rsx! {
        div {
            class: "stat-card stat-{tone}",
            p { class: "stat-label", "{label}" }
            p { class: "stat-value", "{value}" }
            if let Some(hint) = hint {
                p { class: "stat-hint", "{hint}" }
            }
        }
    }
}
