use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

/// Labelled form control.
#[component]
pub fn Field(label: String, #[props(default)] required: bool, children: Element) -> Element {
    rsx! {
        label {
            class: "field",
            span {
                class: "field-label",
                "{label}"
                if required {
                    span { class: "field-required", " *" }
                }
            }
            {children}
        }
    }
}

#[component]
pub fn SearchBox(value: String, placeholder: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "search-box",
            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                class: "input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
        }
    }
}

#[component]
pub fn Spinner(#[props(default)] label: Option<String>) -> Element {
    rsx! {
        div {
            class: "spinner-block",
            span { class: "spinner" }
            if let Some(label) = label {
                p { "{label}" }
            }
        }
    }
}
