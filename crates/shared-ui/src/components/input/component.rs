use dioxus::prelude::*;

/// Labelled single-line input wired to a controlled value.
#[component]
pub fn TextField(
    id: String,
    label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] autocomplete: Option<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field",
            label { class: "field-label", r#for: "{id}", "{label}" }
            input {
                class: "field-input",
                id: "{id}",
                name: "{id}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                autocomplete: autocomplete,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
            }
        }
    }
}
