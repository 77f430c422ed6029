use dioxus::prelude::*;

/// Surface container for the sign-in card and dashboard panels.
///
/// With `onclick` set the card renders as an interactive tile (hover lift, pointer cursor).
#[component]
pub fn Card(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let interactive = onclick.is_some();
    let base = vec![
        Attribute::new("class", "card", None, false),
        Attribute::new(
            "data-interactive",
            if interactive { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {children}
        }
    }
}

/// Centered title block: optional visual, heading and a muted subtitle.
#[component]
pub fn CardHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] visual: Element,
) -> Element {
    rsx! {
        div { class: "card-header",
            {visual}
            h2 { class: "card-title", "{title}" }
            if let Some(sub) = subtitle {
                p { class: "card-subtitle", "{sub}" }
            }
        }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}
