use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdActivity;
use dioxus_free_icons::Icon;
use shared_ui::RoleGrid;

use crate::auth::use_auth;

/// Landing view: pick the role you are signing in as.
#[component]
pub fn RolePicker() -> Element {
    let mut auth = use_auth();

    rsx! {
        div { class: "page",
            div { class: "page-wide",
                div { class: "brand",
                    div { class: "brand-line",
                        Icon::<LdActivity> { icon: LdActivity, width: 40, height: 40, class: "brand-icon" }
                        h1 { class: "brand-name", "DentalCRM" }
                    }
                    p { class: "brand-tagline", "Выберите роль для входа" }
                }
                RoleGrid { on_pick: move |role| auth.pick_role(role) }
            }
        }
    }
}
