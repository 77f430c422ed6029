use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdHeart, LdSettings, LdShield, LdStethoscope, LdUser, LdWrench,
};
use dioxus_free_icons::Icon;
use shared_types::{Role, RoleConfig, ALL_ROLES};

/// Glyph for a role, resolved from its catalog icon identifier.
#[component]
pub fn RoleIcon(role: Role, #[props(default = 24)] size: u32) -> Element {
    match role.config().icon {
        "Stethoscope" => rsx! { Icon::<LdStethoscope> { icon: LdStethoscope, width: size, height: size } },
        "Settings" => rsx! { Icon::<LdSettings> { icon: LdSettings, width: size, height: size } },
        "Briefcase" => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: size, height: size } },
        "Heart" => rsx! { Icon::<LdHeart> { icon: LdHeart, width: size, height: size } },
        "Wrench" => rsx! { Icon::<LdWrench> { icon: LdWrench, width: size, height: size } },
        "Shield" => rsx! { Icon::<LdShield> { icon: LdShield, width: size, height: size } },
        _ => rsx! { Icon::<LdUser> { icon: LdUser, width: size, height: size } },
    }
}

/// Classes for the colored disc behind a role icon.
pub fn role_disc_class(role: Role) -> String {
    format!("role-disc {}", role.config().color)
}

/// Role icon on its colored disc.
#[component]
pub fn RoleDisc(role: Role, #[props(default = 32)] size: u32) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: role_disc_class(role),
            RoleIcon { role, size }
        }
    }
}

/// Inline pill with the role's color and name.
#[component]
pub fn RoleBadge(role: Role) -> Element {
    let RoleConfig { name, color, .. } = *role.config();
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "role-badge {color}",
            RoleIcon { role, size: 14 }
            "{name}"
        }
    }
}

/// Grid of every role in catalog order; clicking a tile reports its role.
#[component]
pub fn RoleGrid(on_pick: EventHandler<Role>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "role-grid",
            for role in ALL_ROLES {
                crate::Card {
                    key: "{role}",
                    onclick: move |_| on_pick.call(role),
                    div { class: "role-tile",
                        RoleDisc { role }
                        h3 { class: "role-tile-name", {role.display_name()} }
                    }
                }
            }
        }
    }
}

/// Buttons for the roles a session holds; the active one is marked and inert.
#[component]
pub fn RoleSwitcher(roles: Vec<Role>, active: Role, on_switch: EventHandler<Role>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "role-switcher", role: "tablist",
            for role in roles {
                button {
                    key: "{role}",
                    r#type: "button",
                    role: "tab",
                    class: "role-switch",
                    "aria-selected": if role == active { "true" } else { "false" },
                    disabled: role == active,
                    onclick: move |_| on_switch.call(role),
                    RoleIcon { role, size: 16 }
                    {role.display_name()}
                }
            }
        }
    }
}
