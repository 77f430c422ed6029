use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdLogOut};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, RoleBadge, RoleDisc, RoleSwitcher};

use crate::auth::use_auth;

/// One-line welcome per working area.
pub fn role_greeting(role: Role) -> &'static str {
    match role {
        Role::Patient => "Ваши записи на приём и история лечения.",
        Role::Doctor => "Ваши пациенты, приёмы и планы лечения.",
        Role::Admin => "Запись пациентов и расписание приёмов.",
        Role::Director => "Отчёты клиники и контроль работы персонала.",
        Role::Nurse => "Подготовка кабинетов и помощь врачу на приёме.",
        Role::Support => "Обращения пользователей и состояние системы.",
        Role::ProjectAdmin => "Настройки CRM, пользователи и доступы.",
    }
}

/// Signed-in shell: who is logged in, the active role and the role switcher.
#[component]
pub fn Dashboard() -> Element {
    let mut auth = use_auth();

    let Some(session) = auth.controller.read().session().cloned() else {
        return rsx! {};
    };
    let active = session.active_role();
    let roles = session.roles().to_vec();
    let multi_role = roles.len() > 1;
    let full_name = session.full_name().to_string();
    let email = session.email().to_string();

    rsx! {
        div { class: "dashboard",
            header { class: "dashboard-header",
                div { class: "brand-line",
                    Icon::<LdActivity> { icon: LdActivity, width: 28, height: 28, class: "brand-icon" }
                    span { class: "brand-name", "DentalCRM" }
                }
                div { class: "dashboard-user",
                    div { class: "dashboard-user-text",
                        span { class: "dashboard-user-name", "{full_name}" }
                        span { class: "dashboard-user-email", "{email}" }
                    }
                    RoleBadge { role: active }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| auth.logout(),
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Выйти"
                    }
                }
            }
            main { class: "dashboard-main",
                if multi_role {
                    RoleSwitcher {
                        roles,
                        active,
                        on_switch: move |role| auth.switch_role(role),
                    }
                }
                Card {
                    CardHeader {
                        title: active.display_name().to_string(),
                        subtitle: role_greeting(active).to_string(),
                        visual: rsx! { RoleDisc { role: active, size: 48 } },
                    }
                    CardContent {
                        p { class: "muted", "Рабочее место в разработке." }
                    }
                }
            }
        }
    }
}
