use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowLeft;
use dioxus_free_icons::Icon;
use session::FormMode;
use shared_types::Role;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, RoleDisc, TextField};

use crate::auth::{use_auth, use_auth_client};

/// Sign-in card for the picked role, with a toggle into registration.
#[component]
pub fn SignIn(role: Role) -> Element {
    let mut auth = use_auth();
    let client = use_auth_client();

    let ctl = auth.controller.read();
    let mode = ctl.mode();
    let email = ctl.credentials().email.clone();
    let password = ctl.credentials().password.clone();
    let full_name = ctl.full_name().to_string();
    let busy = ctl.is_authenticating();
    let can_submit = ctl.can_submit();
    let error = ctl.last_error().map(str::to_string);
    drop(ctl);

    let registering = mode == FormMode::Register;
    let title = if registering {
        "Регистрация".to_string()
    } else {
        format!("Вход для {}", role.display_name())
    };
    let subtitle = if registering {
        "Создайте учётную запись пациента"
    } else {
        "Введите данные для входа"
    };

    let (busy_label, submit_label, password_hint) = if registering {
        ("Регистрация...", "Зарегистрироваться", "new-password")
    } else {
        ("Вход...", "Войти", "current-password")
    };

    rsx! {
        div { class: "page",
            div { class: "page-narrow",
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "back-link",
                    disabled: busy,
                    onclick: move |_| auth.back_to_roles(),
                    Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                    "Назад"
                }
                Card {
                    CardHeader {
                        title,
                        subtitle: subtitle.to_string(),
                        visual: rsx! { RoleDisc { role, size: 40 } },
                    }
                    CardContent {
                        form {
                            class: "auth-form",
                            onsubmit: move |evt: FormEvent| {
                                let client = client.clone();
                                async move {
                                    evt.prevent_default();
                                    auth.submit(&client).await;
                                }
                            },
                            if registering {
                                TextField {
                                    id: "full-name",
                                    label: "ФИО",
                                    value: full_name,
                                    placeholder: "Иванов Иван Иванович",
                                    autocomplete: "name".to_string(),
                                    disabled: busy,
                                    on_input: move |evt: FormEvent| auth.controller.write().set_full_name(evt.value()),
                                }
                            }
                            TextField {
                                id: "email",
                                label: "Email",
                                value: email,
                                input_type: "email",
                                placeholder: "doctor@clinic.ru",
                                autocomplete: "email".to_string(),
                                disabled: busy,
                                on_input: move |evt: FormEvent| auth.controller.write().set_email(evt.value()),
                            }
                            TextField {
                                id: "password",
                                label: "Пароль",
                                value: password,
                                input_type: "password",
                                autocomplete: password_hint.to_string(),
                                disabled: busy,
                                on_input: move |evt: FormEvent| auth.controller.write().set_password(evt.value()),
                            }
                            if let Some(message) = error {
                                p { class: "form-error", role: "alert", "{message}" }
                            }
                            Button {
                                button_type: "submit",
                                class: "submit",
                                disabled: !can_submit,
                                loading: busy,
                                loading_label: busy_label.to_string(),
                                "{submit_label}"
                            }
                        }
                        p { class: "mode-toggle",
                            if registering {
                                "Уже есть аккаунт? "
                                button {
                                    r#type: "button",
                                    class: "link",
                                    disabled: busy,
                                    onclick: move |_| auth.set_mode(FormMode::SignIn),
                                    "Войти"
                                }
                            } else {
                                "Нет аккаунта? "
                                button {
                                    r#type: "button",
                                    class: "link",
                                    disabled: busy,
                                    onclick: move |_| auth.set_mode(FormMode::Register),
                                    "Зарегистрироваться"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
