mod dashboard;
mod role_picker;
mod sign_in;

use dioxus::prelude::*;
use session::ViewState;

use crate::auth::use_auth;

/// The whole page: role grid, then the sign-in card, then the dashboard shell.
#[component]
pub fn Index() -> Element {
    let auth = use_auth();
    let view = auth.view();
    let picked = auth.controller.read().picked_role();

    match (view, picked) {
        (ViewState::LoggedIn, _) => rsx! { dashboard::Dashboard {} },
        (_, None) => rsx! { role_picker::RolePicker {} },
        (_, Some(role)) => rsx! { sign_in::SignIn { role } },
    }
}
