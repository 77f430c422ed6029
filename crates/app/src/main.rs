use dioxus::prelude::*;
use session::HttpAuthClient;

mod auth;
mod pages;
use auth::AuthState;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();
        server::health::record_start_time();
        tracing::info!(users = config.users.len(), "starting DentalCRM");

        let router = dioxus::server::router(App)
            .merge(server::api_router(config))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(HttpAuthClient::default);
    use_context_provider(AuthState::new);

    rsx! {
        document::Title { "DentalCRM" }
        document::Link { rel: "stylesheet", href: THEME }
        pages::Index {}
    }
}
