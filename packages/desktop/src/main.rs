use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = ui::load_config();
        tracing::debug!("Desktop client configured for {}", config.api.base_url);
        config
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::POSTBOARD_CSS }

        ui::SessionProvider {
            config,
            ui::Shell {}
        }
    }
}
