use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Resolved once; the backend URL never changes for the life of the page.
    let config = use_hook(ui::load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::POSTBOARD_CSS }

        ui::SessionProvider {
            config,
            ui::Shell {}
        }
    }
}
