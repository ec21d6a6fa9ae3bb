//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the one `Signal<AppState>` of the app and is the
//! only place that writes it. Components read snapshots through
//! [`use_session`] and ask for changes by sending events through
//! [`use_dispatch`].

use api::ApiClient;
use dioxus::prelude::*;
use store::{AppState, ClientConfig, Event};

/// Handle children use to send events to the session owner.
#[derive(Clone, Copy)]
struct Dispatch(Callback<Event>);

/// Get the current client state.
/// Returns a signal that updates on every transition.
pub fn use_session() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Get the callback that feeds events into the session reducer.
pub fn use_dispatch() -> Callback<Event> {
    use_context::<Dispatch>().0
}

/// Provider component that owns the session state.
/// Wrap the app with this component; it starts the identity check on mount.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let state = use_context_provider(|| Signal::new(AppState::new()));

    let client = use_hook(move || match ApiClient::new(&config) {
        Ok(client) => {
            tracing::info!("Using backend at {}", client.base_url());
            Some(client)
        }
        Err(e) => {
            tracing::error!("Failed to create API client: {}", e);
            None
        }
    });

    let dispatch_client = client.clone();
    let dispatch = use_callback(move |event: Event| {
        if let Some(client) = &dispatch_client {
            run(state, client.clone(), event);
        }
    });
    use_context_provider(|| Dispatch(dispatch));

    // Identity check on mount
    use_effect(move || dispatch.call(Event::Started));

    if client.is_none() {
        return rsx! {
            div {
                class: "loading-container",
                div {
                    class: "error-message",
                    "Invalid backend URL. Check postboard.toml or POSTBOARD_API_BASE."
                }
            }
        };
    }

    rsx! {
        {children}
    }
}

/// Apply an event, then execute its effects in the background and feed each
/// outcome back in.
fn run(mut state: Signal<AppState>, client: ApiClient, event: Event) {
    let effects = store::update(&mut state.write(), event);
    for effect in effects {
        let client = client.clone();
        spawn(async move {
            let outcome = api::perform(&client, effect).await;
            run(state, client, outcome);
        });
    }
}
