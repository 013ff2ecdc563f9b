//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount. After the OAuth redirect the page
    // reloads and this pick-up completes the sign-in.
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(user) => {
                auth_state.set(AuthState {
                    user,
                    loading: false,
                });
            }
            Err(_) => {
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button that starts the interactive Google sign-in.
#[component]
pub fn LoginButton(
    #[props(default = "Entrar com Google".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    /// Invoked when the sign-in URL could not be obtained.
    on_error: EventHandler<String>,
) -> Element {
    let mut loading = use_signal(|| false);

    let onclick = move |_| async move {
        loading.set(true);
        match api::get_login_url().await {
            Ok(url) => {
                // Redirect to the OAuth provider
                #[cfg(target_arch = "wasm32")]
                {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&url);
                    }
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    tracing::info!("open this URL to sign in: {}", url);
                    loading.set(false);
                }
            }
            Err(e) => {
                tracing::error!("Failed to get login URL: {}", e);
                on_error.call(e.to_string());
                loading.set(false);
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: loading(),
            onclick: onclick,
            if loading() {
                "Carregando..."
            } else {
                "{label}"
            }
        }
    }
}
