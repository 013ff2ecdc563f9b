//! Login screen with the Google sign-in button.

use dioxus::prelude::*;
use ui::LoginButton;

/// Login screen component.
///
/// Sign-in failures come back from the OAuth callback as an `error`
/// query parameter; they are shown here as a blocking notice and the
/// user retries manually.
#[component]
pub fn Login() -> Element {
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        if let Some(message) = callback_error() {
            error.set(Some(message));
        }
    });

    rsx! {
        div {
            class: "container",

            h1 { "Login" }

            LoginButton {
                class: "login-btn",
                on_error: move |message: String| error.set(Some(message)),
            }

            if let Some(message) = error() {
                p { class: "error-notice", "Erro: {message}" }
            }
        }
    }
}

/// Read the `error` query parameter left by the OAuth callback redirect.
fn callback_error() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        let code = search
            .trim_start_matches('?')
            .split('&')
            .find_map(|pair| pair.strip_prefix("error="))?;
        Some(match code {
            "oauth_error" => "falha na autenticação com o Google".to_string(),
            "missing_code" | "missing_state" | "config_error" => {
                "login não configurado corretamente".to_string()
            }
            "session_error" => "não foi possível iniciar a sessão".to_string(),
            other => other.to_string(),
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
