//! Area selection screen.

use dioxus::prelude::*;

use store::{Area, DocumentStore, Profile};
use ui::{confirm_area, use_auth};

/// Area selector: a dropdown over the fixed set plus a confirm button.
///
/// Confirming with nothing chosen surfaces the validation message and
/// stays here; confirming a choice overwrites the profile and hands the
/// area to the parent, which switches to the form.
#[component]
pub fn AreaSelect(on_saved: EventHandler<Area>) -> Element {
    let auth = use_auth();
    let mut selection = use_signal(|| Option::<Area>::None);
    let mut message = use_signal(|| Option::<String>::None);

    let handle_confirm = move |_| {
        let area = match confirm_area(selection()) {
            Ok(area) => area,
            Err(e) => {
                // No profile write happens on an empty confirm.
                message.set(Some(e.to_string()));
                return;
            }
        };
        let Some(user) = auth().user else {
            return;
        };
        spawn(async move {
            let docs = ui::make_store();
            let profile = Profile {
                user_id: user.id.clone(),
                email: user.email.clone(),
                area: Some(area),
            };
            match docs.put_profile(&profile).await {
                Ok(()) => on_saved.call(area),
                Err(e) => message.set(Some(format!("Erro: {e}"))),
            }
        });
    };

    rsx! {
        div {
            class: "container",

            h1 { "Selecione sua área" }

            select {
                value: selection().map(|a| a.tag()).unwrap_or(""),
                onchange: move |evt| {
                    selection.set(Area::from_tag(&evt.value()));
                    message.set(None);
                },

                option { value: "", "Selecione..." }
                for area in Area::ALL {
                    option { value: area.tag(), {area.display_name()} }
                }
            }

            button { onclick: handle_confirm, "Próximo" }

            if let Some(text) = message() {
                p { class: "error-notice", "{text}" }
            }
        }
    }
}
