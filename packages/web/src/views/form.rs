//! Questionnaire screen for the user's area.

use dioxus::prelude::*;

use store::forms::{blank_fields, collect_answers, FieldValue};
use store::{questions_for, Area, DocumentStore, NewResponse, QuestionKind};
use ui::use_auth;

/// Renders the area's questionnaire and submits responses.
///
/// Field state is one [`FieldValue`] per question, indexed by position;
/// submit hands the ordered list straight to [`collect_answers`]. The
/// screen stays on the form after a submission — resubmitting is
/// allowed and appends another response.
#[component]
pub fn FormScreen(area: Area) -> Element {
    let auth = use_auth();
    let questions = questions_for(area);
    let mut fields = use_signal(|| blank_fields(questions));
    let mut notice = use_signal(|| Option::<String>::None);

    let handle_submit = move |_| {
        let Some(user) = auth().user else {
            return;
        };
        let answers = collect_answers(questions, &fields());
        spawn(async move {
            let docs = ui::make_store();
            let response = NewResponse {
                user_id: user.id.clone(),
                email: user.email.clone(),
                area,
                answers,
            };
            match docs.append_response(response).await {
                Ok(()) => notice.set(Some("Resposta enviada!".to_string())),
                Err(e) => notice.set(Some(format!("Erro: {e}"))),
            }
        });
    };

    rsx! {
        div {
            class: "container",

            h1 { "Formulário - {area.display_name()}" }

            for (i, question) in questions.iter().enumerate() {
                div {
                    class: "question",
                    key: "{i}",

                    label { "{question.label}" }

                    match question.kind {
                        QuestionKind::Text => rsx! {
                            input {
                                r#type: "text",
                                oninput: move |evt| {
                                    fields.write()[i] = FieldValue::Text(evt.value());
                                    notice.set(None);
                                },
                            }
                        },
                        QuestionKind::LongText => rsx! {
                            textarea {
                                rows: "3",
                                oninput: move |evt| {
                                    fields.write()[i] = FieldValue::Text(evt.value());
                                    notice.set(None);
                                },
                            }
                        },
                        QuestionKind::SingleChoice => rsx! {
                            for option in question.options {
                                label {
                                    class: "choice",
                                    input {
                                        r#type: "radio",
                                        name: "q{i}",
                                        value: "{option}",
                                        checked: fields()[i] == FieldValue::Choice(Some(option.to_string())),
                                        onchange: move |_| {
                                            fields.write()[i] = FieldValue::Choice(Some(option.to_string()));
                                            notice.set(None);
                                        },
                                    }
                                    " {option}"
                                }
                            }
                        },
                        QuestionKind::MultipleChoice => rsx! {
                            for option in question.options {
                                label {
                                    class: "choice",
                                    input {
                                        r#type: "checkbox",
                                        name: "q{i}",
                                        value: "{option}",
                                        checked: matches!(&fields()[i], FieldValue::Multi(chosen) if chosen.iter().any(|c| c == option)),
                                        onchange: move |evt| {
                                            fields.write()[i].set_option(option, evt.checked());
                                            notice.set(None);
                                        },
                                    }
                                    " {option}"
                                }
                            }
                        },
                    }
                }
            }

            button { onclick: handle_submit, "Enviar Resposta" }

            if let Some(text) = notice() {
                p { class: "submit-notice", "{text}" }
            }
        }
    }
}
