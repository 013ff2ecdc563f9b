//! Admin dashboard: live response table plus the per-area bar chart.

use dioxus::prelude::*;

use store::{DocumentStore, ResponseDoc};
use ui::{BarChart, ChartRenderer, ResponseChart};

/// Dashboard for the privileged identity. Terminal for the session.
///
/// Subscribes to the response feed on entry; the subscription future is
/// cancelled when the component unmounts, which drops the feed and
/// releases its listener before any re-entry can register a new one.
#[component]
pub fn Admin() -> Element {
    let mut responses = use_signal(Vec::<ResponseDoc>::new);
    let mut chart = use_signal(|| Option::<BarChart>::None);
    let mut feed_error = use_signal(|| false);

    let _feed = use_resource(move || async move {
        let docs = ui::make_store();
        // One renderer per subscription: every snapshot discards the
        // previous chart instance and rebuilds from the full set.
        let mut renderer = ChartRenderer::new();
        match docs.subscribe_responses().await {
            Ok(mut feed) => {
                while let Some(snapshot) = feed.next().await {
                    chart.set(Some(renderer.update(&snapshot).clone()));
                    responses.set(snapshot);
                }
                feed_error.set(true);
            }
            Err(e) => {
                tracing::error!("response subscription failed: {}", e);
                feed_error.set(true);
            }
        }
    });

    rsx! {
        div {
            class: "container",

            h1 { "Painel ADM" }

            if feed_error() {
                p { class: "error-notice", "Erro: a atualização ao vivo foi interrompida" }
            }

            if let Some(current) = chart() {
                ResponseChart { chart: current }
            }

            table {
                thead {
                    tr {
                        th { "Email" }
                        th { "Área" }
                        th { "Respostas" }
                    }
                }
                tbody {
                    for (i, response) in responses().iter().enumerate() {
                        tr {
                            key: "{i}",
                            td { "{response.email}" }
                            td { {response.area.display_name()} }
                            td {
                                {serde_json::to_string(&response.answers).unwrap_or_default()}
                            }
                        }
                    }
                }
            }
        }
    }
}
