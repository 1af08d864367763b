use contracts::usecases::u501_csv_exchange::{EntityDescriptor, EntityKind, ENTITIES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::{HashMap, HashSet};
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::File;

use super::api::HttpCsvTransport;
use super::panel::{export_entity, import_entity, FileSelections, Outcome};
use crate::shared::export::{download_bytes, CSV_MIME};
use crate::shared::icons::icon;
use crate::shared::notice::{NoticeBanner, NoticeSlot};
use crate::system::auth::context::{sign_out, use_auth, AuthState};

fn http_transport(auth_state: RwSignal<AuthState>) -> HttpCsvTransport {
    HttpCsvTransport {
        token: auth_state.with_untracked(|s| s.token()),
    }
}

/// One card per entity descriptor: file picker, upload and download
#[component]
pub fn CsvExchangePage() -> impl IntoView {
    let auth_state = use_auth();
    let notices = NoticeSlot::new();

    // web_sys::File is not Send, keep the selections local
    let selections = StoredValue::new_local(FileSelections::<File>::default());
    let file_names = RwSignal::new(HashMap::<EntityKind, String>::new());
    let busy = RwSignal::new(HashSet::<EntityKind>::new());

    let on_file_select = move |kind: EntityKind, ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        file_names.update(|names| match &file {
            Some(f) => {
                names.insert(kind, f.name());
            }
            None => {
                names.remove(&kind);
            }
        });
        selections.update_value(|s| s.select(kind, file));
    };

    // a rejected token ends the session instead of showing a notice;
    // the page may be gone by the time a request finishes
    let finish = move |kind: EntityKind, outcome: Outcome| {
        busy.try_update(|b| {
            b.remove(&kind);
        });
        if outcome.session_expired() {
            sign_out(auth_state);
        } else if let Some(notice) = outcome.notice {
            notices.show(notice);
        }
    };

    let run_import = move |entity: &'static EntityDescriptor| {
        let file = selections.with_value(|s| s.get(entity.kind).cloned());
        busy.update(|b| {
            b.insert(entity.kind);
        });
        let transport = http_transport(auth_state);
        spawn_local(async move {
            let outcome = import_entity(&transport, file.as_ref(), entity).await;
            finish(entity.kind, outcome);
        });
    };

    let run_export = move |entity: &'static EntityDescriptor| {
        busy.update(|b| {
            b.insert(entity.kind);
        });
        let transport = http_transport(auth_state);
        spawn_local(async move {
            let outcome = export_entity(&transport, entity, |bytes, filename| {
                download_bytes(bytes, filename, CSV_MIME)
            })
            .await;
            finish(entity.kind, outcome);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Import / Export CSV"</h2>
            </div>

            <NoticeBanner slot=notices />

            <div class="csv-grid">
                {ENTITIES.iter().map(|entity| {
                    let kind = entity.kind;
                    let input_id = format!("csv-file-{}", entity.download_filename);
                    let is_busy = move || busy.with(|b| b.contains(&kind));
                    view! {
                        <div class="csv-card">
                            <h3 class="csv-card__title">{entity.title()}</h3>
                            <div class="csv-card__file">
                                <label class="button button--secondary" for=input_id.clone()>
                                    {icon("upload")}
                                    " Scegli file"
                                </label>
                                <input
                                    id=input_id
                                    type="file"
                                    accept=".csv,text/csv"
                                    class="hidden"
                                    on:change=move |ev| on_file_select(kind, ev)
                                />
                                <span class="csv-card__filename">
                                    {move || file_names.with(|n| n.get(&kind).cloned())
                                        .unwrap_or_else(|| "Nessun file selezionato".to_string())}
                                </span>
                            </div>
                            <Flex gap=FlexGap::Small>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=is_busy
                                    on_click=move |_| run_import(entity)
                                >
                                    {format!("Carica {}", entity.label)}
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    disabled=is_busy
                                    on_click=move |_| run_export(entity)
                                >
                                    {icon("download")}
                                    {format!(" Scarica {}", entity.label)}
                                </Button>
                            </Flex>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
