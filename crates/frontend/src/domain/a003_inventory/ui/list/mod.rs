use contracts::domain::a003_inventory::InventoryRow;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_inventory::api::fetch_inventory;
use crate::shared::components::data_table::{ColumnDef, DataTable, GridRow};
use crate::shared::components::table::format_quantity;
use crate::shared::list_utils::{with_positional_keys, Keyed};
use crate::system::auth::context::{handle_unauthorized, use_auth};

const COLUMNS: [ColumnDef; 2] = [
    ColumnDef::text("ingredient", "Ingrediente"),
    ColumnDef::numeric("quantity", "Quantità"),
];

// The API gives inventory rows no id, so the fetch position is the key.
impl GridRow for Keyed<InventoryRow> {
    fn row_key(&self) -> String {
        self.key.to_string()
    }

    fn cell(&self, field: &str) -> String {
        match field {
            "ingredient" => self.row.ingredient.clone(),
            "quantity" => format_quantity(self.row.quantity),
            _ => String::new(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn InventoryList() -> impl IntoView {
    let auth_state = use_auth();
    let (rows, set_rows) = signal::<Vec<Keyed<InventoryRow>>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load = move || {
        let token = auth_state.with_untracked(|s| s.token());
        set_loading.set(true);
        spawn_local(async move {
            match fetch_inventory(token.as_deref()).await {
                Ok(items) => {
                    set_rows.set(with_positional_keys(items));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("inventory fetch failed: {}", e);
                    if !handle_unauthorized(auth_state, &e) {
                        set_error.set(Some(e.to_string()));
                    }
                }
            }
            set_loading.set(false);
        });
    };

    load();

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Magazzino"</h2>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || loading.get()>
                <div class="text-muted">"Caricamento..."</div>
            </Show>

            <DataTable columns=COLUMNS.to_vec() rows=rows />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_keyed_by_position() {
        let rows = with_positional_keys(vec![
            InventoryRow {
                ingredient: "farina".to_string(),
                quantity: 12.0,
            },
            InventoryRow {
                ingredient: "farina".to_string(),
                quantity: 0.5,
            },
        ]);
        assert_eq!(rows[0].row_key(), "0");
        assert_eq!(rows[1].row_key(), "1");
        assert_eq!(rows[0].cell("quantity"), "12");
        assert_eq!(rows[1].cell("quantity"), "0.50");
        assert_eq!(rows[1].cell("ingredient"), "farina");
        assert_eq!(rows[1].cell("unknown"), "");
    }
}
