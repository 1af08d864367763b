use contracts::domain::a004_rider::{Rider, RiderPerformance};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_rider::api::{fetch_performance, fetch_riders};
use crate::shared::components::data_table::{ColumnDef, DataTable, GridRow};
use crate::shared::components::table::{format_optional_money, format_money};
use crate::shared::list_utils::{with_positional_keys, Keyed};
use crate::system::auth::context::{handle_unauthorized, use_auth};

const RIDER_COLUMNS: [ColumnDef; 3] = [
    ColumnDef::text("name", "Rider"),
    ColumnDef::numeric("deliveries", "Consegne"),
    ColumnDef::numeric("delivery_time", "Tempo consegna (min)"),
];

const PERFORMANCE_COLUMNS: [ColumnDef; 3] = [
    ColumnDef::text("name", "Rider"),
    ColumnDef::numeric("deliveries", "Consegne"),
    ColumnDef::numeric("avg_time", "Tempo medio (min)"),
];

impl GridRow for Keyed<Rider> {
    fn row_key(&self) -> String {
        self.key.to_string()
    }

    fn cell(&self, field: &str) -> String {
        match field {
            "name" => self.row.name.clone(),
            "deliveries" => self.row.deliveries.to_string(),
            "delivery_time" => format_optional_money(self.row.delivery_time),
            _ => String::new(),
        }
    }
}

impl GridRow for Keyed<RiderPerformance> {
    fn row_key(&self) -> String {
        // rider_id is optional in the payload
        match self.row.rider_id {
            Some(id) => format!("rider-{}", id),
            None => format!("pos-{}", self.key),
        }
    }

    fn cell(&self, field: &str) -> String {
        match field {
            "name" => self.row.name.clone(),
            "deliveries" => self.row.deliveries.to_string(),
            "avg_time" => format_money(self.row.avg_time),
            _ => String::new(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn RiderList() -> impl IntoView {
    let auth_state = use_auth();
    let (riders, set_riders) = signal::<Vec<Keyed<Rider>>>(Vec::new());
    let (performance, set_performance) = signal::<Vec<Keyed<RiderPerformance>>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        let token = auth_state.with_untracked(|s| s.token());
        spawn_local(async move {
            match fetch_riders(token.as_deref()).await {
                Ok(items) => set_riders.set(with_positional_keys(items)),
                Err(e) => {
                    log::error!("riders fetch failed: {}", e);
                    if handle_unauthorized(auth_state, &e) {
                        return;
                    }
                    set_error.set(Some(e.to_string()));
                }
            }
            match fetch_performance(token.as_deref()).await {
                Ok(items) => set_performance.set(with_positional_keys(items)),
                Err(e) => {
                    log::error!("rider performance fetch failed: {}", e);
                    if !handle_unauthorized(auth_state, &e) {
                        set_error.set(Some(e.to_string()));
                    }
                }
            }
        });
    };

    load();

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Rider"</h2>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <DataTable columns=RIDER_COLUMNS.to_vec() rows=riders />

            <h3>"Performance"</h3>
            <DataTable columns=PERFORMANCE_COLUMNS.to_vec() rows=performance />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_key_prefers_rider_id() {
        let rows = with_positional_keys(vec![
            RiderPerformance {
                rider_id: Some(4),
                name: "Luca".to_string(),
                avg_time: 21.25,
                deliveries: 30,
            },
            RiderPerformance {
                rider_id: None,
                name: "Sara".to_string(),
                avg_time: 18.0,
                deliveries: 12,
            },
        ]);
        assert_eq!(rows[0].row_key(), "rider-4");
        assert_eq!(rows[1].row_key(), "pos-1");
        assert_eq!(rows[0].cell("avg_time"), "21.25");
        assert_eq!(rows[1].cell("deliveries"), "12");
    }

    #[test]
    fn test_every_rider_column_has_a_cell() {
        let row = Keyed {
            key: 0,
            row: Rider {
                name: "Luca".to_string(),
                deliveries: 30,
                delivery_time: Some(21.5),
            },
        };
        for col in RIDER_COLUMNS {
            assert!(!row.cell(col.field).is_empty(), "empty cell for {}", col.field);
        }
        assert_eq!(row.cell("delivery_time"), "21.50");

        let missing = Keyed {
            key: 1,
            row: Rider {
                name: "Sara".to_string(),
                deliveries: 0,
                delivery_time: None,
            },
        };
        assert_eq!(missing.cell("delivery_time"), "—");
    }
}
