use contracts::domain::a001_order::{Order, OrderQuery};
use contracts::domain::a002_ingredient::{Ingredient, IngredientQuery};
use contracts::projections::p900_food_cost::FoodCost;
use contracts::projections::p901_product_margin::ProductMargin;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_foodcost_overview::api;
use crate::dashboards::d400_foodcost_overview::metrics::{
    average_food_cost, bar_percent, hourly_sales, total_orders,
};
use crate::domain::a001_order::api::fetch_orders;
use crate::domain::a002_ingredient::api::fetch_ingredients;
use crate::shared::api_utils::ApiError;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_optional_money, TableCellMoney};
use crate::system::auth::context::{handle_unauthorized, use_auth, AuthState};

/// Records a failed fetch; a 401 ends the session instead.
fn report(auth_state: RwSignal<AuthState>, set_error: WriteSignal<Option<String>>, what: &str, err: ApiError) {
    log::error!("{} fetch failed: {}", what, err);
    if !handle_unauthorized(auth_state, &err) {
        set_error.set(Some(format!("Errore caricamento {}: {}", what, err)));
    }
}

/// Food-cost overview: KPI cards, hourly sales and the three cost tables
#[component]
pub fn FoodCostDashboard() -> impl IntoView {
    let auth_state = use_auth();

    // Each fetch owns its slot; None means not loaded yet
    let (orders, set_orders) = signal(None::<Vec<Order>>);
    let (ingredients, set_ingredients) = signal(Vec::<Ingredient>::new());
    let (food_costs, set_food_costs) = signal(None::<Vec<FoodCost>>);
    let (margins, set_margins) = signal(Vec::<ProductMargin>::new());
    let (error, set_error) = signal(None::<String>);

    let token = auth_state.with_untracked(|s| s.token());

    {
        let token = token.clone();
        spawn_local(async move {
            match fetch_orders(&OrderQuery::default(), token.as_deref()).await {
                Ok(v) => set_orders.set(Some(v)),
                Err(e) => report(auth_state, set_error, "ordini", e),
            }
        });
    }
    {
        let token = token.clone();
        spawn_local(async move {
            match fetch_ingredients(&IngredientQuery::default(), token.as_deref()).await {
                Ok(v) => set_ingredients.set(v),
                Err(e) => report(auth_state, set_error, "ingredienti", e),
            }
        });
    }
    {
        let token = token.clone();
        spawn_local(async move {
            match api::fetch_food_costs(token.as_deref()).await {
                Ok(v) => set_food_costs.set(Some(v)),
                Err(e) => report(auth_state, set_error, "food cost", e),
            }
        });
    }
    spawn_local(async move {
        match api::fetch_product_margins(token.as_deref()).await {
            Ok(v) => set_margins.set(v),
            Err(e) => report(auth_state, set_error, "margini", e),
        }
    });

    let total_value = Signal::derive(move || {
        orders.with(|o| o.as_ref().map(|o| total_orders(o).to_string()))
    });
    let avg_value = Signal::derive(move || {
        food_costs.with(|c| c.as_ref().map(|c| format_optional_money(average_food_cost(c))))
    });
    let buckets = Memo::new(move |_| orders.with(|o| o.as_deref().map(hourly_sales).unwrap_or_default()));

    view! {
        <div class="page dashboard">
            <div class="page__header">
                <h2>"Dashboard"</h2>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="stat-grid">
                <StatCard
                    label="Ordini Totali"
                    icon_name="orders"
                    value=total_value
                    subtitle="Numero di ordini processati"
                />
                <StatCard
                    label="Food Cost Medio"
                    icon_name="food-cost"
                    value=avg_value
                    subtitle="Media sui prodotti"
                />
            </div>

            <section class="dashboard__panel">
                <h3>"Vendite per Fascia Oraria"</h3>
                {move || {
                    let data = buckets.get();
                    if data.is_empty() {
                        return view! { <div class="text-muted">"Nessun dato"</div> }.into_any();
                    }
                    let max = data.iter().map(|b| b.qty).max().unwrap_or(0);
                    view! {
                        <div class="bar-chart">
                            {data.into_iter().map(|bucket| {
                                let height = format!("height: {:.1}%;", bar_percent(bucket.qty, max));
                                view! {
                                    <div class="bar-chart__column" title=format!("{}: {}", bucket.label(), bucket.qty)>
                                        <span class="bar-chart__value">{bucket.qty}</span>
                                        <div class="bar-chart__bar" style=height></div>
                                        <span class="bar-chart__label">{bucket.label()}</span>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </section>

            <section class="dashboard__panel">
                <h3>"Costi Ingredienti"</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Ingrediente"</TableHeaderCell>
                            <TableHeaderCell class="text-right">"Costo unitario"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || ingredients.get()
                            key=|ing| ing.id
                            children=move |ing: Ingredient| view! {
                                <TableRow>
                                    <TableCell>{ing.name}</TableCell>
                                    <TableCellMoney value=ing.unit_cost />
                                </TableRow>
                            }
                        />
                    </TableBody>
                </Table>
            </section>

            <section class="dashboard__panel">
                <h3>"Food Cost per Prodotto"</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Prodotto"</TableHeaderCell>
                            <TableHeaderCell class="text-right">"Food Cost"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || food_costs.get().unwrap_or_default()
                            key=|fc| fc.product_id
                            children=move |fc: FoodCost| view! {
                                <TableRow>
                                    <TableCell>{fc.product_id}</TableCell>
                                    <TableCellMoney value=fc.food_cost />
                                </TableRow>
                            }
                        />
                    </TableBody>
                </Table>
            </section>

            <section class="dashboard__panel">
                <h3>"Margine Lordo per Prodotto"</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Prodotto"</TableHeaderCell>
                            <TableHeaderCell class="text-right">"Prezzo medio"</TableHeaderCell>
                            <TableHeaderCell class="text-right">"Food Cost"</TableHeaderCell>
                            <TableHeaderCell class="text-right">"Margine"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || margins.get()
                            key=|m| m.product_id
                            children=move |m: ProductMargin| view! {
                                <TableRow>
                                    <TableCell>{m.product_id}</TableCell>
                                    <TableCellMoney value=m.avg_price />
                                    <TableCellMoney value=m.food_cost />
                                    <TableCellMoney value=m.margin color_by_sign=true />
                                </TableRow>
                            }
                        />
                    </TableBody>
                </Table>
            </section>
        </div>
    }
}
