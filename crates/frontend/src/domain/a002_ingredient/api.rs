use contracts::domain::a002_ingredient::{Ingredient, IngredientQuery};

use crate::shared::api_utils::{get, send_json, with_query, ApiError, Body};

pub async fn fetch_ingredients(
    query: &IngredientQuery,
    token: Option<&str>,
) -> Result<Vec<Ingredient>, ApiError> {
    let path = with_query("/ingredients/", query)?;
    send_json(get(&path, token), Body::Empty).await
}
