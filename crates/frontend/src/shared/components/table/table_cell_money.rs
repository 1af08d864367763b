//! Table cell for money values
//!
//! ```ignore
//! <TableCellMoney value=Signal::derive(move || row.margin) color_by_sign=true />
//! ```

use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Colour class for a signed amount; zero counts as non-negative.
pub fn sign_class(value: f64) -> &'static str {
    if value >= 0.0 {
        "money money--positive"
    } else {
        "money money--negative"
    }
}

/// Right-aligned money cell with two decimals, optionally coloured by sign
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<f64>,

    /// Non-negative green, negative red
    #[prop(optional, default = false)]
    color_by_sign: bool,
) -> impl IntoView {
    let class = move || {
        if color_by_sign {
            sign_class(value.get())
        } else {
            "money"
        }
    };

    view! {
        <TableCell class="text-right">
            <span class=class>{move || format_money(value.get())}</span>
        </TableCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_uses_non_negative_colour() {
        assert_eq!(sign_class(0.0), "money money--positive");
        assert_eq!(sign_class(-0.0), "money money--positive");
        assert_eq!(sign_class(1.5), "money money--positive");
        assert_eq!(sign_class(-0.01), "money money--negative");
    }
}
