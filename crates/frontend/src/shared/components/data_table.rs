//! Generic paginated grid driven by column descriptors.
//!
//! ```ignore
//! let columns = vec![
//!     ColumnDef::text("ingredient", "Ingrediente"),
//!     ColumnDef::numeric("quantity", "Quantità"),
//! ];
//! view! { <DataTable columns=columns rows=rows /> }
//! ```

use super::pagination_controls::PaginationControls;
use crate::shared::list_utils::Pagination;
use leptos::prelude::*;
use thaw::*;

/// One column of a [`DataTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub field: &'static str,
    pub header_name: &'static str,
    /// Right-aligned
    pub numeric: bool,
}

impl ColumnDef {
    pub const fn text(field: &'static str, header_name: &'static str) -> Self {
        Self {
            field,
            header_name,
            numeric: false,
        }
    }

    pub const fn numeric(field: &'static str, header_name: &'static str) -> Self {
        Self {
            field,
            header_name,
            numeric: true,
        }
    }

    fn align_class(&self) -> &'static str {
        if self.numeric {
            "text-right"
        } else {
            ""
        }
    }
}

/// Row shape understood by [`DataTable`].
pub trait GridRow {
    /// Must be unique within one fetched row set.
    fn row_key(&self) -> String;

    /// Display text for `field`; unknown fields render empty.
    fn cell(&self, field: &str) -> String;
}

/// Alignment class and text of each cell of `row`, in column order.
fn row_cells<R: GridRow>(row: &R, columns: &[ColumnDef]) -> Vec<(&'static str, String)> {
    columns
        .iter()
        .map(|col| (col.align_class(), row.cell(col.field)))
        .collect()
}

#[component]
pub fn DataTable<R>(
    columns: Vec<ColumnDef>,
    #[prop(into)] rows: Signal<Vec<R>>,
    #[prop(optional, default = 10)] initial_page_size: usize,
    #[prop(optional)] page_size_options: Option<Vec<usize>>,
) -> impl IntoView
where
    R: GridRow + Clone + Send + Sync + 'static,
{
    let pagination = RwSignal::new(Pagination::new(initial_page_size));
    let columns = StoredValue::new(columns);

    // a re-fetch may shrink the row set below the current page
    Effect::new(move |_| {
        let total = rows.with(|r| r.len());
        pagination.update(|p| p.clamp(total));
    });

    let total = Signal::derive(move || rows.with(|r| r.len()));
    let visible = move || {
        let p = pagination.get();
        rows.with(|r| p.slice(r).to_vec())
    };

    let header = move || {
        columns.with_value(|cols| {
            cols.iter()
                .copied()
                .map(|col| {
                    let class = col.align_class();
                    let name = col.header_name;
                    view! { <TableHeaderCell class=class>{name}</TableHeaderCell> }
                })
                .collect_view()
        })
    };

    view! {
        <div style="width: 100%; overflow-x: auto;">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>{header}</TableRow>
                </TableHeader>
                <TableBody>
                    <Show when=move || total.get() == 0>
                        <TableRow>
                            <TableCell>
                                <span class="text-muted">"Nessun dato"</span>
                            </TableCell>
                        </TableRow>
                    </Show>
                    <For
                        each=visible
                        key=|row| row.row_key()
                        children=move |row: R| {
                            let cells = columns
                                .with_value(|cols| row_cells(&row, cols))
                                .into_iter()
                                .map(|(class, text)| {
                                    view! { <TableCell class=class>{text}</TableCell> }
                                })
                                .collect_view();
                            view! { <TableRow>{cells}</TableRow> }
                        }
                    />
                </TableBody>
            </Table>
        </div>

        <PaginationControls
            current_page=Signal::derive(move || pagination.get().page())
            total_pages=Signal::derive(move || pagination.get().total_pages(total.get()))
            total_count=total
            page_size=Signal::derive(move || pagination.get().page_size())
            on_page_change=Callback::new(move |page| {
                let total = total.get_untracked();
                pagination.update(|p| p.set_page(page, total));
            })
            on_page_size_change=Callback::new(move |size| {
                let total = total.get_untracked();
                pagination.update(|p| p.set_page_size(size, total));
            })
            page_size_options=page_size_options.unwrap_or_else(|| vec![5, 10, 25, 50])
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dish {
        name: &'static str,
        portions: u32,
    }

    impl GridRow for Dish {
        fn row_key(&self) -> String {
            self.name.to_string()
        }

        fn cell(&self, field: &str) -> String {
            match field {
                "name" => self.name.to_string(),
                "portions" => self.portions.to_string(),
                _ => String::new(),
            }
        }
    }

    #[test]
    fn test_row_cells_follow_column_order() {
        let columns = [
            ColumnDef::numeric("portions", "Porzioni"),
            ColumnDef::text("name", "Piatto"),
            ColumnDef::text("notes", "Note"),
        ];
        let dish = Dish {
            name: "Carbonara",
            portions: 12,
        };
        assert_eq!(
            row_cells(&dish, &columns),
            vec![
                ("text-right", "12".to_string()),
                ("", "Carbonara".to_string()),
                ("", String::new()),
            ]
        );
    }
}
