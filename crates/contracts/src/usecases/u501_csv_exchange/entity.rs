use serde::{Deserialize, Serialize};

/// Resource types that can be bulk-imported and exported as CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Orders,
    Ingredients,
    Products,
    Recipes,
    Inventory,
    Riders,
}

/// Everything the import/export page needs to know about one resource.
///
/// Supporting a new resource means adding a row to [`ENTITIES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityDescriptor {
    pub kind: EntityKind,
    /// Plural label used in messages ("ordini", "ricette", ...).
    pub label: &'static str,
    pub import_path: &'static str,
    pub export_path: &'static str,
    pub download_filename: &'static str,
}

pub const ENTITIES: &[EntityDescriptor] = &[
    EntityDescriptor {
        kind: EntityKind::Orders,
        label: "ordini",
        import_path: "/orders/import-csv/",
        export_path: "/orders/export-csv/",
        download_filename: "orders_export.csv",
    },
    EntityDescriptor {
        kind: EntityKind::Ingredients,
        label: "ingredienti",
        import_path: "/ingredients/import-costs-csv/",
        export_path: "/ingredients/export-costs-csv/",
        download_filename: "ingredient_costs_export.csv",
    },
    EntityDescriptor {
        kind: EntityKind::Products,
        label: "prodotti",
        import_path: "/products/import-csv/",
        export_path: "/products/export-csv/",
        download_filename: "products_export.csv",
    },
    EntityDescriptor {
        kind: EntityKind::Recipes,
        label: "ricette",
        import_path: "/recipes/import-csv/",
        export_path: "/recipes/export-csv/",
        download_filename: "recipes_export.csv",
    },
    EntityDescriptor {
        kind: EntityKind::Inventory,
        label: "movimenti magazzino",
        import_path: "/inventory/import-csv/",
        export_path: "/inventory/export-csv/",
        download_filename: "inventory_export.csv",
    },
    EntityDescriptor {
        kind: EntityKind::Riders,
        label: "riders",
        import_path: "/riders/import-csv/",
        export_path: "/riders/export-csv/",
        download_filename: "riders_export.csv",
    },
];

impl EntityKind {
    pub fn descriptor(self) -> &'static EntityDescriptor {
        let index = match self {
            EntityKind::Orders => 0,
            EntityKind::Ingredients => 1,
            EntityKind::Products => 2,
            EntityKind::Recipes => 3,
            EntityKind::Inventory => 4,
            EntityKind::Riders => 5,
        };
        &ENTITIES[index]
    }
}

impl EntityDescriptor {
    /// Card title, e.g. "Import Ordini (CSV)".
    pub fn title(&self) -> String {
        let mut chars = self.label.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };
        format!("Import {} (CSV)", capitalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_kind_has_exactly_one_descriptor() {
        let kinds = [
            EntityKind::Orders,
            EntityKind::Ingredients,
            EntityKind::Products,
            EntityKind::Recipes,
            EntityKind::Inventory,
            EntityKind::Riders,
        ];
        assert_eq!(ENTITIES.len(), kinds.len());
        for kind in kinds {
            assert_eq!(ENTITIES.iter().filter(|d| d.kind == kind).count(), 1);
            assert_eq!(kind.descriptor().kind, kind);
        }
    }

    #[test]
    fn test_paths_and_filenames_are_distinct() {
        let imports: HashSet<_> = ENTITIES.iter().map(|d| d.import_path).collect();
        let exports: HashSet<_> = ENTITIES.iter().map(|d| d.export_path).collect();
        let files: HashSet<_> = ENTITIES.iter().map(|d| d.download_filename).collect();
        assert_eq!(imports.len(), ENTITIES.len());
        assert_eq!(exports.len(), ENTITIES.len());
        assert_eq!(files.len(), ENTITIES.len());
        assert!(ENTITIES
            .iter()
            .all(|d| d.import_path.starts_with('/') && d.export_path.ends_with("csv/")));
    }

    #[test]
    fn test_ingredients_use_cost_endpoints() {
        let d = EntityKind::Ingredients.descriptor();
        assert_eq!(d.import_path, "/ingredients/import-costs-csv/");
        assert_eq!(d.export_path, "/ingredients/export-costs-csv/");
    }

    #[test]
    fn test_title() {
        assert_eq!(EntityKind::Orders.descriptor().title(), "Import Ordini (CSV)");
        assert_eq!(
            EntityKind::Inventory.descriptor().title(),
            "Import Movimenti magazzino (CSV)"
        );
    }
}
