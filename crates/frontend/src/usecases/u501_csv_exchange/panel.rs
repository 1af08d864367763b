//! Import/export operations shared by every entity card.
//!
//! The page renders one card per entry of `ENTITIES`; the functions here
//! decide what each button does and which notice the user gets.

use contracts::usecases::u501_csv_exchange::{EntityDescriptor, EntityKind, ImportSummary};
use std::collections::HashMap;

use crate::shared::api_utils::ApiError;
use crate::shared::notice::Notice;

/// Moves CSV files between the browser and the API.
#[allow(async_fn_in_trait)]
pub trait CsvTransport {
    type File;

    async fn upload(&self, entity: &EntityDescriptor, file: &Self::File) -> Result<ImportSummary, ApiError>;
    async fn download(&self, entity: &EntityDescriptor) -> Result<Vec<u8>, ApiError>;
}

/// Currently chosen file per entity.
#[derive(Debug, Clone)]
pub struct FileSelections<F> {
    files: HashMap<EntityKind, F>,
}

impl<F> Default for FileSelections<F> {
    fn default() -> Self {
        Self {
            files: HashMap::new(),
        }
    }
}

impl<F> FileSelections<F> {
    /// Replaces the selection for `kind`; `None` clears it.
    pub fn select(&mut self, kind: EntityKind, file: Option<F>) {
        match file {
            Some(file) => {
                self.files.insert(kind, file);
            }
            None => {
                self.files.remove(&kind);
            }
        }
    }

    pub fn get(&self, kind: EntityKind) -> Option<&F> {
        self.files.get(&kind)
    }
}

pub fn missing_file_message(entity: &EntityDescriptor) -> String {
    format!("Seleziona un file {}", entity.label)
}

/// What the user is told after an action, plus the request error if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub notice: Option<Notice>,
    pub error: Option<ApiError>,
}

impl Outcome {
    fn quiet() -> Self {
        Self {
            notice: None,
            error: None,
        }
    }

    fn notify(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            error: None,
        }
    }

    fn failed(notice: Notice, error: ApiError) -> Self {
        Self {
            notice: Some(notice),
            error: Some(error),
        }
    }

    /// The API no longer accepts the session token.
    pub fn session_expired(&self) -> bool {
        matches!(self.error, Some(ApiError::Unauthorized))
    }
}

/// Uploads the selected file. Without a selection no request is made.
pub async fn import_entity<T: CsvTransport>(
    transport: &T,
    file: Option<&T::File>,
    entity: &EntityDescriptor,
) -> Outcome {
    let Some(file) = file else {
        return Outcome::notify(Notice::error(missing_file_message(entity)));
    };
    match transport.upload(entity, file).await {
        Ok(summary) => {
            log::info!("imported {} {}", summary.imported, entity.label);
            Outcome::notify(Notice::success(format!(
                "Importati {} {}",
                summary.imported, entity.label
            )))
        }
        Err(e) => {
            log::error!("import {} failed: {}", entity.label, e);
            Outcome::failed(Notice::error(format!("Errore import {}", entity.label)), e)
        }
    }
}

/// Fetches the export and passes it to `save` under the entity's file name.
/// Only failures produce a notice.
pub async fn export_entity<T, S>(transport: &T, entity: &EntityDescriptor, save: S) -> Outcome
where
    T: CsvTransport,
    S: FnOnce(&[u8], &str) -> Result<(), ApiError>,
{
    let saved = match transport.download(entity).await {
        Ok(bytes) => save(&bytes, entity.download_filename),
        Err(e) => Err(e),
    };
    match saved {
        Ok(()) => {
            log::info!("exported {} to {}", entity.label, entity.download_filename);
            Outcome::quiet()
        }
        Err(e) => {
            log::error!("export {} failed: {}", entity.label, e);
            Outcome::failed(Notice::error(format!("Errore download {}", entity.label)), e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u501_csv_exchange::ENTITIES;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct FakeTransport {
        upload_result: Result<ImportSummary, ApiError>,
        download_result: Result<Vec<u8>, ApiError>,
        uploads: RefCell<Vec<(EntityKind, String)>>,
        downloads: Cell<usize>,
    }

    impl FakeTransport {
        fn new(upload_result: Result<ImportSummary, ApiError>) -> Self {
            Self {
                upload_result,
                download_result: Ok(b"id,name\n1,pizza\n".to_vec()),
                uploads: RefCell::new(Vec::new()),
                downloads: Cell::new(0),
            }
        }
    }

    impl CsvTransport for FakeTransport {
        type File = String;

        async fn upload(&self, entity: &EntityDescriptor, file: &String) -> Result<ImportSummary, ApiError> {
            self.uploads.borrow_mut().push((entity.kind, file.clone()));
            self.upload_result.clone()
        }

        async fn download(&self, _entity: &EntityDescriptor) -> Result<Vec<u8>, ApiError> {
            self.downloads.set(self.downloads.get() + 1);
            self.download_result.clone()
        }
    }

    #[test]
    fn test_import_without_file_makes_no_request() {
        let transport = FakeTransport::new(Ok(ImportSummary { imported: 1 }));
        let selections = FileSelections::<String>::default();
        for entity in ENTITIES {
            let outcome = block_on(import_entity(&transport, selections.get(entity.kind), entity));
            assert_eq!(outcome.notice, Some(Notice::error(missing_file_message(entity))));
            assert_eq!(outcome.error, None);
        }
        assert!(transport.uploads.borrow().is_empty());
    }

    #[test]
    fn test_import_with_file_makes_exactly_one_request() {
        let transport = FakeTransport::new(Ok(ImportSummary { imported: 42 }));
        let mut selections = FileSelections::default();
        selections.select(EntityKind::Orders, Some("orders.csv".to_string()));

        let orders = EntityKind::Orders.descriptor();
        let outcome = block_on(import_entity(&transport, selections.get(orders.kind), orders));
        let notice = outcome.notice.unwrap();

        assert!(!notice.is_error());
        assert!(notice.message.contains("42"));
        assert_eq!(notice.message, "Importati 42 ordini");
        assert_eq!(
            *transport.uploads.borrow(),
            vec![(EntityKind::Orders, "orders.csv".to_string())]
        );
    }

    #[test]
    fn test_failed_import_keeps_selection() {
        let transport = FakeTransport::new(Err(ApiError::Transport("offline".to_string())));
        let mut selections = FileSelections::default();
        selections.select(EntityKind::Recipes, Some("ricette.csv".to_string()));

        let recipes = EntityKind::Recipes.descriptor();
        let outcome = block_on(import_entity(&transport, selections.get(recipes.kind), recipes));

        assert_eq!(outcome.notice, Some(Notice::error("Errore import ricette")));
        assert!(!outcome.session_expired());
        assert_eq!(selections.get(EntityKind::Recipes).map(String::as_str), Some("ricette.csv"));
    }

    #[test]
    fn test_selections_are_independent_per_entity() {
        let mut selections = FileSelections::default();
        selections.select(EntityKind::Orders, Some("a.csv"));
        selections.select(EntityKind::Riders, Some("b.csv"));
        selections.select(EntityKind::Orders, Some("c.csv"));
        assert_eq!(selections.get(EntityKind::Orders), Some(&"c.csv"));
        assert_eq!(selections.get(EntityKind::Riders), Some(&"b.csv"));
        selections.select(EntityKind::Riders, None);
        assert_eq!(selections.get(EntityKind::Riders), None);
        assert_eq!(selections.get(EntityKind::Inventory), None);
    }

    #[test]
    fn test_export_saves_under_configured_filename() {
        let transport = FakeTransport::new(Ok(ImportSummary::default()));
        let saved = RefCell::new(None);
        let inventory = EntityKind::Inventory.descriptor();

        let outcome = block_on(export_entity(&transport, inventory, |bytes, name| {
            *saved.borrow_mut() = Some((bytes.len(), name.to_string()));
            Ok(())
        }));

        assert_eq!(outcome.notice, None);
        assert_eq!(transport.downloads.get(), 1);
        assert_eq!(
            *saved.borrow(),
            Some((16, "inventory_export.csv".to_string()))
        );
    }

    #[test]
    fn test_export_failure_reports_and_skips_save() {
        let mut transport = FakeTransport::new(Ok(ImportSummary::default()));
        transport.download_result = Err(ApiError::Timeout(15_000));
        let riders = EntityKind::Riders.descriptor();

        let outcome = block_on(export_entity(&transport, riders, |_, _| {
            panic!("nothing to save");
        }));

        assert_eq!(outcome.notice, Some(Notice::error("Errore download riders")));
        assert_eq!(outcome.error, Some(ApiError::Timeout(15_000)));
    }

    #[test]
    fn test_export_save_failure_is_reported() {
        let transport = FakeTransport::new(Ok(ImportSummary::default()));
        let products = EntityKind::Products.descriptor();
        let outcome = block_on(export_entity(&transport, products, |_, _| {
            Err(ApiError::Browser("no document".to_string()))
        }));
        assert_eq!(outcome.notice, Some(Notice::error("Errore download prodotti")));
    }

    #[test]
    fn test_rejected_token_is_flagged() {
        let transport = FakeTransport::new(Err(ApiError::Unauthorized));
        let mut selections = FileSelections::default();
        selections.select(EntityKind::Ingredients, Some("costi.csv".to_string()));
        let ingredients = EntityKind::Ingredients.descriptor();
        let outcome = block_on(import_entity(&transport, selections.get(ingredients.kind), ingredients));
        assert!(outcome.session_expired());
    }
}
