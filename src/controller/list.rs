//! List Controller
//!
//! Loads the object collection once and fills the table.

use object_api::{ApiClient, ApiError, HttpClient};

use crate::models::{ObjectRow, TableBody};

/// Page elements the list controller writes to
pub trait ListSurface {
    fn set_loading(&self, visible: bool);
    fn set_error(&self, message: String);
    fn set_table(&self, body: TableBody);
}

/// Hides the loading indicator on every exit path
struct LoadingGuard<'a, S: ListSurface>(&'a S);

impl<'a, S: ListSurface> LoadingGuard<'a, S> {
    fn show(surface: &'a S) -> Self {
        surface.set_loading(true);
        Self(surface)
    }
}

impl<S: ListSurface> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.0.set_loading(false);
    }
}

#[derive(Clone)]
pub struct ListController<C, S> {
    api: ApiClient<C>,
    surface: S,
}

impl<C: HttpClient, S: ListSurface> ListController<C, S> {
    pub fn new(api: ApiClient<C>, surface: S) -> Self {
        Self { api, surface }
    }

    /// Fetch the collection and render it. Failures never escape.
    pub async fn load(&self) {
        let _loading = LoadingGuard::show(&self.surface);
        self.surface.set_error(String::new());

        let config = self.api.config();
        match self.api.list_objects(config.list_query).await {
            Ok(objects) => {
                log::info!("[ObjectsTable] Loaded {} objects", objects.len());
                let rows = objects
                    .iter()
                    .map(|object| ObjectRow::from_object(object, config))
                    .collect();
                self.surface.set_table(TableBody::from_rows(rows));
            }
            Err(e) => {
                log::error!("[ObjectsTable] Failed to load objects: {}", e);
                self.surface.set_error(load_error_text(&e));
                self.surface.set_table(TableBody::Failed);
            }
        }
    }
}

fn load_error_text(error: &ApiError) -> String {
    if error.is_rejection() {
        format!("Failed to load objects: Error fetching objects: {}", error)
    } else {
        format!("Failed to load objects: {}", error)
    }
}
