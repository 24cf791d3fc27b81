//! Object Admin App
//!
//! Picks the page from the URL path and provides shared config.

use leptos::prelude::*;
use object_api::{ApiConfig, ListQuery};

use crate::components::{CreateObjectForm, ObjectsTable};
use crate::context::AppContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    List,
    Create,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/object/create" | "/objects/new" => Page::Create,
            _ => Page::List,
        }
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_default()
}

fn current_search() -> String {
    web_sys::window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

/// API config for this page load; the list honours `?skip=&limit=`
fn page_config(search: &str) -> ApiConfig {
    ApiConfig::default().with_list_query(ListQuery::from_query_string(search))
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new(page_config(&current_search())));

    let page = Page::from_path(&current_path());
    log::debug!("[APP] Rendering {:?} page", page);

    match page {
        Page::List => view! { <ObjectsTable /> }.into_any(),
        Page::Create => view! { <CreateObjectForm /> }.into_any(),
    }
}
