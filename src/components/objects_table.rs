//! Objects Table Component
//!
//! Loads all objects on mount and renders them as a table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::browser_client;
use crate::context::use_api_config;
use crate::controller::{ListController, ListSurface};
use crate::models::{ObjectRow, TableBody, LOAD_FAILED_TEXT, NO_OBJECTS_TEXT, TABLE_COLUMNS};

const HEADERS: [&str; TABLE_COLUMNS] = [
    "ID",
    "Name",
    "Description",
    "Attributes",
    "Created At",
    "Updated At",
    "Actions",
];

/// ListSurface backed by the component's signals
#[derive(Clone, Copy)]
struct SignalListSurface {
    set_loading: WriteSignal<bool>,
    set_error: WriteSignal<String>,
    set_body: WriteSignal<TableBody>,
}

impl ListSurface for SignalListSurface {
    fn set_loading(&self, visible: bool) {
        self.set_loading.set(visible);
    }

    fn set_error(&self, message: String) {
        self.set_error.set(message);
    }

    fn set_table(&self, body: TableBody) {
        self.set_body.set(body);
    }
}

#[component]
pub fn ObjectsTable() -> impl IntoView {
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());
    let (body, set_body) = signal(TableBody::default());

    let surface = SignalListSurface { set_loading, set_error, set_body };
    let controller = ListController::new(browser_client(use_api_config()), surface);

    // Load once on mount
    Effect::new(move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.load().await;
        });
    });

    view! {
        <div class="objects-page">
            <h1>"Objects"</h1>
            <Show when=move || loading.get()>
                <div id="loading-message" class="loading">"Loading objects..."</div>
            </Show>
            <div id="error-message" class="error">{move || error.get()}</div>
            <table id="objects-table">
                <thead>
                    <tr>
                        {HEADERS.iter().map(|title| view! { <th>{*title}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>{move || render_body(body.get())}</tbody>
            </table>
        </div>
    }
}

fn render_body(body: TableBody) -> AnyView {
    match body {
        TableBody::Loading => ().into_any(),
        TableBody::Empty => message_row(NO_OBJECTS_TEXT),
        TableBody::Failed => message_row(LOAD_FAILED_TEXT),
        TableBody::Rows(rows) => rows
            .into_iter()
            .map(|row| view! { <ObjectTableRow row=row /> })
            .collect_view()
            .into_any(),
    }
}

/// Single row spanning every column
fn message_row(text: &'static str) -> AnyView {
    view! {
        <tr>
            <td colspan={TABLE_COLUMNS.to_string()}>{text}</td>
        </tr>
    }
    .into_any()
}

#[component]
fn ObjectTableRow(row: ObjectRow) -> impl IntoView {
    view! {
        <tr>
            <td>{row.id}</td>
            <td>{row.name}</td>
            <td>{row.description}</td>
            <td><pre>{row.attributes_json}</pre></td>
            <td>{row.created_at}</td>
            <td>{row.updated_at}</td>
            <td>
                <a class="edit-btn" href={row.edit_href}>"Edit"</a>
            </td>
        </tr>
    }
}
