//! Create Object Form Component
//!
//! Name, description and attributes (JSON text) posted as a new object.
//! The form keeps its values after a successful submission.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::browser_client;
use crate::context::use_api_config;
use crate::controller::{CreateController, FormInput, StatusSurface, SubmissionPhase};
use crate::models::StatusMessage;

/// StatusSurface backed by the component's signals
#[derive(Clone, Copy)]
struct SignalStatusSurface {
    set_status: WriteSignal<Option<StatusMessage>>,
    set_phase: WriteSignal<SubmissionPhase>,
}

impl StatusSurface for SignalStatusSurface {
    fn clear(&self) {
        self.set_status.set(None);
    }

    fn show(&self, message: StatusMessage) {
        self.set_status.set(Some(message));
    }

    fn set_phase(&self, phase: SubmissionPhase) {
        self.set_phase.set(phase);
    }
}

#[component]
pub fn CreateObjectForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (attributes, set_attributes) = signal(String::new());
    let (status, set_status) = signal::<Option<StatusMessage>>(None);
    let (phase, set_phase) = signal(SubmissionPhase::Idle);

    let surface = SignalStatusSurface { set_status, set_phase };
    let controller = CreateController::new(browser_client(use_api_config()), surface);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = FormInput {
            name: name.get_untracked(),
            description: description.get_untracked(),
            attributes: attributes.get_untracked(),
        };
        let controller = controller.clone();
        spawn_local(async move {
            controller.submit(input).await;
        });
    };

    view! {
        <div class="create-page">
            <h1>"Create Object"</h1>
            <form id="create-object-form" on:submit=on_submit>
                <label for="name">"Name"</label>
                <input
                    id="name"
                    type="text"
                    required=true
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />

                <label for="description">"Description"</label>
                <input
                    id="description"
                    type="text"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />

                <label for="attributes">"Attributes (JSON)"</label>
                <textarea
                    id="attributes"
                    rows="6"
                    placeholder=r#"{"key": "value"}"#
                    prop:value=move || attributes.get()
                    on:input=move |ev| set_attributes.set(event_target_value(&ev))
                ></textarea>

                <button type="submit">"Create"</button>
                <Show when=move || phase.get() == SubmissionPhase::Sending>
                    <span class="saving">"Saving..."</span>
                </Show>
            </form>

            <div
                id="response-message"
                class=move || status.get().map(|m| m.kind.css_class()).unwrap_or_default()
            >
                {move || status.get().map(|m| m.text)}
            </div>
        </div>
    }
}
