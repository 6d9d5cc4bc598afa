use super::model;
use contracts::domain::a001_user_entry::{
    Field, FormEvent, FormMessage, FormState, MessageKind, SkillCatalog, UserEntryDto,
};
use leptos::prelude::*;

/// ViewModel for the user entry form
#[derive(Clone, Copy)]
pub struct UserEntryViewModel {
    pub form: RwSignal<FormState>,
    api_base: StoredValue<String>,
}

impl UserEntryViewModel {
    pub fn new(api_base: String, catalog: SkillCatalog) -> Self {
        Self {
            form: RwSignal::new(FormState::new(catalog)),
            api_base: StoredValue::new(api_base),
        }
    }

    pub fn catalog(&self) -> SkillCatalog {
        self.form.with_untracked(|f| f.catalog)
    }

    pub fn is_submitting(&self) -> bool {
        self.form.with(|f| f.is_submitting())
    }

    pub fn message(&self) -> Option<FormMessage> {
        self.form.with(|f| f.message.clone())
    }

    pub fn value(&self, field: Field) -> String {
        self.form.with(|f| f.field(field).to_string())
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.form.with(|f| f.has_skill(skill))
    }

    pub fn set_field(&self, field: Field, value: String) {
        self.dispatch(FormEvent::FieldChanged(field, value));
    }

    pub fn toggle_skill(&self, skill: &str) {
        self.dispatch(FormEvent::SkillToggled(skill.to_string()));
    }

    /// Apply an event to the form state, returning the request to send, if any
    fn dispatch(&self, event: FormEvent) -> Option<UserEntryDto> {
        let mut request = None;
        self.form.update(|f| {
            let transition = f.reduce(event);
            *f = transition.state;
            request = transition.request;
        });
        request
    }

    /// Validate and send the form to the server
    pub fn submit_command(&self) {
        let Some(payload) = self.dispatch(FormEvent::SubmitRequested) else {
            if let Some(msg) = self.form.with_untracked(|f| f.message.clone()) {
                log::warn!("User entry rejected: {}", msg.text);
            }
            return;
        };

        log::info!("Submitting user entry for roll number {}", payload.roll_no);

        let form = self.form;
        let api_base = self.api_base.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = model::save_user(&api_base, &payload).await;

            // Outer None: the signal is disposed. Inner None: no submission was pending.
            let message = form.try_update(|f| {
                let was_submitting = f.is_submitting();
                *f = f.reduce(FormEvent::ResponseReceived(outcome)).state;
                if was_submitting {
                    f.message.clone()
                } else {
                    None
                }
            });

            match message {
                None => log::debug!("Response arrived after the form was closed"),
                Some(None) => log::debug!("Ignored response with no pending submission"),
                Some(Some(FormMessage {
                    kind: MessageKind::Success,
                    ..
                })) => log::info!("User entry saved"),
                Some(Some(msg)) => log::error!("User entry save failed: {}", msg.text),
            }
        });
    }
}
