use super::model;
use crate::shared::config::EditorConfig;
use contracts::domain::a001_parameter::{
    NameError, ParamEditorState, ParamModel, Parameter, ParameterId,
};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// ViewModel for the full parameter editor
#[derive(Clone, Copy)]
pub struct ParamEditorVm {
    pub state: RwSignal<ParamEditorState>,
    /// Save request in flight
    pub saving: RwSignal<bool>,
    save_url: StoredValue<String>,
}

impl ParamEditorVm {
    pub fn new(params: &[Parameter], model: &ParamModel, config: &EditorConfig) -> Self {
        Self {
            state: RwSignal::new(ParamEditorState::from_props(params, model)),
            saving: RwSignal::new(false),
            save_url: StoredValue::new(config.save_url.clone()),
        }
    }

    // === Derived state ===

    pub fn rows(&self) -> Signal<Vec<Parameter>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.parameters().to_vec()))
    }

    pub fn name_of(&self, id: ParameterId) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| {
                s.parameters()
                    .iter()
                    .find(|p| p.id == id)
                    .map(|p| p.name.clone())
                    .unwrap_or_default()
            })
        })
    }

    pub fn value_of(&self, id: ParameterId) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.value_of(id).unwrap_or_default().to_string()))
    }

    pub fn error_of(&self, id: ParameterId) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error_for(id).map(name_error_text)))
    }

    pub fn is_form_changed(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_form_changed()))
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let saving = self.saving;
        let is_changed = self.is_form_changed();
        Signal::derive(move || saving.get() || !is_changed.get())
    }

    pub fn is_add_disabled(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| !s.can_add_param()))
    }

    // === Commands ===

    pub fn change_value(&self, id: ParameterId, value: String) {
        self.state.maybe_update(|s| s.handle_value_change(id, value));
    }

    pub fn change_name(&self, id: ParameterId, name: String) {
        self.state.update(|s| s.handle_name_change(id, name));
    }

    pub fn add_param(&self) {
        let mut added = None;
        self.state.update(|s| added = s.handle_add_param());
        match added {
            Some(id) => log::debug!("parameter {} added", id.as_string()),
            None => log::debug!("add refused"),
        }
    }

    pub fn delete_param(&self, id: ParameterId) {
        self.state.maybe_update(|s| s.handle_delete_param(id));
    }

    /// Fire-and-forget save. The dirty flag is cleared before the request
    /// resolves; failures are logged, not shown.
    pub fn save(&self) {
        if self.saving.get_untracked() {
            log::warn!("save already in flight, ignored");
            return;
        }

        if self.state.with_untracked(|s| s.has_errors()) {
            log::warn!("saving with duplicate parameter names");
        }

        let mut fields = Vec::new();
        self.state.update(|s| fields = s.begin_save());
        self.saving.set(true);

        let url = self.save_url.get_value();
        let saving = self.saving;
        leptos::task::spawn_local(async move {
            match model::save_params(&url, &fields).await {
                Ok(response) => log::info!("parameters saved: {}", response),
                Err(e) => log::error!("parameter save failed: {}", e),
            }
            saving.set(false);
        });
    }

    pub fn get_model(&self) -> ParamModel {
        self.state.with_untracked(|s| s.get_model())
    }
}

fn name_error_text(error: &NameError) -> String {
    match error {
        NameError::Duplicate { .. } => "Параметр с таким именем уже существует".to_string(),
    }
}
