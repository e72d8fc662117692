use contracts::domain::a001_parameter::{ParamModel, ParamValues, Parameter, ParameterId};
use leptos::prelude::*;

/// ViewModel for the minimal editor. Created by the caller, which reads the
/// edited values back through `get_model`.
#[derive(Clone, Copy)]
pub struct ParamValuesVm {
    pub values: RwSignal<ParamValues>,
}

impl ParamValuesVm {
    pub fn new(params: &[Parameter], model: &ParamModel) -> Self {
        Self {
            values: RwSignal::new(ParamValues::from_props(params, model)),
        }
    }

    pub fn params(&self) -> Vec<Parameter> {
        self.values.with_untracked(|v| v.params().to_vec())
    }

    pub fn value_of(&self, id: ParameterId) -> Signal<String> {
        let values = self.values;
        Signal::derive(move || values.with(|v| v.value_of(id).unwrap_or_default().to_string()))
    }

    pub fn change_value(&self, id: ParameterId, value: String) {
        self.values.update(|v| v.handle_value_change(id, value));
    }

    pub fn get_model(&self) -> ParamModel {
        self.values.with_untracked(|v| v.get_model())
    }
}
