//! Простой редактор значений: только ввод, без валидации и без сохранения.

use super::aggregate::{derive_values, Color, ParamModel, Parameter, ParameterId, ParameterValue};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamValues {
    params: Vec<Parameter>,
    values: BTreeMap<ParameterId, String>,
    colors: Vec<Color>,
}

impl ParamValues {
    pub fn from_props(params: &[Parameter], model: &ParamModel) -> Self {
        let (params, values) = derive_values(params, model);
        Self {
            params,
            values,
            colors: model.colors.clone(),
        }
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn value_of(&self, id: ParameterId) -> Option<&str> {
        self.values.get(&id).map(String::as_str)
    }

    /// Обновить значение; неизвестные id игнорируются
    pub fn handle_value_change(&mut self, id: ParameterId, value: String) {
        if let Some(slot) = self.values.get_mut(&id) {
            *slot = value;
        }
    }

    pub fn get_model(&self) -> ParamModel {
        ParamModel {
            param_values: self
                .params
                .iter()
                .map(|p| ParameterValue {
                    param_id: p.id,
                    value: self.values.get(&p.id).cloned().unwrap_or_default(),
                })
                .collect(),
            colors: self.colors.clone(),
        }
    }
}
