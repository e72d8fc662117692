use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Тип, который редактор присваивает всем новым параметрам
pub const PARAM_TYPE_STRING: &str = "string";

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор параметра, стабилен на всё время жизни редактора
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterId(pub i64);

impl ParameterId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Следующий идентификатор после данного, `None` при исчерпании диапазона
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// DOM id для поля ввода значения, например `param-3`
    pub fn dom_id(&self) -> String {
        format!("param-{}", self.as_string())
    }
}

impl AggregateId for ParameterId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(ParameterId::new)
            .map_err(|e| format!("Invalid parameter id: {}", e))
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Определение параметра (строка формы)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: ParameterId,
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

impl Parameter {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: ParameterId::new(id),
            name: name.into(),
            param_type: PARAM_TYPE_STRING.to_string(),
        }
    }

    /// Пустой параметр, который создаётся кнопкой "Добавить"
    pub fn blank(id: ParameterId) -> Self {
        Self {
            id,
            name: String::new(),
            param_type: PARAM_TYPE_STRING.to_string(),
        }
    }
}

/// Значение параметра, привязанное по id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterValue {
    #[serde(rename = "paramId")]
    pub param_id: ParameterId,
    pub value: String,
}

impl ParameterValue {
    pub fn new(param_id: i64, value: impl Into<String>) -> Self {
        Self {
            param_id: ParameterId::new(param_id),
            value: value.into(),
        }
    }
}

/// Цвет модели. В UI не показывается, редактор передаёт его как есть.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    #[serde(rename = "colorId")]
    pub color_id: i64,
    pub value: String,
}

/// Модель значений: вход редактора и результат `get_model()`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamModel {
    #[serde(rename = "paramValues")]
    pub param_values: Vec<ParameterValue>,
    #[serde(default)]
    pub colors: Vec<Color>,
}

/// Начальные значения: для каждого параметра найденное значение или пустая строка.
///
/// Повторяющиеся id в `params` пропускаются (побеждает первый), для
/// повторяющихся `paramId` в модели берётся первое значение.
pub(crate) fn derive_values(
    params: &[Parameter],
    model: &ParamModel,
) -> (Vec<Parameter>, BTreeMap<ParameterId, String>) {
    let mut parameters = Vec::with_capacity(params.len());
    let mut values = BTreeMap::new();

    for param in params {
        if values.contains_key(&param.id) {
            log::warn!("duplicate parameter id {} dropped", param.id.as_string());
            continue;
        }
        let value = model
            .param_values
            .iter()
            .find(|pv| pv.param_id == param.id)
            .map(|pv| pv.value.clone())
            .unwrap_or_default();
        values.insert(param.id, value);
        parameters.push(param.clone());
    }

    (parameters, values)
}
