//! Состояние полного редактора параметров.
//!
//! Правило "форма изменена" одно: текущий снимок строк отличается от
//! последнего сохранённого (базового) снимка. Переименование или правка
//! значения обратно к исходному возвращает форму в чистое состояние.

use super::aggregate::{derive_values, Color, ParamModel, Parameter, ParameterId, ParameterValue};
use crate::domain::common::AggregateId;
use std::collections::BTreeMap;
use std::fmt;

/// Ошибка валидации имени параметра
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    Duplicate { name: String },
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::Duplicate { .. } => write!(f, "parameter name already exists"),
        }
    }
}

impl std::error::Error for NameError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRow {
    pub id: ParameterId,
    pub name: String,
    pub value: String,
}

/// Упорядоченный снимок строк формы
pub type Snapshot = Vec<SnapshotRow>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamEditorState {
    parameters: Vec<Parameter>,
    values: BTreeMap<ParameterId, String>,
    errors: BTreeMap<ParameterId, NameError>,
    colors: Vec<Color>,
    baseline: Snapshot,
    /// `None` once the id range is exhausted
    next_id: Option<ParameterId>,
}

impl ParamEditorState {
    pub fn from_props(params: &[Parameter], model: &ParamModel) -> Self {
        let (parameters, values) = derive_values(params, model);
        let next_id = match parameters.iter().map(|p| p.id).max() {
            Some(max) => max.next(),
            None => Some(ParameterId::new(1)),
        };

        let mut state = Self {
            parameters,
            values,
            errors: BTreeMap::new(),
            colors: model.colors.clone(),
            baseline: Vec::new(),
            next_id,
        };
        state.baseline = state.snapshot();
        state
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn value_of(&self, id: ParameterId) -> Option<&str> {
        self.values.get(&id).map(String::as_str)
    }

    pub fn error_for(&self, id: ParameterId) -> Option<&NameError> {
        self.errors.get(&id)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Изменить значение. Возвращает `false`, если ничего не поменялось.
    pub fn handle_value_change(&mut self, id: ParameterId, value: String) -> bool {
        let Some(slot) = self.values.get_mut(&id) else {
            return false;
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    /// Переименовать параметр. Ввод не блокируется: дубликат только
    /// помечается ошибкой для этой строки.
    pub fn handle_name_change(&mut self, id: ParameterId, new_name: String) {
        let Some(param) = self.parameters.iter_mut().find(|p| p.id == id) else {
            return;
        };
        param.name = new_name.clone();

        if self.is_duplicate(id, &new_name) {
            log::debug!("duplicate parameter name {:?} on {}", new_name, id.as_string());
            self.errors
                .insert(id, NameError::Duplicate { name: new_name });
        } else {
            self.errors.remove(&id);
        }

        // other rows may have become unique; never add errors to them
        let resolved: Vec<ParameterId> = self
            .errors
            .keys()
            .copied()
            .filter(|other| *other != id)
            .filter(|other| {
                let name = self
                    .parameters
                    .iter()
                    .find(|p| p.id == *other)
                    .map(|p| p.name.as_str())
                    .unwrap_or_default();
                !self.is_duplicate(*other, name)
            })
            .collect();
        for other in resolved {
            self.errors.remove(&other);
        }
    }

    fn is_duplicate(&self, id: ParameterId, name: &str) -> bool {
        !name.is_empty()
            && self
                .parameters
                .iter()
                .any(|p| p.id != id && p.name == name)
    }

    /// Добавлять можно, только если у всех параметров заполнено значение
    pub fn can_add_param(&self) -> bool {
        self.values.values().all(|v| !v.is_empty())
    }

    /// Добавить пустой параметр. Id берётся из монотонного счётчика,
    /// поэтому id удалённых строк не переиспользуются.
    pub fn handle_add_param(&mut self) -> Option<ParameterId> {
        if !self.can_add_param() {
            return None;
        }
        let Some(id) = self.next_id else {
            log::warn!("parameter id range exhausted, add refused");
            return None;
        };
        self.next_id = id.next();
        self.parameters.push(Parameter::blank(id));
        self.values.insert(id, String::new());
        Some(id)
    }

    pub fn handle_delete_param(&mut self, id: ParameterId) -> bool {
        let Some(pos) = self.parameters.iter().position(|p| p.id == id) else {
            return false;
        };
        self.parameters.remove(pos);
        self.values.remove(&id);
        self.errors.remove(&id);

        // removing one side of a duplicate pair resolves the other
        let names: Vec<(ParameterId, String)> = self
            .parameters
            .iter()
            .map(|p| (p.id, p.name.clone()))
            .collect();
        for (other, name) in names {
            if self.errors.contains_key(&other) && !self.is_duplicate(other, &name) {
                self.errors.remove(&other);
            }
        }
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        self.parameters
            .iter()
            .map(|p| SnapshotRow {
                id: p.id,
                name: p.name.clone(),
                value: self.values.get(&p.id).cloned().unwrap_or_default(),
            })
            .collect()
    }

    pub fn is_form_changed(&self) -> bool {
        self.snapshot() != self.baseline
    }

    /// Текущий снимок становится базовым
    pub fn mark_saved(&mut self) {
        self.baseline = self.snapshot();
    }

    /// Поля для отправки. Флаг изменений сбрасывается сразу, не дожидаясь
    /// ответа сервера.
    pub fn begin_save(&mut self) -> Vec<(String, String)> {
        let fields = self.form_fields();
        self.mark_saved();
        fields
    }

    pub fn get_model(&self) -> ParamModel {
        ParamModel {
            param_values: self
                .parameters
                .iter()
                .map(|p| ParameterValue {
                    param_id: p.id,
                    value: self.values.get(&p.id).cloned().unwrap_or_default(),
                })
                .collect(),
            colors: self.colors.clone(),
        }
    }

    /// Пары имя → значение для multipart-формы, в порядке строк
    pub fn form_fields(&self) -> Vec<(String, String)> {
        self.snapshot()
            .into_iter()
            .map(|row| (row.name, row.value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(v: i64) -> ParameterId {
        ParameterId::new(v)
    }

    fn editor(params: &[(i64, &str, &str)]) -> ParamEditorState {
        let defs: Vec<Parameter> = params.iter().map(|(i, n, _)| Parameter::new(*i, *n)).collect();
        let model = ParamModel {
            param_values: params
                .iter()
                .map(|(i, _, v)| ParameterValue::new(*i, *v))
                .collect(),
            colors: vec![],
        };
        ParamEditorState::from_props(&defs, &model)
    }

    #[test]
    fn test_initial_values_from_model() {
        let params = vec![Parameter::new(1, "Name"), Parameter::new(2, "Age")];
        let model = ParamModel {
            param_values: vec![ParameterValue::new(2, "30")],
            colors: vec![],
        };
        let state = ParamEditorState::from_props(&params, &model);
        assert_eq!(state.value_of(id(1)), Some(""));
        assert_eq!(state.value_of(id(2)), Some("30"));
        assert!(!state.is_form_changed());
    }

    #[test]
    fn test_dirty_flag_follows_value() {
        let mut state = editor(&[(1, "Name", "John")]);

        assert!(!state.handle_value_change(id(1), "John".to_string()));
        assert!(!state.is_form_changed());

        assert!(state.handle_value_change(id(1), "Jane".to_string()));
        assert!(state.is_form_changed());

        state.handle_value_change(id(1), "John".to_string());
        assert!(!state.is_form_changed());
    }

    #[test]
    fn test_value_change_is_independent() {
        let mut state = editor(&[(1, "Name", "John"), (2, "Age", "30")]);
        state.handle_value_change(id(2), "31".to_string());
        assert_eq!(state.value_of(id(1)), Some("John"));
        assert_eq!(state.value_of(id(2)), Some("31"));
    }

    #[test]
    fn test_clearing_one_field_keeps_other_dirty_fields() {
        let mut state = editor(&[(1, "Name", "John"), (2, "Age", "30")]);
        state.handle_value_change(id(1), "Jane".to_string());
        state.handle_value_change(id(2), String::new());
        assert!(state.is_form_changed());
    }

    #[test]
    fn test_duplicate_name_marks_only_renamed_row() {
        let mut state = editor(&[(1, "Weight", "80"), (2, "Country", "NL")]);
        state.handle_name_change(id(2), "Weight".to_string());

        assert_eq!(
            state.error_for(id(2)),
            Some(&NameError::Duplicate {
                name: "Weight".to_string()
            })
        );
        assert_eq!(state.error_for(id(1)), None);
        assert_eq!(state.parameters()[0].name, "Weight");
        // keystroke is not blocked
        assert_eq!(state.parameters()[1].name, "Weight");
        assert_eq!(
            state.error_for(id(2)).map(|e| e.to_string()),
            Some("parameter name already exists".to_string())
        );
    }

    #[test]
    fn test_duplicate_error_clears() {
        let mut state = editor(&[(1, "Weight", "80"), (2, "Country", "NL")]);
        state.handle_name_change(id(2), "Weight".to_string());
        state.handle_name_change(id(2), "Country".to_string());
        assert!(!state.has_errors());
        assert!(!state.is_form_changed());

        // renaming the other side resolves the pair too
        state.handle_name_change(id(2), "Weight".to_string());
        state.handle_name_change(id(1), "Mass".to_string());
        assert!(!state.has_errors());
    }

    #[test]
    fn test_empty_names_are_not_duplicates() {
        let mut state = editor(&[(1, "", "a"), (2, "Country", "NL")]);
        state.handle_name_change(id(2), String::new());
        assert!(!state.has_errors());
    }

    #[test]
    fn test_rename_marks_changed() {
        let mut state = editor(&[(1, "Name", "John")]);
        state.handle_name_change(id(1), "FirstName".to_string());
        assert!(state.is_form_changed());
        state.handle_name_change(id(1), "Name".to_string());
        assert!(!state.is_form_changed());
    }

    #[test]
    fn test_add_blocked_by_empty_value() {
        let mut state = editor(&[(1, "Name", "John"), (2, "Age", "")]);
        assert!(!state.can_add_param());
        assert_eq!(state.handle_add_param(), None);
        assert_eq!(state.parameters().len(), 2);

        state.handle_value_change(id(2), "30".to_string());
        assert_eq!(state.handle_add_param(), Some(id(3)));
        assert_eq!(state.value_of(id(3)), Some(""));
        assert!(!state.can_add_param());
        assert!(state.is_form_changed());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut state = editor(&[(1, "Name", "John"), (2, "Age", "30")]);
        assert!(state.handle_delete_param(id(1)));
        let added = state.handle_add_param();
        assert_eq!(added, Some(id(3)));

        let ids: Vec<ParameterId> = state.parameters().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![id(2), id(3)]);
    }

    #[test]
    fn test_delete_removes_definition_and_value() {
        let mut state = editor(&[(1, "Name", "John"), (2, "Age", "30")]);
        assert!(state.handle_delete_param(id(1)));
        assert!(!state.handle_delete_param(id(1)));

        assert_eq!(state.value_of(id(1)), None);
        let model = state.get_model();
        assert!(model.param_values.iter().all(|pv| pv.param_id != id(1)));
        assert!(state.is_form_changed());
    }

    #[test]
    fn test_delete_resolves_duplicate() {
        let mut state = editor(&[(1, "Weight", "80"), (2, "Country", "NL")]);
        state.handle_name_change(id(2), "Weight".to_string());
        state.handle_delete_param(id(1));
        assert!(!state.has_errors());
    }

    #[test]
    fn test_mark_saved_resets_baseline() {
        let mut state = editor(&[(1, "Name", "John")]);
        state.handle_value_change(id(1), "Jane".to_string());
        state.mark_saved();
        assert!(!state.is_form_changed());

        state.handle_value_change(id(1), "John".to_string());
        assert!(state.is_form_changed());
    }

    #[test]
    fn test_form_fields_and_colors_passthrough() {
        let params = vec![Parameter::new(1, "Name"), Parameter::new(2, "Age")];
        let model = ParamModel {
            param_values: vec![ParameterValue::new(1, "John"), ParameterValue::new(2, "30")],
            colors: vec![Color {
                color_id: 1,
                value: "red".to_string(),
            }],
        };
        let state = ParamEditorState::from_props(&params, &model);
        assert_eq!(
            state.form_fields(),
            vec![
                ("Name".to_string(), "John".to_string()),
                ("Age".to_string(), "30".to_string()),
            ]
        );
        assert_eq!(state.get_model().colors, model.colors);
    }

    #[test]
    fn test_begin_save_clears_dirty_flag() {
        let mut state = editor(&[(1, "Name", "John")]);
        state.handle_value_change(id(1), "Jane".to_string());
        assert!(state.is_form_changed());

        let fields = state.begin_save();
        assert_eq!(fields, vec![("Name".to_string(), "Jane".to_string())]);
        assert!(!state.is_form_changed());
    }

    #[test]
    fn test_max_id_does_not_overflow() {
        let mut state = editor(&[(i64::MAX, "Big", "1")]);
        assert!(!state.is_form_changed());
        assert!(state.can_add_param());
        assert_eq!(state.handle_add_param(), None);
        assert_eq!(state.parameters().len(), 1);

        let mut near = editor(&[(i64::MAX - 1, "Big", "1")]);
        assert_eq!(near.handle_add_param(), Some(id(i64::MAX)));
        near.handle_value_change(id(i64::MAX), "2".to_string());
        assert_eq!(near.handle_add_param(), None);
    }

    #[test]
    fn test_empty_props_start_ids_at_one() {
        let mut state = ParamEditorState::from_props(&[], &ParamModel::default());
        assert!(state.can_add_param());
        assert_eq!(state.handle_add_param(), Some(id(1)));
    }
}
