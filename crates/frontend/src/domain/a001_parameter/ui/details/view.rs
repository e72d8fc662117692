use super::view_model::ParamEditorVm;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use contracts::domain::a001_parameter::Parameter;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Full parameter editor: rename, add, delete and save
#[component]
pub fn ParamEditorDetails(vm: ParamEditorVm) -> impl IntoView {
    let rows = vm.rows();
    let is_add_disabled = vm.is_add_disabled();
    let is_save_disabled = vm.is_save_disabled();
    let saving = vm.saving;

    view! {
        <div class="details-container param-editor">
            <div class="details-header">
                <h3>"Параметры"</h3>
            </div>

            <div class="details-form">
                <Show
                    when=move || !rows.get().is_empty()
                    fallback=|| view! {
                        <div class="details-section__hint">"Нет параметров"</div>
                    }
                >
                    <For
                        each=move || rows.get()
                        key=|param| param.id
                        children=move |param| view! { <ParamRow vm=vm param=param /> }
                    />
                </Show>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.add_param()
                    disabled=is_add_disabled
                >
                    {icon("plus")}
                    " Добавить параметр"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save()
                    disabled=is_save_disabled
                >
                    {icon("save")}
                    {move || if saving.get() { " Сохранение..." } else { " Сохранить" }}
                </Button>
            </div>
        </div>
    }
}

/// One editable row: name, value, delete
#[component]
fn ParamRow(vm: ParamEditorVm, param: Parameter) -> impl IntoView {
    let id = param.id;
    let name_id = format!("param-name-{}", id.as_string());

    view! {
        <div class="param-editor__row" style="display: grid; grid-template-columns: 1fr 1fr auto; gap: 10px; align-items: start;">
            <Input
                id=name_id
                value=vm.name_of(id)
                placeholder="Имя параметра"
                error=vm.error_of(id)
                on_input=Callback::new(move |name: String| vm.change_name(id, name))
            />
            <Input
                id=id.dom_id()
                value=vm.value_of(id)
                placeholder="Значение"
                on_input=Callback::new(move |value: String| vm.change_value(id, value))
            />
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| vm.delete_param(id)
            >
                {icon("delete")}
            </Button>
        </div>
    }
}
