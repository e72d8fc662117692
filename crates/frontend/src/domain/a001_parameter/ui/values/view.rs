use super::view_model::ParamValuesVm;
use leptos::prelude::*;

#[component]
pub fn ParamValuesEditor(vm: ParamValuesVm) -> impl IntoView {
    // parameter list is fixed for this editor
    let params = vm.params();

    view! {
        <div class="param-values" style="display: grid; gap: 10px;">
            {params
                .into_iter()
                .map(|param| {
                    let id = param.id;
                    let dom_id = id.dom_id();
                    let value = vm.value_of(id);
                    view! {
                        <div style="display: grid; grid-template-columns: auto 1fr; gap: 10px;">
                            <label for=dom_id.clone()>{param.name}</label>
                            <input
                                type="text"
                                id=dom_id
                                class="form__input"
                                prop:value=move || value.get()
                                on:input=move |ev| vm.change_value(id, event_target_value(&ev))
                            />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
