use crate::domain::a001_parameter::ui::details::{ParamEditorDetails, ParamEditorVm};
use crate::domain::a001_parameter::ui::values::{ParamValuesEditor, ParamValuesVm};
use crate::shared::config::{load_config, use_editor_config};
use contracts::domain::a001_parameter::{Color, ParamModel, Parameter, ParameterValue};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ConfigProvider};

fn sample_params() -> Vec<Parameter> {
    vec![
        Parameter::new(1, "Name"),
        Parameter::new(2, "Age"),
        Parameter::new(3, "Email"),
    ]
}

fn sample_model() -> ParamModel {
    ParamModel {
        param_values: vec![
            ParameterValue::new(1, "John"),
            ParameterValue::new(2, "30"),
            ParameterValue::new(3, "john@example.com"),
        ],
        colors: vec![Color {
            color_id: 1,
            value: "#3366ff".to_string(),
        }],
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the editor config to the whole app via context.
    provide_context(load_config());

    view! {
        <ConfigProvider>
            <div style="max-width: 480px; margin: auto; padding: 40px 0; display: grid; gap: 40px;">
                <FullEditor />
                <MinimalEditor />
            </div>
        </ConfigProvider>
    }
}

#[component]
fn FullEditor() -> impl IntoView {
    let config = use_editor_config();
    let vm = ParamEditorVm::new(&sample_params(), &sample_model(), &config);

    view! { <ParamEditorDetails vm=vm /> }
}

#[component]
fn MinimalEditor() -> impl IntoView {
    let vm = ParamValuesVm::new(&sample_params(), &sample_model());

    let log_model = move |_: leptos::ev::MouseEvent| match serde_json::to_string(&vm.get_model()) {
        Ok(json) => log::info!("model: {}", json),
        Err(e) => log::error!("failed to serialize model: {}", e),
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>"Значения"</h3>
            </div>
            <ParamValuesEditor vm=vm />
            <div class="details-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=log_model>
                    "Показать модель"
                </Button>
            </div>
        </div>
    }
}
