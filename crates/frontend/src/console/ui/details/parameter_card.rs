use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Input, Select};
use contracts::{ParamSpec, ParamType};
use leptos::prelude::*;

/// Widget used to edit a parameter of a given type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamInput {
    /// Unset / true / false
    TriState(Vec<(String, String)>),
    /// Free text with a virtual keyboard hint
    Text { input_mode: &'static str },
}

impl ParamInput {
    pub fn for_type(param_type: ParamType) -> Self {
        match param_type {
            ParamType::Boolean => ParamInput::TriState(vec![
                (String::new(), "Select a value".to_string()),
                ("true".to_string(), "True".to_string()),
                ("false".to_string(), "False".to_string()),
            ]),
            ParamType::Number => ParamInput::Text {
                input_mode: "decimal",
            },
            ParamType::String => ParamInput::Text { input_mode: "text" },
        }
    }
}

/// Label, type badge, input and description of one parameter
#[component]
pub fn ParameterInputCard(spec: ParamSpec) -> impl IntoView {
    let ctx = use_app_context();
    let name = spec.name;
    let input_id = format!("param-{}", name);
    let description_id = format!("param-{}-description", name);

    let value = Signal::derive(move || ctx.console.with(|c| c.parameter(name)));
    let on_change = Callback::new(move |v: String| ctx.set_parameter(name, v));

    let input = match ParamInput::for_type(spec.param_type) {
        ParamInput::TriState(options) => view! {
            <Select
                id=input_id.clone()
                value=value
                on_change=on_change
                options=options
                described_by=description_id.clone()
            />
        }
        .into_any(),
        ParamInput::Text { input_mode } => view! {
            <Input
                id=input_id.clone()
                value=value
                on_input=on_change
                placeholder=spec.description
                input_mode=input_mode
                described_by=description_id.clone()
            />
        }
        .into_any(),
    };

    view! {
        <div class="param-card">
            <div class="param-card__head">
                <label class="param-card__name" for=input_id>
                    {name}
                    {spec.required.then(|| view! {
                        <span class="param-card__required" aria-hidden="true">"*"</span>
                    })}
                </label>
                <span class="param-card__type">{spec.param_type.as_str()}</span>
            </div>
            <div class="param-card__input">{input}</div>
            <p id=description_id class="param-card__description">{spec.description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_gets_tri_state_select() {
        match ParamInput::for_type(ParamType::Boolean) {
            ParamInput::TriState(options) => {
                let values: Vec<&str> = options.iter().map(|(v, _)| v.as_str()).collect();
                assert_eq!(values, vec!["", "true", "false"]);
            }
            other => panic!("unexpected input {:?}", other),
        }
    }

    #[test]
    fn test_number_is_numeric_hinted_text() {
        assert_eq!(
            ParamInput::for_type(ParamType::Number),
            ParamInput::Text { input_mode: "decimal" }
        );
        assert_eq!(
            ParamInput::for_type(ParamType::String),
            ParamInput::Text { input_mode: "text" }
        );
    }
}
