use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::models::crowd::CrowdLevel;

#[derive(Properties, PartialEq)]
pub struct ReportFormProps {
    /// Invoked once per confirmation with (level, description). Failure
    /// handling belongs to the parent view model, not the form.
    pub on_submit: Callback<(CrowdLevel, String)>,
    pub on_close: Callback<()>,
    #[prop_or(false)]
    pub submitting: bool,
}

/// Modal crowd report form. Local-only state: selected level (default
/// Moderate), free-text description. Cancel discards everything.
#[function_component(ReportForm)]
pub fn report_form(props: &ReportFormProps) -> Html {
    let level = use_state(|| CrowdLevel::Moderate);
    let description = use_state(String::new);

    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(target.value());
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let level = level.clone();
        let description = description.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*level, (*description).clone()));
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal-header">
                    <h3>{"Report Current Crowd Level"}</h3>
                    <button class="close-btn" onclick={on_close.clone()}>{"×"}</button>
                </div>

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{"Crowd Level"}</label>
                        <div class="crowd-level-selector">
                            {
                                CrowdLevel::all().iter().map(|option| {
                                    level_button(&level, *option)
                                }).collect::<Html>()
                            }
                        </div>
                        <p class="level-description">{level.description()}</p>
                    </div>

                    <div class="form-group">
                        <label>{"Description (Optional)"}</label>
                        <textarea
                            value={(*description).clone()}
                            oninput={on_description}
                            placeholder="Add any additional details..."
                            rows="3"
                        />
                    </div>

                    <div class="form-actions">
                        <button type="button" class="cancel-btn" onclick={on_close}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="submit-btn" disabled={props.submitting}>
                            {if props.submitting { "Submitting..." } else { "Submit Report" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn level_button(selected: &UseStateHandle<CrowdLevel>, option: CrowdLevel) -> Html {
    let is_selected = **selected == option;
    let style = if is_selected {
        format!(
            "background-color: {}; color: white; border-color: {}",
            option.color(),
            option.color()
        )
    } else {
        format!(
            "background-color: white; color: {}; border-color: {}",
            option.color(),
            option.color()
        )
    };

    let onclick = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(option))
    };

    let class = if is_selected {
        "level-btn selected"
    } else {
        "level-btn"
    };

    html! {
        <button type="button" {class} {style} {onclick}>
            {option.label()}
        </button>
    }
}
