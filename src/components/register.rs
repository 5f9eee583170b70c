use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::auth::{RegisterRequest, register};
use wasm_bindgen_futures::spawn_local;

#[derive(Properties, PartialEq)]
pub struct RegisterProps {
    /// Registration does not auto-login; the parent navigates to the
    /// login view on success.
    pub on_registered: Callback<()>,
    pub on_navigate_login: Callback<()>,
}

#[function_component(Register)]
pub fn register_view(props: &RegisterProps) -> Html {
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_username = input_setter(&username);
    let on_email = input_setter(&email);
    let on_password = input_setter(&password);

    let on_submit = {
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_registered = props.on_registered.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            error.set(None);

            let request = RegisterRequest {
                username: (*username).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let submitting = submitting.clone();
            let on_registered = on_registered.clone();

            spawn_local(async move {
                match register(&request).await {
                    Ok(_) => {
                        submitting.set(false);
                        on_registered.emit(());
                    }
                    Err(e) => {
                        gloo::console::warn!(format!("Registration failed: {e}"));
                        submitting.set(false);
                        error.set(Some("Registration failed, please try again".to_string()));
                    }
                }
            });
        })
    };

    let on_login = {
        let on_navigate_login = props.on_navigate_login.clone();
        Callback::from(move |_| on_navigate_login.emit(()))
    };

    html! {
        <div class="auth-container">
            <h2>{"Register"}</h2>
            <form onsubmit={on_submit} class="auth-form">
                <input
                    type="text"
                    placeholder="Username"
                    value={(*username).clone()}
                    oninput={on_username}
                    required=true
                />
                <input
                    type="email"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={on_email}
                    required=true
                />
                <input
                    type="password"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={on_password}
                    required=true
                />
                <button type="submit" disabled={*submitting}>
                    {if *submitting { "Registering..." } else { "Register" }}
                </button>
                if let Some(msg) = &*error {
                    <p class="auth-error">{msg}</p>
                }
            </form>
            <p>
                {"Already have an account? "}
                <a onclick={on_login}>{"Login here"}</a>
            </p>
        </div>
    }
}

fn input_setter(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let target: HtmlInputElement = e.target_unchecked_into();
        state.set(target.value());
    })
}
