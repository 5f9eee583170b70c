use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::services::auth::login;
use crate::services::session::Session;
use wasm_bindgen_futures::spawn_local;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_login: Callback<Session>,
    pub on_navigate_register: Callback<()>,
}

/// Login form. Auth failures are the one error with a distinguishable
/// user-facing message; everything else shows a generic failure line.
#[function_component(Login)]
pub fn login_view(props: &LoginProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_username = input_setter(&username);
    let on_password = input_setter(&password);

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            error.set(None);

            let username_value = (*username).clone();
            let password_value = (*password).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let on_login = on_login.clone();

            spawn_local(async move {
                match login(&username_value, &password_value).await {
                    Ok(session) => {
                        submitting.set(false);
                        on_login.emit(session);
                    }
                    Err(AppError::Auth(msg)) => {
                        submitting.set(false);
                        error.set(Some(msg));
                    }
                    Err(e) => {
                        gloo::console::warn!(format!("Login failed: {e}"));
                        submitting.set(false);
                        error.set(Some("Login failed, please try again".to_string()));
                    }
                }
            });
        })
    };

    let on_register = {
        let on_navigate_register = props.on_navigate_register.clone();
        Callback::from(move |_| on_navigate_register.emit(()))
    };

    html! {
        <div class="auth-container">
            <h2>{"Login"}</h2>
            <form onsubmit={on_submit} class="auth-form">
                <input
                    type="text"
                    placeholder="Username"
                    value={(*username).clone()}
                    oninput={on_username}
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
                    {if *submitting { "Logging in..." } else { "Login" }}
                </button>
                if let Some(msg) = &*error {
                    <p class="auth-error">{msg}</p>
                }
            </form>
            <p>
                {"Don't have an account? "}
                <a onclick={on_register}>{"Register here"}</a>
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
