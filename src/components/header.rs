use yew::prelude::*;

use crate::hooks::use_session::SessionHandle;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavTarget {
    Dashboard,
    Stations,
    Analytics,
    Login,
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub session: SessionHandle,
    pub on_navigate: Callback<NavTarget>,
}

/// Top bar: title, navigation and the session display. Logout clears
/// the session unconditionally.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav = |target: NavTarget| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(target))
    };

    let on_logout = {
        let logout = props.session.logout.clone();
        Callback::from(move |_| logout.emit(()))
    };

    html! {
        <header class="header">
            <h1 class="header-title">{"Crowding Predictor"}</h1>
            <nav class="header-nav">
                <button onclick={nav(NavTarget::Dashboard)}>{"Dashboard"}</button>
                <button onclick={nav(NavTarget::Stations)}>{"Stations"}</button>
                <button onclick={nav(NavTarget::Analytics)}>{"Analytics"}</button>
            </nav>
            <div class="header-user">
                {
                    match props.session.username() {
                        Some(username) => html! {
                            <>
                                <span>{"Welcome, "}{username}</span>
                                <button onclick={on_logout}>{"Logout"}</button>
                            </>
                        },
                        None => html! {
                            <>
                                <span>{"Guest"}</span>
                                <button onclick={nav(NavTarget::Login)}>{"Login"}</button>
                            </>
                        },
                    }
                }
            </div>
        </header>
    }
}
