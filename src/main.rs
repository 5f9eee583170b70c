use yew::prelude::*;

use crowd_dashboard::components::analytics::Analytics;
use crowd_dashboard::components::dashboard::Dashboard;
use crowd_dashboard::components::login::Login;
use crowd_dashboard::components::register::Register;
use crowd_dashboard::components::station_detail::StationDetail;
use crowd_dashboard::components::station_list::StationList;
use crowd_dashboard::components::{Header, NavTarget};
use crowd_dashboard::hooks::use_session::use_session;
use crowd_dashboard::services::session::Session;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum View {
    Dashboard,
    Stations,
    StationDetail(u32),
    Analytics,
    Login,
    Register,
}

#[function_component(App)]
fn app() -> Html {
    let session = use_session();
    let view = use_state(|| View::Dashboard);

    let on_navigate = {
        let view = view.clone();
        Callback::from(move |target: NavTarget| {
            view.set(match target {
                NavTarget::Dashboard => View::Dashboard,
                NavTarget::Stations => View::Stations,
                NavTarget::Analytics => View::Analytics,
                NavTarget::Login => View::Login,
            });
        })
    };

    let on_select_station = {
        let view = view.clone();
        Callback::from(move |id: u32| view.set(View::StationDetail(id)))
    };

    let on_require_login = {
        let view = view.clone();
        Callback::from(move |()| view.set(View::Login))
    };

    let on_login = {
        let view = view.clone();
        let set_session = session.set_session.clone();
        Callback::from(move |new_session: Session| {
            set_session.emit(new_session);
            view.set(View::Dashboard);
        })
    };

    let on_registered = {
        let view = view.clone();
        Callback::from(move |()| view.set(View::Login))
    };

    let to_login = {
        let view = view.clone();
        Callback::from(move |()| view.set(View::Login))
    };

    let to_register = {
        let view = view.clone();
        Callback::from(move |()| view.set(View::Register))
    };

    html! {
        <div class="app-container">
            <Header session={session.clone()} on_navigate={on_navigate} />

            <main class="app-main">
                {
                    match *view {
                        View::Dashboard => html! {
                            <Dashboard on_select_station={on_select_station.clone()} />
                        },
                        View::Stations => html! {
                            <StationList on_select_station={on_select_station.clone()} />
                        },
                        View::StationDetail(id) => html! {
                            <StationDetail
                                station_id={id}
                                authenticated={session.is_authenticated()}
                                on_require_login={on_require_login}
                            />
                        },
                        View::Analytics => html! { <Analytics /> },
                        View::Login => html! {
                            <Login on_login={on_login} on_navigate_register={to_register} />
                        },
                        View::Register => html! {
                            <Register on_registered={on_registered} on_navigate_login={to_login} />
                        },
                    }
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
