//! Club-creation form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and the domain
//! pieces of the leadership workflow (roster cache, per-field validation,
//! category classifier, submission).
//!
//! On first render the component fetches the full student roster once; the
//! cache is read-only afterwards and is discarded with the component when
//! the user navigates away. A failed fetch leaves the cache empty: every
//! identifier then reports not-found, and the view shows a "roster
//! unavailable" banner on top.

use std::collections::HashMap;

use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::student::StudentRecord;

mod classifier;
mod helpers;
mod messages;
mod props;
mod roster;
mod state;
mod styles;
mod submit;
mod update;
mod validation;
mod view;

pub use messages::Msg;
pub use props::ClubCreateProps;
pub use state::ClubCreateComponent;

const ROSTER_URL: &str = "/api/students/roster";

impl Component for ClubCreateComponent {
    type Message = Msg;
    type Properties = ClubCreateProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ClubCreateComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::get(ROSTER_URL).send().await;

                match response {
                    Ok(resp) if resp.status() == 200 => {
                        match resp.json::<HashMap<String, StudentRecord>>().await {
                            Ok(records) => link.send_message(Msg::RosterLoaded(records)),
                            Err(err) => {
                                error!(format!("roster payload could not be decoded: {}", err));
                                link.send_message(Msg::RosterUnavailable);
                            }
                        }
                    }
                    Ok(resp) => {
                        error!(format!("roster request failed with status {}", resp.status()));
                        link.send_message(Msg::RosterUnavailable);
                    }
                    Err(err) => {
                        error!(format!("roster request failed: {}", err));
                        link.send_message(Msg::RosterUnavailable);
                    }
                }
            });
        }
    }
}
