//! Blast scheduling form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ScheduleBlastForm`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//!
//! The form itself does two things before the browser is allowed to submit
//! it: it gates submission on a fixed set of rules (`validate`), and it lets
//! the author preview the columns of the uploaded contact list and splice
//! them into the message template as `{column}` tokens (`preview`,
//! `placeholder`).

use yew::prelude::*;

mod helpers;
mod messages;
mod placeholder;
mod preview;
mod state;
mod update;
mod validate;
mod view;

pub use messages::Msg;
pub use state::ScheduleBlastForm;

impl Component for ScheduleBlastForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ScheduleBlastForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
