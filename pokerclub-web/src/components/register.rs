use std::rc::Rc;

use pokerclub_api::tournaments::TournamentSnapshot;
use yew::{html, Callback, Component, Context, Html, Properties};

use super::popup::Popup;
use super::Button;

/// The confirmation dialog shown before a seat is claimed.
pub struct RegisterModal;

impl Component for RegisterModal {
    type Message = ();
    type Properties = RegisterProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = &ctx.props().snapshot;

        html! {
            <Popup title="Tournament registration" on_close={ctx.props().on_close.clone()}>
                <div class="register-summary">
                    <div class="register-row">
                        <span>{ "Tournament" }</span>
                        <span>{ snapshot.title.clone() }</span>
                    </div>
                    <div class="register-row">
                        <span>{ "Starts" }</span>
                        <span>{ format!("{} at {}", snapshot.date, snapshot.time) }</span>
                    </div>
                    <div class="register-row">
                        <span>{ "Free seats" }</span>
                        <span>{ snapshot.free_seats() }</span>
                    </div>
                    <div class="register-row">
                        <span>{ "Buy-in" }</span>
                        <span>{ snapshot.buy_in.clone() }</span>
                    </div>
                </div>

                <Button
                    title="Confirm registration"
                    classes="button button-confirm"
                    onclick={ctx.props().on_confirm.clone()}
                >
                    { "Confirm registration" }
                </Button>
            </Popup>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct RegisterProps {
    pub snapshot: Rc<TournamentSnapshot>,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
}

/// Shown after a successful registration, with the entrant's queue position.
pub struct SuccessModal;

impl Component for SuccessModal {
    type Message = ();
    type Properties = SuccessProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = &ctx.props().snapshot;

        html! {
            <Popup title="You are in!" on_close={ctx.props().on_close.clone()}>
                <div class="success-position">{ format!("#{}", ctx.props().position) }</div>
                <p class="success-message">
                    { format!("You are registered for \"{}\"", snapshot.title) }
                </p>
                <p class="success-date">
                    { format!("{} at {}", snapshot.date, snapshot.time) }
                </p>

                <Button title="Close" classes="button button-confirm" onclick={ctx.props().on_close.clone()}>
                    { "Got it" }
                </Button>
            </Popup>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct SuccessProps {
    pub snapshot: Rc<TournamentSnapshot>,
    pub position: u64,
    pub on_close: Callback<()>,
}
