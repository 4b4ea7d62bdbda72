use std::rc::Rc;

use pokerclub_api::tournaments::TournamentSnapshot;
use yew::{html, Callback, Component, Context, Html, Properties};

use super::{AnimatedCounter, Button, CapacityBar};

/// The card for the upcoming tournament: metadata, seat occupancy and the
/// registration control.
pub struct TournamentCard;

impl Component for TournamentCard {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = &ctx.props().snapshot;

        let register = if ctx.props().registered {
            html! {
                <Button title="You are registered" classes="button button-registered" disabled=true>
                    { "You are registered" }
                </Button>
            }
        } else {
            let onclick = ctx.props().on_register.clone();

            html! {
                <Button title="Register for the tournament" classes="button button-register" {onclick}>
                    { "Register" }
                </Button>
            }
        };

        html! {
            <section class="tournament-card">
                <h2 class="tournament-title">{ snapshot.title.clone() }</h2>
                <span class="tournament-date">
                    { format!("{} / {}", snapshot.date, snapshot.time) }
                </span>
                <p class="tournament-description">{ snapshot.description.clone() }</p>

                <div class="tournament-seats">
                    <AnimatedCounter value={snapshot.registered_count} />
                    <span class="tournament-seats-total">
                        { format!(" / {}", snapshot.total_seats) }
                    </span>
                </div>
                <CapacityBar fill={snapshot.fill_percent()} />

                <div class="tournament-meta">
                    <span class="tournament-buyin">{ snapshot.buy_in.clone() }</span>
                    <span class="tournament-prize">{ snapshot.prize_pool.clone() }</span>
                </div>

                <div class="tournament-actions">
                    { register }
                    <Button title="Tournament details" onclick={ctx.props().on_details.clone()}>
                        { "Details" }
                    </Button>
                </div>
            </section>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub snapshot: Rc<TournamentSnapshot>,
    /// Whether this session already claimed a seat. Disables the register
    /// control.
    pub registered: bool,
    pub on_register: Callback<()>,
    pub on_details: Callback<()>,
}
