use std::rc::Rc;

use pokerclub_api::rating::{Medal, Player};
use yew::{html, Component, Context, Html, Properties};

/// The season leaderboard. Rows are read-only; the top three ranks carry a
/// medal marker.
pub struct RatingList;

impl Component for RatingList {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let players = &ctx.props().players;

        if players.is_empty() {
            return html! {
                <div class="rating-empty">
                    <p>{ "The rating is empty so far" }</p>
                    <p>{ "Become the first tournament entrant!" }</p>
                </div>
            };
        }

        let rows: Html = players
            .iter()
            .enumerate()
            .map(|(index, player)| {
                let rank = index + 1;
                let medal = Medal::for_rank(rank)
                    .map(|medal| medal.to_string())
                    .unwrap_or_default();

                html! {
                    <div class="rating-item">
                        <div class="rating-rank">{ rank }</div>
                        <div class="rating-player">
                            <div class="rating-name">{ player.name.clone() }</div>
                            <div class="rating-stats">
                                <span>{ format!("{} points", player.points) }</span>
                                <span>{ format!("{} tournaments", player.tournaments) }</span>
                            </div>
                        </div>
                        <div class="rating-medal">{ medal }</div>
                    </div>
                }
            })
            .collect();

        html! {
            <div class="rating-list">
                { rows }
            </div>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub players: Rc<Vec<Player>>,
}
