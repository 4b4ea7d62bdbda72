use pokerclub_api::users::User;
use yew::{html, Callback, Component, Context, Html, Properties};

use super::popup::Popup;
use super::Button;

/// The profile dialog for the signed-in user.
///
/// Personal statistics are not served by the backend yet, so the grid shows
/// zeroes.
pub struct ProfileModal;

impl Component for ProfileModal {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let user = &ctx.props().user;

        let username = match &user.username {
            Some(username) => html! {
                <p class="profile-username">{ format!("@{}", username) }</p>
            },
            None => html! {},
        };

        html! {
            <Popup title="Your profile" on_close={ctx.props().on_close.clone()}>
                <div class="profile-avatar">{ user.initial() }</div>
                <h3 class="profile-name">{ user.display_name() }</h3>
                { username }
                <p class="profile-id">{ format!("ID: {}", user.id) }</p>

                <div class="profile-stats">
                    <div class="profile-stat">
                        <span class="profile-stat-value">{ 0 }</span>
                        <span class="profile-stat-label">{ "Tournaments" }</span>
                    </div>
                    <div class="profile-stat">
                        <span class="profile-stat-value">{ 0 }</span>
                        <span class="profile-stat-label">{ "Points" }</span>
                    </div>
                    <div class="profile-stat">
                        <span class="profile-stat-value">{ 0 }</span>
                        <span class="profile-stat-label">{ "Wins" }</span>
                    </div>
                </div>

                <Button title="Close" classes="button button-confirm" onclick={ctx.props().on_close.clone()}>
                    { "Got it" }
                </Button>
            </Popup>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub user: User,
    pub on_close: Callback<()>,
}
