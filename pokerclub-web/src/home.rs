use std::rc::Rc;

use chrono::Utc;
use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use gloo_timers::future::sleep;
use yew::{html, Component, Context, Html};

use pokerclub_api::bridge::RegistrationNotice;
use pokerclub_api::rating::Player;
use pokerclub_api::tournaments::TournamentSnapshot;
use pokerclub_api::users::User;

use crate::components::info::{ClubInfoModal, FaqModal};
use crate::components::profile::ProfileModal;
use crate::components::providers::{ClientProvider, Provider};
use crate::components::register::{RegisterModal, SuccessModal};
use crate::components::{Button, Navbar, Page, RatingList, TournamentCard};
use crate::consts::{MODAL_SWAP_DELAY, REFRESH_INTERVAL, SUPPORT_URL};
use crate::layout;
use crate::registration::{self, RegistrationError, RegistrationState};
use crate::services::notify::Notify;
use crate::telegram::{self, HapticKind};
use crate::utils::Loadable;

/// The single page of the app.
///
/// All mutable state lives here; child components receive projections of it
/// and report back through callbacks.
pub struct Home {
    snapshot: Loadable<Rc<TournamentSnapshot>>,
    players: Loadable<Rc<Vec<Player>>>,
    user: Option<User>,
    registration: RegistrationState,
    modal: Modal,
    page: Page,
    // Dropped with the component, so no callback outlives the view.
    _refresh: Interval,
    _visibility: EventListener,
    _resize: EventListener,
}

impl Home {
    /// Kicks off both data loads. Stale responses simply overwrite newer
    /// state; the UI tolerates that.
    fn load(ctx: &Context<Self>) {
        let client = ClientProvider::get(ctx);

        {
            let client = client.clone();
            ctx.link()
                .send_future(async move { Message::UpdateTournament(client.tournament().await) });
        }

        ctx.link()
            .send_future(async move { Message::UpdateRating(client.rating().await) });
    }
}

impl Component for Home {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        telegram::expand();

        let user = if telegram::is_embedded() {
            let user = telegram::user();

            if user.is_some() {
                Notify::success("Welcome to LEBROOM!");
            }

            user
        } else {
            log::info!("Running outside the host platform, using a demo identity");

            Some(telegram::demo_user())
        };

        Self::load(ctx);

        // Refetch on a fixed interval for as long as the view lives.
        let refresh = {
            let link = ctx.link().clone();
            Interval::new(REFRESH_INTERVAL.as_millis() as u32, move || {
                link.send_message(Message::Refresh);
            })
        };

        let visibility = {
            let link = ctx.link().clone();
            EventListener::new(&gloo_utils::document(), "visibilitychange", move |_| {
                if !gloo_utils::document().hidden() {
                    link.send_message(Message::Refresh);
                }
            })
        };

        let resize = {
            let link = ctx.link().clone();
            EventListener::new(&gloo_utils::window(), "resize", move |_| {
                link.send_message(Message::Resize);
            })
        };

        layout::apply();

        Self {
            snapshot: Loadable::new(),
            players: Loadable::new(),
            user,
            registration: RegistrationState::default(),
            modal: Modal::None,
            page: Page::Main,
            _refresh: refresh,
            _visibility: visibility,
            _resize: resize,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::UpdateTournament(snapshot) => {
                self.snapshot.set(Rc::new(snapshot));
                true
            }
            Message::UpdateRating(players) => {
                self.players.set(Rc::new(players));
                true
            }
            Message::Refresh => {
                Self::load(ctx);
                false
            }
            Message::Resize => {
                layout::apply();
                false
            }
            Message::Open(modal) => {
                self.modal = modal;
                true
            }
            Message::Close => {
                self.modal = Modal::None;
                true
            }
            Message::ConfirmRegistration => self.confirm_registration(ctx),
            Message::Select(page) => {
                self.page = page;

                match page {
                    Page::Main => {}
                    Page::Rating => Notify::info("The full rating is coming soon"),
                    Page::Tournaments => Notify::info("The tournament list is coming soon"),
                    Page::Profile => {
                        if self.user.is_some() {
                            self.modal = Modal::Profile;
                        } else {
                            Notify::warning("Sign in through Telegram to access your profile");
                        }
                    }
                }

                true
            }
            Message::ShowDetails => {
                if let Some(snapshot) = self.snapshot.value() {
                    telegram::show_alert(&format!(
                        "{}\n{} at {}\nBuy-in: {}\nPrize pool: {}",
                        snapshot.title,
                        snapshot.date,
                        snapshot.time,
                        snapshot.buy_in,
                        snapshot.prize_pool
                    ));
                }

                false
            }
            Message::Support => {
                telegram::open_link(SUPPORT_URL);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let badge = match &self.user {
            Some(user) => html! {
                <div class="user-badge" title={user.display_name()}>{ user.initial() }</div>
            },
            None => html! {
                <div class="user-badge user-badge-anonymous" title="Not signed in">{ "?" }</div>
            },
        };

        let tournament = self.snapshot.render(|snapshot| {
            html! {
                <TournamentCard
                    snapshot={snapshot.clone()}
                    registered={self.registration.is_registered()}
                    on_register={ctx.link().callback(|_| Message::Open(Modal::Register))}
                    on_details={ctx.link().callback(|_| Message::ShowDetails)}
                />
            }
        });

        let rating = self.players.render(|players| {
            html! {
                <RatingList players={players.clone()} />
            }
        });

        html! {
            <>
                <header class="header">
                    <span class="club-mark">{ "LEBROOM" }</span>
                    { badge }
                </header>

                <main class="content">
                    { tournament }

                    <section class="rating">
                        <h2>{ "Season rating" }</h2>
                        { rating }
                        <a
                            class="rating-all"
                            onclick={ctx.link().callback(|_| Message::Select(Page::Rating))}
                        >
                            { "View full rating" }
                        </a>
                    </section>

                    <section class="actions">
                        <Button title="Contact support" onclick={ctx.link().callback(|_| Message::Support)}>
                            { "Support" }
                        </Button>
                        <Button title="About the club" onclick={ctx.link().callback(|_| Message::Open(Modal::ClubInfo))}>
                            { "About the club" }
                        </Button>
                        <Button title="Questions and answers" onclick={ctx.link().callback(|_| Message::Open(Modal::Faq))}>
                            { "Q&A" }
                        </Button>
                        <Button title="Your profile" onclick={ctx.link().callback(|_| Message::Select(Page::Profile))}>
                            { "My profile" }
                        </Button>
                    </section>
                </main>

                <Navbar active={self.page} on_select={ctx.link().callback(Message::Select)} />

                { self.active_modal(ctx) }
            </>
        }
    }
}

impl Home {
    fn confirm_registration(&mut self, ctx: &Context<Self>) -> bool {
        let snapshot = match self.snapshot.value() {
            Some(snapshot) => snapshot,
            None => return false,
        };

        match registration::register(self.user.as_ref(), &self.registration, snapshot) {
            Ok(outcome) => {
                let position = outcome.position;
                self.registration = RegistrationState::Registered { position };

                // The host notification is fire-and-forget: a delivery
                // failure never unwinds the local commit.
                if let Some(user) = &self.user {
                    let notice = RegistrationNotice::new(
                        user.id,
                        outcome.snapshot.title.clone(),
                        position,
                        Utc::now(),
                    );

                    if let Err(err) = telegram::send_data(&notice) {
                        log::warn!("Failed to notify the host bot: {}", err);
                    }
                }

                telegram::haptic_notification(HapticKind::Success);

                self.snapshot.set(Rc::new(outcome.snapshot));
                self.modal = Modal::None;

                ctx.link().send_future(async move {
                    sleep(MODAL_SWAP_DELAY).await;
                    Message::Open(Modal::Success { position })
                });

                Notify::success("You are registered for the tournament!");
            }
            Err(err @ RegistrationError::IdentityRequired) => {
                telegram::haptic_notification(HapticKind::Error);
                Notify::warning(err);
            }
            Err(err) => {
                telegram::haptic_notification(HapticKind::Warning);
                Notify::warning(err);
            }
        }

        true
    }

    fn active_modal(&self, ctx: &Context<Self>) -> Html {
        let on_close = ctx.link().callback(|_| Message::Close);

        match (&self.modal, self.snapshot.value()) {
            (Modal::Register, Some(snapshot)) => html! {
                <RegisterModal
                    snapshot={snapshot.clone()}
                    on_confirm={ctx.link().callback(|_| Message::ConfirmRegistration)}
                    {on_close}
                />
            },
            (Modal::Success { position }, Some(snapshot)) => html! {
                <SuccessModal snapshot={snapshot.clone()} position={*position} {on_close} />
            },
            (Modal::Profile, _) => match &self.user {
                Some(user) => html! {
                    <ProfileModal user={user.clone()} {on_close} />
                },
                None => html! {},
            },
            (Modal::ClubInfo, _) => html! {
                <ClubInfoModal {on_close} />
            },
            (Modal::Faq, _) => html! {
                <FaqModal {on_close} />
            },
            _ => html! {},
        }
    }
}

/// The modal currently shown, if any. Only one can be open at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Modal {
    None,
    Register,
    Success { position: u64 },
    Profile,
    ClubInfo,
    Faq,
}

pub enum Message {
    UpdateTournament(TournamentSnapshot),
    UpdateRating(Vec<Player>),
    Refresh,
    Resize,
    Open(Modal),
    Close,
    ConfirmRegistration,
    Select(Page),
    ShowDetails,
    Support,
}
