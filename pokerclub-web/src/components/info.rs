use yew::{html, Callback, Component, Context, Html, Properties};

use super::popup::Popup;

/// Static information about the club.
pub struct ClubInfoModal;

impl Component for ClubInfoModal {
    type Message = ();
    type Properties = CloseProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <Popup title="About the club" on_close={ctx.props().on_close.clone()}>
                <p>
                    { "LEBROOM is a private poker club hosting weekly live \
                       tournaments with a guaranteed prize pool." }
                </p>
                <p>
                    { "Seats are limited. Register through this app and your \
                       place is reserved until the tournament starts." }
                </p>
                <p>
                    { "Season points are awarded at every tournament and drive \
                       the club rating." }
                </p>
            </Popup>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct CloseProps {
    pub on_close: Callback<()>,
}

const FAQ: &[(&str, &str)] = &[
    (
        "How do I register for a tournament?",
        "Pick the upcoming tournament on the main screen and press Register.",
    ),
    (
        "What is the buy-in?",
        "The buy-in is shown on the tournament card. The prize pool is guaranteed.",
    ),
    (
        "How are rating points awarded?",
        "Points are awarded at every tournament based on your finishing position.",
    ),
    (
        "Can I cancel my registration?",
        "Contact support and we will free your seat.",
    ),
];

/// Frequently asked questions. At most one item is expanded at a time.
pub struct FaqModal {
    open: Option<usize>,
}

impl Component for FaqModal {
    type Message = Message;
    type Properties = CloseProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { open: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Toggle(index) => {
                self.open = if self.open == Some(index) {
                    None
                } else {
                    Some(index)
                };

                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let items: Html = FAQ
            .iter()
            .enumerate()
            .map(|(index, (question, answer))| {
                let onclick = ctx.link().callback(move |_| Message::Toggle(index));

                let (class, answer) = if self.open == Some(index) {
                    ("faq-item faq-item-open", html! { <p class="faq-answer">{ *answer }</p> })
                } else {
                    ("faq-item", html! {})
                };

                html! {
                    <div {class}>
                        <button class="faq-question" {onclick}>{ *question }</button>
                        { answer }
                    </div>
                }
            })
            .collect();

        html! {
            <Popup title="Q&A" on_close={ctx.props().on_close.clone()}>
                { items }
            </Popup>
        }
    }
}

pub enum Message {
    Toggle(usize),
}
