use gloo_timers::future::sleep;
use yew::html;
use yew::html::{Component, Context, Html};
use yew_agent::{Bridge, Bridged};

use crate::consts::NOTIFICATION_TIMEOUT;
use crate::services::notify::{Notification, NotificationBus};

/// Renders the notification toasts. Toasts dismiss on click or expire on
/// their own.
pub struct NotificationLog {
    entries: Vec<(u64, Notification)>,
    next_id: u64,
    _producer: Box<dyn Bridge<NotificationBus>>,
}

impl Component for NotificationLog {
    type Properties = ();
    type Message = Message;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            _producer: NotificationBus::bridge(ctx.link().callback(Message::Append)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Append(notification) => {
                let id = self.next_id;
                self.next_id += 1;

                self.entries.push((id, notification));

                ctx.link().send_future(async move {
                    sleep(NOTIFICATION_TIMEOUT).await;
                    Message::Dismiss(id)
                });
            }
            Message::Dismiss(id) => {
                self.entries.retain(|(entry_id, _)| *entry_id != id);
            }
        }

        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let entries: Html = self
            .entries
            .iter()
            .map(|(id, notification)| {
                let id = *id;
                let onclick = ctx.link().callback(move |_| Message::Dismiss(id));

                html! {
                    <div class={notification.kind.class()} {onclick}>
                        <i aria-hidden="true" class={notification.kind.icon()}></i>
                        <span>{ notification.text.clone() }</span>
                    </div>
                }
            })
            .collect();

        html! {
            <div class="notification-container">
                { entries }
            </div>
        }
    }
}

#[derive(Debug)]
pub enum Message {
    Append(Notification),
    Dismiss(u64),
}
