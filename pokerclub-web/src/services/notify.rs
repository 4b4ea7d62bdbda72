use std::collections::HashSet;

use yew_agent::{Agent, AgentLink, Context, Dispatched, HandlerId};

/// The visual style of a [`Notification`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Info,
    Success,
    Warning,
    Error,
}

impl Kind {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Info => "notification notification-info",
            Self::Success => "notification notification-success",
            Self::Warning => "notification notification-warning",
            Self::Error => "notification notification-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "fa-solid fa-circle-info",
            Self::Success => "fa-solid fa-circle-check",
            Self::Warning => "fa-solid fa-circle-exclamation",
            Self::Error => "fa-solid fa-circle-xmark",
        }
    }
}

/// A transient advisory toast. Never blocks any flow.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub text: String,
    pub kind: Kind,
}

/// Entry point for dispatching notifications from anywhere in the app.
pub struct Notify;

impl Notify {
    #[inline]
    pub fn info<T>(msg: T)
    where
        T: ToString,
    {
        Self::dispatch(msg, Kind::Info);
    }

    #[inline]
    pub fn success<T>(msg: T)
    where
        T: ToString,
    {
        Self::dispatch(msg, Kind::Success);
    }

    #[inline]
    pub fn warning<T>(msg: T)
    where
        T: ToString,
    {
        Self::dispatch(msg, Kind::Warning);
    }

    #[inline]
    #[allow(unused)]
    pub fn error<T>(msg: T)
    where
        T: ToString,
    {
        Self::dispatch(msg, Kind::Error);
    }

    fn dispatch<T>(msg: T, kind: Kind)
    where
        T: ToString,
    {
        NotificationBus::dispatcher().send(Notification {
            text: msg.to_string(),
            kind,
        });
    }
}

pub struct NotificationBus {
    link: AgentLink<Self>,
    subscribers: HashSet<HandlerId>,
}

impl Agent for NotificationBus {
    type Reach = Context<Self>;
    type Message = ();
    type Input = Notification;
    type Output = Notification;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            subscribers: HashSet::new(),
        }
    }

    fn update(&mut self, _msg: Self::Message) {}

    fn handle_input(&mut self, msg: Self::Input, _id: HandlerId) {
        for sub in self.subscribers.iter() {
            self.link.respond(*sub, msg.clone());
        }
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}
