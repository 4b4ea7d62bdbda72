use yew::prelude::*;

use crate::components::providers::ClientProvider;
use crate::components::NotificationLog;
use crate::home::Home;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ClientProvider>
                <div class="app-container">
                    <NotificationLog />
                    <Home />
                </div>
            </ClientProvider>
        }
    }
}
