use yew::context::ContextProvider;
use yew::prelude::*;

use super::Provider;
use crate::api::Client;
use crate::config;

/// Provides the fallback-substituting [`Client`] to the component tree.
pub struct ClientProvider {
    client: Client,
}

impl Component for ClientProvider {
    type Message = ();
    type Properties = Properties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            client: Client::new(config::get().api_base.as_str()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<Client> context={self.client.clone()}>
                { for ctx.props().children.iter() }
            </ContextProvider<Client>>
        }
    }
}

impl Provider<Client> for ClientProvider {
    fn get<C>(ctx: &Context<C>) -> Client
    where
        C: Component,
    {
        let (client, _) = ctx
            .link()
            .context::<Client>(Callback::noop())
            .expect("no ClientProvider given");

        client
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Properties {
    pub children: Children,
}
