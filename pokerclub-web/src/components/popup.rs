use web_sys::KeyboardEvent;
use yew::prelude::*;

/// A modal dialog with an overlay, a titled header and a close button.
pub struct Popup;

impl Component for Popup {
    type Message = Message;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Close => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_close = ctx.link().callback(|_| Message::Close);

        // Close the modal with the Escape key.
        let onkeydown = ctx
            .link()
            .batch_callback(|e: KeyboardEvent| match e.code().as_str() {
                "Escape" => Some(Message::Close),
                _ => None,
            });

        html! {
            <div tabindex="-1" class="modal-overlay" onkeydown={onkeydown}>
                <div class="modal">
                    <div class="modal-header">
                        <h3>{ ctx.props().title.clone() }</h3>
                        <button class="modal-close" onclick={on_close} title="Close" disabled=false>
                            { "\u{00D7}" }
                        </button>
                    </div>
                    <div class="modal-body">
                        { for ctx.props().children.iter() }
                    </div>
                </div>
            </div>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub children: Children,
    pub title: String,
    pub on_close: Callback<()>,
}

pub enum Message {
    Close,
}
