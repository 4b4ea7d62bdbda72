use yew::{html, Callback, Component, Context, Html, Properties};

/// The destinations reachable from the bottom navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Main,
    Rating,
    Tournaments,
    Profile,
}

impl Page {
    fn label(&self) -> &'static str {
        match self {
            Self::Main => "Main",
            Self::Rating => "Rating",
            Self::Tournaments => "Tournaments",
            Self::Profile => "Profile",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Main => "fa-solid fa-house",
            Self::Rating => "fa-solid fa-ranking-star",
            Self::Tournaments => "fa-solid fa-trophy",
            Self::Profile => "fa-solid fa-user",
        }
    }
}

#[derive(Debug)]
pub struct Navbar;

impl Component for Navbar {
    type Message = Page;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        ctx.props().on_select.emit(msg);
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let items: Html = [Page::Main, Page::Rating, Page::Tournaments, Page::Profile]
            .into_iter()
            .map(|page| {
                let class = if page == ctx.props().active {
                    "nav-item nav-item-active"
                } else {
                    "nav-item"
                };

                let onclick = ctx.link().callback(move |_| page);

                html! {
                    <button {class} {onclick}>
                        <i aria-hidden="true" class={page.icon()}></i>
                        <span>{ page.label() }</span>
                    </button>
                }
            })
            .collect();

        html! {
            <nav class="navbar">
                { items }
            </nav>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub active: Page,
    pub on_select: Callback<Page>,
}
