use yew::{html, Component, Context, Html, Properties};

/// The seat occupancy bar. Motion comes from the css width transition.
pub struct CapacityBar;

impl Component for CapacityBar {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let width = format!("width: {}%", ctx.props().fill);

        html! {
            <div class="progress-bar">
                <div class="progress-fill" style={width}></div>
            </div>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    /// Occupancy percentage in `0.0..=100.0`.
    pub fill: f64,
}
