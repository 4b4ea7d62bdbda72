use std::time::Duration;

use gloo_timers::future::sleep;
use yew::{html, Component, Context, Html, Properties};

/// Duration of a full counter animation.
const DURATION: Duration = Duration::from_millis(1000);
/// Frames per animation; one frame every ~16ms.
const FRAMES: u32 = 60;

/// A numeric display that moves to a new value with a linear interpolation
/// instead of jumping.
pub struct AnimatedCounter {
    start: u64,
    target: u64,
    frame: u32,
}

impl AnimatedCounter {
    fn displayed(&self) -> u64 {
        lerp(self.start, self.target, self.frame, FRAMES)
    }

    fn schedule_tick(&self, ctx: &Context<Self>) {
        ctx.link().send_future(async {
            sleep(DURATION / FRAMES).await;
            Message::Tick
        });
    }
}

impl Component for AnimatedCounter {
    type Message = Message;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let value = ctx.props().value;

        Self {
            start: value,
            target: value,
            frame: FRAMES,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>) -> bool {
        let value = ctx.props().value;

        if value != self.target {
            self.start = self.displayed();
            self.target = value;
            self.frame = 0;

            self.schedule_tick(ctx);
        }

        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Tick => {
                if self.frame >= FRAMES {
                    return false;
                }

                self.frame += 1;
                if self.frame < FRAMES {
                    self.schedule_tick(ctx);
                }

                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <span class="counter">{ self.displayed() }</span>
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Properties)]
pub struct Props {
    pub value: u64,
}

pub enum Message {
    Tick,
}

fn lerp(start: u64, end: u64, frame: u32, frames: u32) -> u64 {
    if frames == 0 || frame >= frames {
        return end;
    }

    let delta = end as i64 - start as i64;

    (start as i64 + delta * frame as i64 / frames as i64) as u64
}

#[cfg(test)]
mod tests {
    use super::lerp;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(72, 73, 0, 60), 72);
        assert_eq!(lerp(72, 73, 60, 60), 73);
        assert_eq!(lerp(0, 100, 0, 60), 0);
        assert_eq!(lerp(0, 100, 60, 60), 100);
    }

    #[test]
    fn test_lerp_midpoint() {
        assert_eq!(lerp(0, 100, 30, 60), 50);
        assert_eq!(lerp(10, 0, 30, 60), 5);
    }

    #[test]
    fn test_lerp_monotonic() {
        let mut last = 0;
        for frame in 0..=60 {
            let value = lerp(0, 73, frame, 60);
            assert!(value >= last);
            last = value;
        }
    }
}
