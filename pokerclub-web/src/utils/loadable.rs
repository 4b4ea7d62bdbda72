use yew::{html, Html};

use crate::components::loader::Loader;

/// A slot for data that arrives after the first render.
///
/// The data loader substitutes fallback values on any fetch failure, so a
/// slot is either still loading or holds a value; there is no error state.
#[derive(Debug)]
pub struct Loadable<T> {
    value: Option<T>,
}

impl<T> Loadable<T> {
    /// Creates a new `Loadable` with no value yet.
    pub fn new() -> Self {
        Self { value: None }
    }

    /// Stores `value`, replacing whatever was there before.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Returns the value, if it arrived already.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Renders the value with `f`, or the loader while there is none.
    pub fn render<F>(&self, f: F) -> Html
    where
        F: FnOnce(&T) -> Html,
    {
        match &self.value {
            Some(value) => f(value),
            None => html! {
                <Loader />
            },
        }
    }
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Loadable;

    #[test]
    fn test_value() {
        let mut slot = Loadable::new();
        assert_eq!(slot.value(), None);

        slot.set(73_u64);
        assert_eq!(slot.value(), Some(&73));
    }
}
