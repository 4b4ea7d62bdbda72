pub mod client;

pub use client::ClientProvider;

use yew::{Component, Context};

pub trait Provider<T> {
    /// Returns the context value `T` provided higher up the tree.
    fn get<C>(ctx: &Context<C>) -> T
    where
        C: Component;
}
