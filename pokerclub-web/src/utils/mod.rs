mod loadable;

pub use loadable::Loadable;
