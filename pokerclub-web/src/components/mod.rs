pub mod button;
pub mod counter;
pub mod info;
pub mod loader;
pub mod navbar;
pub mod notifications;
pub mod popup;
pub mod profile;
pub mod progress;
pub mod providers;
pub mod rating;
pub mod register;
pub mod tournament;

pub use button::Button;
pub use counter::AnimatedCounter;
pub use navbar::{Navbar, Page};
pub use notifications::NotificationLog;
pub use progress::CapacityBar;
pub use rating::RatingList;
pub use tournament::TournamentCard;
