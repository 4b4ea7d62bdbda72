//! Compile-time constants for configuration
use std::time::Duration;

pub const TITLE_BASE: &str = "LEBROOM Poker Club";

/// How often the tournament and rating snapshots are refetched.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Notification toasts dismiss themselves after this long.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(3);

/// Delay between dismissing the register modal and showing the confirmation.
pub const MODAL_SWAP_DELAY: Duration = Duration::from_millis(300);

pub const SUPPORT_URL: &str = "https://t.me/lebroomsupport";
