use std::borrow::Cow;
use std::ops::Deref;

use pokerclub_api::rating::{Player, Rating};
use pokerclub_api::tournaments::TournamentSnapshot;
use pokerclub_api::Client as InnerClient;

/// A [`pokerclub_api::Client`] wrapper that substitutes the builtin fallback
/// data on any fetch failure.
///
/// The UI never sees a data-loading error: rendering something stale or
/// canned beats rendering nothing. Failures are still logged for diagnostics.
#[derive(Clone, Debug)]
pub struct Client {
    inner: InnerClient,
}

impl Client {
    #[inline]
    pub fn new<T>(base_url: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self {
            inner: InnerClient::new(base_url),
        }
    }

    /// Fetches the current [`TournamentSnapshot`]. Never fails.
    pub async fn tournament(&self) -> TournamentSnapshot {
        match self.inner.tournaments().get().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::warn!("Failed to fetch tournament, using fallback data: {}", err);
                TournamentSnapshot::fallback()
            }
        }
    }

    /// Fetches the current leaderboard rows. Never fails.
    pub async fn rating(&self) -> Vec<Player> {
        match self.inner.rating().get().await {
            Ok(rating) => rating.players,
            Err(err) => {
                log::warn!("Failed to fetch rating, using fallback data: {}", err);
                Rating::fallback().players
            }
        }
    }
}

impl Deref for Client {
    type Target = InnerClient;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}
