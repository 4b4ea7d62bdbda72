use crate::{Client, Result};

use serde::{Deserialize, Serialize};

/// The current known state of the upcoming tournament, as last fetched.
///
/// A snapshot is purely display state. It is replaced wholesale on every
/// fetch and never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSnapshot {
    pub title: String,
    pub date: String,
    pub time: String,
    pub total_seats: u64,
    pub registered_count: u64,
    pub buy_in: String,
    pub prize_pool: String,
    pub description: String,
}

impl TournamentSnapshot {
    /// Returns the number of still unclaimed seats.
    #[inline]
    pub fn free_seats(&self) -> u64 {
        self.total_seats.saturating_sub(self.registered_count)
    }

    /// Returns `true` if every seat is taken.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.registered_count >= self.total_seats
    }

    /// Returns the seat occupancy as a percentage in `0.0..=100.0`.
    pub fn fill_percent(&self) -> f64 {
        if self.total_seats == 0 {
            return 0.0;
        }

        (self.registered_count as f64 / self.total_seats as f64) * 100.0
    }

    /// The builtin snapshot used when the live endpoint cannot be reached.
    pub fn fallback() -> Self {
        Self {
            title: String::from("LEBROOM HIGH ROLLER"),
            date: String::from("22.01"),
            time: String::from("19:00"),
            total_seats: 100,
            registered_count: 72,
            buy_in: String::from("5 000 ₽"),
            prize_pool: String::from("500 000 ₽"),
            description: String::from(
                "Weekly tournament with a guaranteed prize pool",
            ),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct TournamentsClient<'a> {
    client: &'a Client,
}

impl<'a> TournamentsClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the current [`TournamentSnapshot`].
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or the body is not a valid
    /// snapshot.
    pub async fn get(&self) -> Result<TournamentSnapshot> {
        self.client.get("/tournament.json").await
    }
}

#[cfg(test)]
mod tests {
    use super::TournamentSnapshot;

    #[test]
    fn test_snapshot_from_wire() {
        let body = r#"{
            "title": "LEBROOM HIGH ROLLER",
            "date": "22.01",
            "time": "19:00",
            "totalSeats": 100,
            "registeredCount": 72,
            "buyIn": "5 000 ₽",
            "prizePool": "500 000 ₽",
            "description": "Weekly tournament with a guaranteed prize pool"
        }"#;

        let snapshot: TournamentSnapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.total_seats, 100);
        assert_eq!(snapshot.registered_count, 72);
        assert_eq!(snapshot.free_seats(), 28);
        assert!(!snapshot.is_full());
    }

    #[test]
    fn test_fill_percent() {
        let mut snapshot = TournamentSnapshot::fallback();

        snapshot.registered_count = 0;
        assert_eq!(snapshot.fill_percent(), 0.0);

        snapshot.registered_count = 72;
        assert_eq!(snapshot.fill_percent(), 72.0);

        snapshot.registered_count = 100;
        assert_eq!(snapshot.fill_percent(), 100.0);
    }

    #[test]
    fn test_fallback_within_capacity() {
        let snapshot = TournamentSnapshot::fallback();
        assert!(snapshot.total_seats > 0);
        assert!(snapshot.registered_count <= snapshot.total_seats);
    }
}
