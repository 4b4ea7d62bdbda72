use crate::id::PlayerId;
use crate::{Client, Result};

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// A single leaderboard row. Read-only; the club backend owns all values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub points: u64,
    pub tournaments: u64,
    pub wins: u64,
}

/// The leaderboard as served by the backend.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Rating {
    /// The builtin leaderboard used when the live endpoint cannot be reached.
    pub fn fallback() -> Self {
        let players = [
            ("Ivan Petrov", 2540, 15, 3),
            ("Alexey Smirnov", 2120, 12, 2),
            ("Maria Ivanova", 1980, 10, 1),
            ("Dmitry Kozlov", 1850, 8, 1),
            ("Anna Sidorova", 1720, 7, 0),
        ]
        .into_iter()
        .enumerate()
        .map(|(index, (name, points, tournaments, wins))| Player {
            id: PlayerId(index as u64 + 1),
            name: String::from(name),
            points,
            tournaments,
            wins,
        })
        .collect();

        Self { players }
    }
}

/// The medal shown next to the top three leaderboard ranks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Returns the medal for a 1-based rank, or `None` for ranks below the
    /// podium.
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Gold => "\u{1F947}",
            Self::Silver => "\u{1F948}",
            Self::Bronze => "\u{1F949}",
        }
    }
}

impl Display for Medal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.emoji())
    }
}

#[derive(Copy, Clone, Debug)]
pub struct RatingClient<'a> {
    client: &'a Client,
}

impl<'a> RatingClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the current [`Rating`].
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or the body is not a valid
    /// leaderboard.
    pub async fn get(&self) -> Result<Rating> {
        self.client.get("/rating.json").await
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_tokens, Token};

    use super::{Medal, Player, Rating};
    use crate::id::PlayerId;

    #[test]
    fn test_medal_for_rank() {
        assert_eq!(Medal::for_rank(1), Some(Medal::Gold));
        assert_eq!(Medal::for_rank(2), Some(Medal::Silver));
        assert_eq!(Medal::for_rank(3), Some(Medal::Bronze));
        assert_eq!(Medal::for_rank(4), None);
        assert_eq!(Medal::for_rank(100), None);
    }

    #[test]
    fn test_player_tokens() {
        let player = Player {
            id: PlayerId(1),
            name: String::from("Ivan Petrov"),
            points: 2540,
            tournaments: 15,
            wins: 3,
        };

        assert_tokens(
            &player,
            &[
                Token::Struct {
                    name: "Player",
                    len: 5,
                },
                Token::Str("id"),
                Token::U64(1),
                Token::Str("name"),
                Token::Str("Ivan Petrov"),
                Token::Str("points"),
                Token::U64(2540),
                Token::Str("tournaments"),
                Token::U64(15),
                Token::Str("wins"),
                Token::U64(3),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_rating_missing_players() {
        let rating: Rating = serde_json::from_str("{}").unwrap();
        assert!(rating.players.is_empty());
    }

    #[test]
    fn test_fallback_sorted_by_points() {
        let rating = Rating::fallback();

        assert_eq!(rating.players.len(), 5);
        assert!(rating
            .players
            .windows(2)
            .all(|pair| pair[0].points >= pair[1].points));
    }
}
