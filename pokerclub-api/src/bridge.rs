//! The one-way outbound message to the host bot.

use crate::id::UserId;
use crate::Result;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The payload delivered to the host bridge after a successful registration.
///
/// Delivery is fire-and-forget; no response is awaited or validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationNotice {
    action: String,
    pub user_id: UserId,
    pub tournament: String,
    pub position: u64,
    pub timestamp: DateTime<Utc>,
}

impl RegistrationNotice {
    pub fn new<T>(user_id: UserId, tournament: T, position: u64, timestamp: DateTime<Utc>) -> Self
    where
        T: Into<String>,
    {
        Self {
            action: String::from("tournament_registered"),
            user_id,
            tournament: tournament.into(),
            position,
            timestamp,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::RegistrationNotice;
    use crate::id::UserId;

    #[test]
    fn test_notice_wire_shape() {
        let timestamp = Utc.with_ymd_and_hms(2026, 1, 22, 19, 0, 0).unwrap();
        let notice =
            RegistrationNotice::new(UserId(441537), "LEBROOM HIGH ROLLER", 73, timestamp);

        let value: serde_json::Value = serde_json::from_str(&notice.to_json().unwrap()).unwrap();

        assert_eq!(value["action"], "tournament_registered");
        assert_eq!(value["userId"], 441537);
        assert_eq!(value["tournament"], "LEBROOM HIGH ROLLER");
        assert_eq!(value["position"], 73);
        assert!(value["timestamp"].as_str().unwrap().starts_with("2026-01-22T19:00:00"));
    }
}
