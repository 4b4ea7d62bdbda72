//! The tournament registration state transition.
//!
//! The transition is a pure function of the user identity, the session state
//! and the current snapshot; rendering is a projection of its output and
//! happens elsewhere.

use pokerclub_api::tournaments::TournamentSnapshot;
use pokerclub_api::users::User;

use thiserror::Error;

/// The session-local registration state.
///
/// There is no reverse transition: once `Registered`, a session stays
/// registered until reload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RegistrationState {
    #[default]
    NotRegistered,
    Registered {
        position: u64,
    },
}

impl RegistrationState {
    #[inline]
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered { .. })
    }
}

/// The successful outcome of a registration.
#[derive(Clone, Debug, PartialEq)]
pub struct Registration {
    /// The snapshot with the new seat claimed.
    pub snapshot: TournamentSnapshot,
    /// The 1-based queue position of the new entrant.
    pub position: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// No identity is known. The caller must prompt for a platform sign-in
    /// instead.
    #[error("sign in through Telegram to register")]
    IdentityRequired,
    /// This session already claimed its seat.
    #[error("you are already registered for this tournament")]
    AlreadyRegistered,
    /// Every seat is taken.
    #[error("the tournament is full")]
    TournamentFull,
}

/// Claims one seat in `snapshot` for `user`.
///
/// On success the returned snapshot has `registered_count` incremented by
/// exactly one; `registered_count <= total_seats` still holds afterwards.
/// The caller owns committing the result to its state.
pub fn register(
    user: Option<&User>,
    state: &RegistrationState,
    snapshot: &TournamentSnapshot,
) -> Result<Registration, RegistrationError> {
    if user.is_none() {
        return Err(RegistrationError::IdentityRequired);
    }

    if state.is_registered() {
        return Err(RegistrationError::AlreadyRegistered);
    }

    if snapshot.is_full() {
        return Err(RegistrationError::TournamentFull);
    }

    let mut snapshot = snapshot.clone();
    snapshot.registered_count += 1;

    let position = snapshot.registered_count;

    Ok(Registration { snapshot, position })
}

#[cfg(test)]
mod tests {
    use pokerclub_api::id::UserId;
    use pokerclub_api::tournaments::TournamentSnapshot;
    use pokerclub_api::users::User;

    use super::{register, RegistrationError, RegistrationState};

    fn user() -> User {
        User {
            id: UserId(441537),
            first_name: String::from("Ivan"),
            last_name: None,
            username: None,
        }
    }

    fn snapshot(registered_count: u64, total_seats: u64) -> TournamentSnapshot {
        TournamentSnapshot {
            registered_count,
            total_seats,
            ..TournamentSnapshot::fallback()
        }
    }

    #[test]
    fn test_register_without_identity() {
        let state = RegistrationState::default();
        let snapshot = snapshot(72, 100);

        let err = register(None, &state, &snapshot).unwrap_err();
        assert_eq!(err, RegistrationError::IdentityRequired);
        assert_eq!(snapshot.registered_count, 72);
        assert!(!state.is_registered());
    }

    #[test]
    fn test_register_claims_next_seat() {
        let user = user();
        let state = RegistrationState::default();

        let outcome = register(Some(&user), &state, &snapshot(72, 100)).unwrap();
        assert_eq!(outcome.snapshot.registered_count, 73);
        assert_eq!(outcome.position, 73);
        assert_eq!(outcome.snapshot.fill_percent(), 73.0);
    }

    #[test]
    fn test_register_twice_is_rejected() {
        let user = user();
        let state = RegistrationState::Registered { position: 73 };

        // The register control renders disabled whenever `is_registered`.
        assert!(state.is_registered());

        let err = register(Some(&user), &state, &snapshot(73, 100)).unwrap_err();
        assert_eq!(err, RegistrationError::AlreadyRegistered);
    }

    #[test]
    fn test_register_full_tournament() {
        let user = user();
        let state = RegistrationState::default();

        let err = register(Some(&user), &state, &snapshot(100, 100)).unwrap_err();
        assert_eq!(err, RegistrationError::TournamentFull);
    }

    #[test]
    fn test_register_last_seat_holds_invariant() {
        let user = user();
        let state = RegistrationState::default();

        let outcome = register(Some(&user), &state, &snapshot(99, 100)).unwrap();
        assert_eq!(outcome.snapshot.registered_count, 100);
        assert!(outcome.snapshot.registered_count <= outcome.snapshot.total_seats);
        assert!(outcome.snapshot.is_full());
    }
}
