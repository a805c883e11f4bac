/// Message dispatch over the snapshot history
///
/// Owns the time-travel history and the number of fetches in flight.
/// Every message is applied to the snapshot on screen and the result is
/// recorded as the new live snapshot.

use super::data::{Model, Status};
use super::history::History;
use super::update::{update, Cmd, Msg};

#[derive(Debug)]
pub struct Session {
    history: History<Model>,
    /// Fetch commands issued whose result has not come back yet
    in_flight: usize,
    batch_size: u8,
}

impl Session {
    pub fn new(initial: Model, history_limit: usize, batch_size: u8) -> Self {
        Self {
            history: History::new(initial, Some(history_limit)),
            in_flight: 0,
            batch_size,
        }
    }

    /// Apply a message and return the command to run
    pub fn dispatch(&mut self, msg: Msg) -> Cmd {
        let label = msg.label();

        let mut base = self.history.current().state.clone();
        // A snapshot taken mid-fetch is stale once every fetch has answered
        if base.status.is_loading() && self.in_flight == 0 {
            base.status = Status::Idle;
        }

        if matches!(msg, Msg::FetchSucceeded(_) | Msg::FetchFailed(_)) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }

        let (next, cmd) = update(&base, msg, self.batch_size);

        if matches!(cmd, Cmd::Fetch { .. }) {
            self.in_flight += 1;
        }

        self.history.record(next, label);
        cmd
    }

    pub fn model(&self) -> &Model {
        &self.history.current().state
    }

    pub fn history(&self) -> &History<Model> {
        &self.history
    }

    pub fn travel_to(&mut self, index: usize) {
        self.history.travel_to(index);
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{Animal, PetImage};

    fn pet(id: &str) -> PetImage {
        PetImage {
            id: id.to_string(),
            url: format!("https://cdn2.thecatapi.com/images/{id}.jpg"),
        }
    }

    fn session() -> Session {
        Session::new(Model::new(Animal::Cat), 50, 1)
    }

    #[test]
    fn test_fetch_round_trip_counts_in_flight() {
        let mut session = session();

        let cmd = session.dispatch(Msg::Fetch);
        assert_eq!(cmd, Cmd::Fetch { animal: Animal::Cat, limit: 1 });
        assert_eq!(session.in_flight(), 1);
        assert_eq!(session.model().status, Status::Loading);

        session.dispatch(Msg::FetchSucceeded(vec![pet("a")]));
        assert_eq!(session.in_flight(), 0);
        assert_eq!(session.model().status, Status::Success);
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_action_from_stale_loading_snapshot_is_not_loading() {
        let mut session = session();
        session.dispatch(Msg::Fetch);
        session.dispatch(Msg::FetchSucceeded(vec![pet("a"), pet("b")]));

        // Back to the snapshot recorded right after the fetch started
        session.travel_to(1);
        assert_eq!(session.model().status, Status::Loading);

        session.dispatch(Msg::RemoveLast);

        assert!(session.history().is_live());
        assert_eq!(session.model().status, Status::Idle);
        assert!(session.model().images.is_empty());
    }

    #[test]
    fn test_loading_kept_while_fetch_in_flight() {
        let mut session = session();
        session.dispatch(Msg::Fetch);
        session.dispatch(Msg::SelectAnimal(Animal::Dog));

        assert_eq!(session.in_flight(), 1);
        assert_eq!(session.model().status, Status::Loading);
        assert_eq!(session.model().animal, Animal::Dog);
    }

    #[test]
    fn test_failure_releases_in_flight() {
        let mut session = session();
        session.dispatch(Msg::Fetch);
        session.dispatch(Msg::FetchFailed("offline".into()));
        assert_eq!(session.in_flight(), 0);

        session.travel_to(1);
        session.dispatch(Msg::RemoveAll);
        assert_eq!(session.model().status, Status::Idle);
    }

    #[test]
    fn test_late_result_does_not_underflow() {
        let mut session = session();
        session.dispatch(Msg::FetchFailed("late".into()));
        assert_eq!(session.in_flight(), 0);
    }
}
