use autoresearch_types::{ResearchEvent, ResearchOutcome, ResearchSession, RunId};

/// The single live session shown by a view.
///
/// Events are applied only when they belong to the most recently started
/// run. Snapshots from a superseded run are dropped, so a slow earlier run
/// can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<RunId>,
    session: Option<ResearchSession>,
    outcome: Option<ResearchOutcome>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `run` the live run. The previous session is discarded.
    pub fn begin(&mut self, run: RunId) {
        if self.current.is_some_and(|current| run < current) {
            tracing::debug!(%run, "Ignoring begin for an older run");
            return;
        }
        self.current = Some(run);
        self.session = None;
        self.outcome = None;
    }

    /// Apply an event, returning whether it replaced the live snapshot.
    pub fn apply(&mut self, event: ResearchEvent) -> bool {
        let run = event.run();
        match self.current {
            Some(current) if run < current => {
                tracing::debug!(%run, %current, event = event.name(), "Discarding stale event");
                return false;
            }
            Some(current) if run > current => self.begin(run),
            None => self.begin(run),
            Some(_) => {}
        }

        if let ResearchEvent::Finished { outcome, session, .. } = event {
            self.outcome = Some(outcome);
            self.session = Some(session);
        } else {
            self.session = Some(event.into_session());
        }
        true
    }

    pub fn current_run(&self) -> Option<RunId> {
        self.current
    }

    pub fn session(&self) -> Option<&ResearchSession> {
        self.session.as_ref()
    }

    pub fn outcome(&self) -> Option<&ResearchOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_loading)
    }

    /// Report download is offered only once the session is terminal.
    pub fn can_download(&self) -> bool {
        self.session.as_ref().is_some_and(ResearchSession::is_terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(run: u64, topic: &str) -> ResearchEvent {
        ResearchEvent::Finished {
            run: RunId(run),
            outcome: ResearchOutcome::Completed,
            session: ResearchSession::loading(topic).finish(Vec::new(), "r".into(), Vec::new(), None),
            duration_ms: 1,
        }
    }

    #[test]
    fn test_stale_events_are_discarded() {
        let mut store = SessionStore::new();
        store.begin(RunId(1));
        store.begin(RunId(2));

        assert!(!store.apply(finished(1, "old")));
        assert!(store.session().is_none());

        assert!(store.apply(finished(2, "new")));
        assert_eq!(store.session().unwrap().topic, "new");
        assert_eq!(store.outcome(), Some(&ResearchOutcome::Completed));
    }

    #[test]
    fn test_download_only_when_terminal() {
        let mut store = SessionStore::new();
        assert!(!store.can_download());

        store.apply(ResearchEvent::started(RunId(1), ResearchSession::loading("t")));
        assert!(store.is_busy());
        assert!(!store.can_download());

        store.apply(finished(1, "t"));
        assert!(!store.is_busy());
        assert!(store.can_download());
    }

    #[test]
    fn test_newer_event_supersedes_current_run() {
        let mut store = SessionStore::new();
        store.apply(finished(1, "first"));
        store.apply(ResearchEvent::started(RunId(3), ResearchSession::loading("third")));

        assert_eq!(store.current_run(), Some(RunId(3)));
        assert!(store.outcome().is_none());
        assert!(!store.apply(finished(2, "second")));
    }
}
