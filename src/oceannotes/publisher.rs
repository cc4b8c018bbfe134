use crate::model::Note;

/// Handle returned by [`ChangePublisher::subscribe`], used to detach.
pub type SubscriptionId = u64;

type Callback = Box<dyn FnMut(&[Note])>;

/// Synchronous broadcast of collection snapshots to registered observers.
///
/// A plain callback list: no threads, no queues. The publisher caches the
/// most recent snapshot and replays it to each new subscriber immediately,
/// so an observer attaching between mutations still starts from current
/// state rather than waiting for the next change.
#[derive(Default)]
pub struct ChangePublisher {
    next_id: SubscriptionId,
    subscribers: Vec<(SubscriptionId, Callback)>,
    latest: Vec<Note>,
}

impl ChangePublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. The callback is invoked once immediately with
    /// the latest snapshot, then again after every subsequent publish.
    pub fn subscribe(&mut self, mut callback: impl FnMut(&[Note]) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        callback(&self.latest);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Detach an observer. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Cache `snapshot` as the latest state and fan it out to every
    /// subscriber, in subscription order.
    pub fn publish(&mut self, snapshot: &[Note]) {
        self.latest = snapshot.to_vec();
        for (_, callback) in &mut self.subscribers {
            callback(snapshot);
        }
    }

    /// The snapshot from the most recent publish.
    pub fn latest(&self) -> &[Note] {
        &self.latest
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
