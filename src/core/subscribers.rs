//! Snapshot observers

use super::GameUiState;

/// Handle returned by [`Subscribers::add`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<'a> = Box<dyn FnMut(&GameUiState) + 'a>;

/// Registered snapshot observers, notified in subscription order
#[derive(Default)]
pub struct Subscribers<'a> {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback<'a>)>,
}

impl<'a> Subscribers<'a> {
    pub fn add(&mut self, callback: impl FnMut(&GameUiState) + 'a) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub, _)| *sub != id);
        self.callbacks.len() != before
    }

    pub fn notify(&mut self, state: &GameUiState) {
        for (_, callback) in &mut self.callbacks {
            callback(state);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl std::fmt::Debug for Subscribers<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
