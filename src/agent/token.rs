use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

#[derive(Clone, Debug, Default)]
/// A flag with which the owner of a search asks it to stop.
///
/// Clones share the flag, so the caller keeps one clone and hands another to the worker running the search.
/// The engine only ever reads it.
pub struct CancelToken
{
    stopped: Arc<AtomicBool>,
}

impl CancelToken
{
    /// Asks every search observing this token to stop at its next check.
    pub fn cancel(&self)
    {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Whether the token has been cancelled.
    pub fn is_cancelled(&self) -> bool
    {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Creates a fresh, uncancelled token.
    pub fn new() -> CancelToken
    {
        CancelToken::default()
    }
}
