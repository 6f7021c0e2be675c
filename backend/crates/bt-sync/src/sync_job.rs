use async_trait::async_trait;

/// A unit of periodic work driven by [`SyncScheduler`](crate::SyncScheduler).
///
/// `run` has no observable return: implementations contain and report their
/// own failures.
#[async_trait]
pub trait SyncJob: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self);
}
