use std::future::Future;
use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    /// Awaits `action` and returns its result with the elapsed milliseconds
    pub async fn estimate_async<T, F: Future<Output = T>>(action: F) -> (T, u128) {
        let now = Instant::now();

        let result = action.await;

        (result, now.elapsed().as_millis())
    }
}
