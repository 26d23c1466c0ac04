//! Shared utilities for use cases.
//!
//! Contains the cancellation helper used by producers to drop in-flight
//! backend calls once the dispatcher has moved on.

use crate::ports::capability::CapabilityError;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Run `future` unless `token` is cancelled first.
///
/// Returns `Err(CapabilityError::Cancelled)` if the token fires (or has
/// already fired); the future is dropped, aborting any request it owns.
pub(crate) async fn until_cancelled<T, F>(
    token: &CancellationToken,
    future: F,
) -> Result<T, CapabilityError>
where
    F: Future<Output = Result<T, CapabilityError>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(CapabilityError::Cancelled),
        result = future => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_completes_when_not_cancelled() {
        let token = CancellationToken::new();
        let result = until_cancelled(&token, async { Ok::<_, CapabilityError>(7) }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn test_already_cancelled_wins() {
        let token = CancellationToken::new();
        token.cancel();
        let result = until_cancelled(&token, async { Ok::<_, CapabilityError>(7) }).await;
        assert_eq!(result, Err(CapabilityError::Cancelled));
    }

    #[tokio::test]
    async fn test_cancel_interrupts_slow_future() {
        let token = CancellationToken::new();
        let trigger = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });
        let result = until_cancelled(&token, async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<_, CapabilityError>(())
        })
        .await;
        assert_eq!(result, Err(CapabilityError::Cancelled));
    }
}
