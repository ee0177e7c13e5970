//! Bounded concurrent fan-out over a working set
//!
//! Every report repeats the same pattern: take N independent resources, call
//! a per-resource fetch for each with bounded concurrency, and pair each
//! result back with the resource that produced it. `fan_out` is that pattern,
//! with results yielded in input order no matter when each fetch completes.

use std::future::Future;

use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;

use crate::error::Result;

/// Concurrency bound sized to the host, capped to keep the API polite
pub fn default_concurrency() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4);
    (cpus + 4).min(32)
}

/// Apply `f` to every item with at most `limit` fetches in flight
///
/// Returns `(item, output)` pairs in the same order as the input, regardless
/// of completion order. Each completion ticks the progress bar. The first
/// error aborts the fan-out and is returned; dropping the stream cancels any
/// in-flight siblings, so no partial results escape.
pub async fn fan_out<T, U, F, Fut>(
    items: Vec<T>,
    limit: usize,
    progress: Option<&ProgressBar>,
    f: F,
) -> Result<Vec<(T, U)>>
where
    T: Clone,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<U>>,
{
    let total = items.len();
    let tagged = items.into_iter().enumerate().map(|(index, item)| {
        let fut = f(item.clone());
        async move { (index, item, fut.await) }
    });

    let mut in_flight = stream::iter(tagged).buffer_unordered(limit.max(1));
    let mut completed: Vec<(usize, T, U)> = Vec::with_capacity(total);

    while let Some((index, item, result)) = in_flight.next().await {
        if let Some(bar) = progress {
            bar.inc(1);
        }
        completed.push((index, item, result?));
    }
    drop(in_flight);

    // Completion order is arbitrary; restore input order
    completed.sort_by_key(|(index, _, _)| *index);

    Ok(completed
        .into_iter()
        .map(|(_, item, output)| (item, output))
        .collect())
}

/// Fan-out variant for per-item collection results, flattened into one
/// sequence
///
/// Used when each item contributes a list (e.g. the add-ons of every app) and
/// the caller wants the union, still in input order.
pub async fn fan_out_flatten<T, U, F, Fut>(
    items: Vec<T>,
    limit: usize,
    progress: Option<&ProgressBar>,
    f: F,
) -> Result<Vec<U>>
where
    T: Clone,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<Vec<U>>>,
{
    let pairs = fan_out(items, limit, progress, f).await?;
    Ok(pairs.into_iter().flat_map(|(_, list)| list).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuditError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn test_default_concurrency_bounds() {
        let limit = default_concurrency();
        assert!(limit >= 5);
        assert!(limit <= 32);
    }

    #[tokio::test]
    async fn test_results_in_input_order_despite_latency() {
        // Later items finish first; output order must still match input
        let items: Vec<u64> = (0..20).collect();
        let pairs = fan_out(items.clone(), 8, None, |n| async move {
            tokio::time::sleep(Duration::from_millis(40 - n)).await;
            Ok(n * 10)
        })
        .await
        .unwrap();

        let inputs: Vec<u64> = pairs.iter().map(|(n, _)| *n).collect();
        assert_eq!(inputs, items);
        for (n, out) in pairs {
            assert_eq!(out, n * 10);
        }
    }

    #[tokio::test]
    async fn test_exactly_one_result_per_item() {
        let items = vec!["a", "b", "c", "d", "e"];
        let pairs = fan_out(items.clone(), 2, None, |s| async move {
            Ok(s.to_uppercase())
        })
        .await
        .unwrap();

        assert_eq!(pairs.len(), items.len());
        assert_eq!(pairs[0], ("a", "A".to_string()));
        assert_eq!(pairs[4], ("e", "E".to_string()));
    }

    #[tokio::test]
    async fn test_empty_input() {
        let pairs = fan_out(Vec::<u32>::new(), 4, None, |n| async move { Ok(n) })
            .await
            .unwrap();
        assert!(pairs.is_empty());
    }

    #[tokio::test]
    async fn test_concurrency_is_bounded() {
        let running = std::sync::Arc::new(AtomicUsize::new(0));
        let peak = std::sync::Arc::new(AtomicUsize::new(0));

        let running_ref = running.clone();
        let peak_ref = peak.clone();
        fan_out((0..32).collect::<Vec<u32>>(), 4, None, move |_| {
            let running = running_ref.clone();
            let peak = peak_ref.clone();
            async move {
                let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5)).await;
                running.fetch_sub(1, Ordering::SeqCst);
                Ok(())
            }
        })
        .await
        .unwrap();

        assert!(peak.load(Ordering::SeqCst) <= 4);
    }

    #[tokio::test]
    async fn test_first_error_aborts() {
        let result = fan_out((0..10).collect::<Vec<u32>>(), 4, None, |n| async move {
            if n == 3 {
                Err(AuditError::Api {
                    status: 500,
                    message: "boom".to_string(),
                })
            } else {
                Ok(n)
            }
        })
        .await;

        match result.unwrap_err() {
            AuditError::Api { status, .. } => assert_eq!(status, 500),
            other => panic!("Expected AuditError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_flatten_union_ignores_completion_order() {
        let apps = vec![("a1", 30u64), ("a2", 10u64)];
        let flattened = fan_out_flatten(apps, 2, None, |(app, delay)| async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(match app {
                "a1" => vec!["x", "y"],
                _ => vec!["z"],
            })
        })
        .await
        .unwrap();

        // a2 completes first, but a1's items still come first
        assert_eq!(flattened, vec!["x", "y", "z"]);
    }

    #[tokio::test]
    async fn test_flatten_empty_lists() {
        let flattened = fan_out_flatten(vec![1, 2, 3], 2, None, |_| async move {
            Ok(Vec::<u32>::new())
        })
        .await
        .unwrap();
        assert!(flattened.is_empty());
    }
}
