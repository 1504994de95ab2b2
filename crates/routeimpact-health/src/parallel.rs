//! Parallel processing utilities for portfolio evaluation.
//!
//! Provides conditional parallel iteration based on configuration
//! and collection size. Uses rayon when the `parallel` feature is enabled.
//! Output order always matches input order.

use crate::config::HealthConfig;

/// Maps a function over items, conditionally using parallel iteration.
///
/// Uses parallel iteration when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
/// - The collection size reaches `config.parallel_threshold`
///
/// # Example
///
/// ```ignore
/// let results = maybe_parallel_map(&projects, &config, |p| calculator.calculate(p, as_of));
/// ```
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &HealthConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}

/// Filters and maps items, conditionally using parallel iteration.
#[allow(unused_variables)]
pub fn maybe_parallel_filter_map<T, U, F>(items: &[T], config: &HealthConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> Option<U> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().filter_map(f).collect();
        }
    }

    items.iter().filter_map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maybe_parallel_map() {
        let config = HealthConfig::sequential();
        let items = vec![1, 2, 3, 4, 5];
        let results: Vec<i32> = maybe_parallel_map(&items, &config, |x| x * 2);
        assert_eq!(results, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_maybe_parallel_filter_map() {
        let config = HealthConfig::sequential();
        let items = vec![1, 2, 3, 4, 5];
        let results: Vec<i32> =
            maybe_parallel_filter_map(&items, &config, |x| if *x > 2 { Some(x * 2) } else { None });
        assert_eq!(results, vec![6, 8, 10]);
    }

    #[test]
    fn test_parallel_path_preserves_order() {
        // Threshold of 1 forces rayon when the feature is on.
        let config = HealthConfig::default().with_threshold(1);
        let items: Vec<u64> = (0..1_000).collect();
        let results = maybe_parallel_map(&items, &config, |x| x * 3);
        let expected: Vec<u64> = (0..1_000).map(|x| x * 3).collect();
        assert_eq!(results, expected);
    }
}
