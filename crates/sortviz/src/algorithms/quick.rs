//! Quick sort: recursive Lomuto partitioning, last-element pivot.
//!
//! Partitions each half-open range around its last element, swapping
//! smaller elements toward the front; each effective swap is one render
//! event. Swaps the partition would perform onto themselves are filtered
//! by the executor, so a sorted range partitions silently.

// Internal dependencies
use crate::engine::executor::SortExecutor;
use crate::render::pacer::DelayProvider;
use crate::render::sink::RenderSink;

/// Sort the run's array, narrating every effective swap.
pub(crate) fn sort<S, P>(ex: &mut SortExecutor<'_, S, P>)
where
    S: RenderSink + ?Sized,
    P: DelayProvider + ?Sized,
{
    let n = ex.len();
    if n < 2 {
        return;
    }
    quicksort(ex, 0, n);
}

/// Recurse over the half-open range `lo..hi`.
fn quicksort<S, P>(ex: &mut SortExecutor<'_, S, P>, lo: usize, hi: usize)
where
    S: RenderSink + ?Sized,
    P: DelayProvider + ?Sized,
{
    if hi - lo < 2 {
        return;
    }
    let p = partition(ex, lo, hi);
    quicksort(ex, lo, p);
    quicksort(ex, p + 1, hi);
}

/// Lomuto partition of `lo..hi` around the last element.
///
/// Returns the pivot's final index.
fn partition<S, P>(ex: &mut SortExecutor<'_, S, P>, lo: usize, hi: usize) -> usize
where
    S: RenderSink + ?Sized,
    P: DelayProvider + ?Sized,
{
    let pivot = ex.values()[hi - 1];
    let mut boundary = lo;
    for j in lo..hi - 1 {
        if ex.values()[j] < pivot {
            ex.swap(boundary, j);
            boundary += 1;
        }
    }
    ex.swap(boundary, hi - 1);
    boundary
}
