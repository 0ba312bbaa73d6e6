//! Selection sort: minimum selection over the unsorted suffix.
//!
//! For each position, scans the unsorted suffix for its minimum and
//! swaps it into place. Positions whose minimum is already in place move
//! nothing and therefore render nothing.

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

    for i in 0..n - 1 {
        let mut min = i;
        for j in i + 1..n {
            if ex.values()[j] < ex.values()[min] {
                min = j;
            }
        }
        // A no-op when min == i; the executor drops degenerate swaps.
        ex.swap(i, min);
    }
}
