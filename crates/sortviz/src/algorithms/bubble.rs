//! Bubble sort: adjacent-pair passes with early termination.
//!
//! Repeatedly sweeps adjacent pairs, swapping whenever the left element
//! exceeds the right; each swap is one render event highlighting the
//! pair. The sweep repeats until a full pass performs zero swaps, so an
//! already-sorted array costs exactly one silent pass.

// Internal dependencies
use crate::engine::executor::SortExecutor;
use crate::render::pacer::DelayProvider;
use crate::render::sink::RenderSink;

/// Sort the run's array, narrating every swap.
pub(crate) fn sort<S, P>(ex: &mut SortExecutor<'_, S, P>)
where
    S: RenderSink + ?Sized,
    P: DelayProvider + ?Sized,
{
    let n = ex.len();
    if n < 2 {
        return;
    }

    loop {
        let mut swapped = false;
        for j in 0..n - 1 {
            if ex.values()[j] > ex.values()[j + 1] {
                ex.swap(j, j + 1);
                swapped = true;
            }
        }
        // Termination is decided by the pass, not a counter: the run ends
        // after the first sweep that moved nothing.
        if !swapped {
            break;
        }
    }
}
