//! Merge sort: top-down recursive merging through a scratch buffer.
//!
//! Each merge copies the range into scratch, then writes elements back
//! in order. A write-back that changes the value at its index is one
//! render event highlighting that index; value-preserving writes change
//! nothing observable and stay silent, so merging sorted runs costs no
//! frames.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::executor::SortExecutor;
use crate::render::pacer::DelayProvider;
use crate::render::sink::{Highlights, RenderSink};

/// Sort the run's array, narrating every changed write-back.
pub(crate) fn sort<S, P>(ex: &mut SortExecutor<'_, S, P>)
where
    S: RenderSink + ?Sized,
    P: DelayProvider + ?Sized,
{
    let n = ex.len();
    if n < 2 {
        return;
    }
    let mut scratch = Vec::with_capacity(n);
    split(ex, &mut scratch, 0, n);
}

/// Recurse over the half-open range `lo..hi`, merging the halves.
fn split<S, P>(ex: &mut SortExecutor<'_, S, P>, scratch: &mut Vec<u32>, lo: usize, hi: usize)
where
    S: RenderSink + ?Sized,
    P: DelayProvider + ?Sized,
{
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    split(ex, scratch, lo, mid);
    split(ex, scratch, mid, hi);
    merge(ex, scratch, lo, mid, hi);
}

/// Stable two-way merge of `lo..mid` and `mid..hi`.
fn merge<S, P>(ex: &mut SortExecutor<'_, S, P>, scratch: &mut Vec<u32>, lo: usize, mid: usize, hi: usize)
where
    S: RenderSink + ?Sized,
    P: DelayProvider + ?Sized,
{
    scratch.clear();
    scratch.extend_from_slice(&ex.values()[lo..hi]);
    let split_at = mid - lo;

    let mut left = 0;
    let mut right = split_at;
    for k in lo..hi {
        // Stable pick: ties favor the left run.
        let next = if left < split_at && (right >= scratch.len() || scratch[left] <= scratch[right])
        {
            let v = scratch[left];
            left += 1;
            v
        } else {
            let v = scratch[right];
            right += 1;
            v
        };
        if ex.values()[k] != next {
            ex.write(k, next);
            ex.frame(Highlights::One(k));
        }
    }
}
