//! Insertion sort: rightward shifting with a held key.
//!
//! For each position, holds the key aside and shifts every greater
//! element one slot rightward, rendering each shift as a pair-highlight
//! frame. When at least one shift occurred, the key's landing slot still
//! holds a stale copy, so placing the key is itself an observable
//! mutation and emits one single-index settle frame. A position that
//! needs no shifting emits nothing.

// Internal dependencies
use crate::engine::executor::SortExecutor;
use crate::render::pacer::DelayProvider;
use crate::render::sink::{Highlights, RenderSink};

/// Sort the run's array, narrating every shift and settle.
pub(crate) fn sort<S, P>(ex: &mut SortExecutor<'_, S, P>)
where
    S: RenderSink + ?Sized,
    P: DelayProvider + ?Sized,
{
    let n = ex.len();
    if n < 2 {
        return;
    }

    for i in 1..n {
        let key = ex.values()[i];
        let mut j = i;
        while j > 0 && ex.values()[j - 1] > key {
            let shifted = ex.values()[j - 1];
            ex.write(j, shifted);
            ex.frame(Highlights::Pair(j - 1, j));
            j -= 1;
        }
        // Settle only when the slot holds something other than the key;
        // with no shifts the key never left its slot.
        if ex.values()[j] != key {
            ex.write(j, key);
            ex.frame(Highlights::One(j));
        }
    }
}
