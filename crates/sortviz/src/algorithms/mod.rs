//! Layer 3: Algorithms
//!
//! This layer implements the five sorting variants. Each operates in
//! place on the run's working array through the executor's mutation
//! primitives, so every order-changing step is narrated as one render
//! event followed by one suspension. The executor layer orchestrates;
//! this layer only decides which elements move.

// Adjacent-pair passes with early termination.
pub mod bubble;

// Minimum selection over the unsorted suffix.
pub mod selection;

// Rightward shifting with a held key.
pub mod insertion;

// Recursive Lomuto partitioning, last-element pivot.
pub mod quick;

// Top-down recursive merging through a scratch buffer.
pub mod merge;
