// Search-and-filter engine: normalization, predicate evaluation, sorting.
// Pure and synchronous; nothing here does I/O.

pub mod filter;
pub mod handlers;
pub mod normalize;
pub mod sort;
