// Company directory: grouping/aggregation over the posting snapshot and
// the handlers serving the summary, search, and detail views.

pub mod grouping;
pub mod handlers;
