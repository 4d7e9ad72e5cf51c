// Resume integration: thin client for the external parser service and the
// keyword-match rank built on its output. Scoring stays external.

pub mod client;
pub mod handlers;
pub mod keywords;
