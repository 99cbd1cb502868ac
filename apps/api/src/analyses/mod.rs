//! ATS analysis history and per-résumé attempt quota.

pub mod handlers;
pub mod ledger;
