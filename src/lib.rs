//! Deterministic data layer for the CDN traffic dashboard automation:
//! the mock fixture that integration tests assert against, plus the
//! report-domain logic around it (value parsing, calendar math,
//! report-type settings, DOM-contract baselines).

pub mod calendar;
pub mod config;
pub mod contract;
pub mod extract;
pub mod fixture;
