//! Turns time-tracked coding sessions into chart-ready statistics: hours
//! spent per date and hours spent per language. Sessions come pre-aggregated
//! per period from a storage snapshot, this crate only groups, sums and
//! sorts them into stable chart data.
//!

pub mod cli;
pub mod kvs;
pub mod session;
pub mod utils;
pub mod viewmodel;
