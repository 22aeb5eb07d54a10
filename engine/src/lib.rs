#![no_std]

//! Flash loan orchestration shared by every position manager front-end.
//!
//! A front-end validates the request, resolves amount sentinels and starts a flash loan
//! (`flash`). The pool calls back into `flashCallback` (`callback`), which authenticates the
//! loan, runs the requested strategy (`strategies`) and settles fee and repayment before
//! control returns to the pool.

pub mod cache;
pub mod callback;
pub mod config;
pub mod fees;
pub mod flash;
pub mod handlers;
pub mod operations;
pub mod owner_access;
pub mod pauser;
pub mod storage;
pub mod strategies;
pub mod swaps;
pub mod validation;
pub mod views;

pub use cache::Cache;
