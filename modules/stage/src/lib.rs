#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unreachable)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![cfg_attr(not(test), no_std)]

//! Demand-driven single-stage stream protocol.
//!
//! A stage owns exactly one inlet and one outlet and reacts to port events
//! dispatched one at a time by a [`StageRunner`](crate::core::StageRunner).
//! Nothing is requested upstream or pushed downstream without an explicit
//! demand signal. The crate ships an incremental accumulator stage and the
//! [`DigestCalculator`](crate::core::DigestCalculator) built on it.

extern crate alloc;

/// Runtime-agnostic protocol core (`no_std` + `alloc`).
pub mod core;
/// Standard library and tokio integrations.
#[cfg(feature = "std")]
pub mod std;
