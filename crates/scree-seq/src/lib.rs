//! Growable, bounds-checked sequence storage.
//!
//! Provides [`Sequence`], an owning contiguous buffer that grows on
//! demand under an explicit policy and surfaces every failure as a
//! [`SeqError`] instead of panicking or aborting.
//!
//! # Error taxonomy
//!
//! - **Allocation**: storage could not be obtained or grown, either
//!   because the allocator refused or because the configured growth
//!   ceiling was reached ([`SeqError::AllocationFailed`]).
//! - **Logical misuse**: removal from an empty sequence
//!   ([`SeqError::Empty`]) or a read at or beyond the live element
//!   count ([`SeqError::IndexOutOfBounds`]).
//!
//! The two classes are never conflated: callers can retry or shed
//! load on allocation failure and treat misuse as a programming error.
//!
//! # Bounds discipline
//!
//! Indexed reads are checked against the live element count, never the
//! capacity. Slots between the count and the capacity are allocated
//! but hold no meaningful values, and no operation reads or writes
//! them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod sequence;

pub use config::SeqConfig;
pub use error::SeqError;
pub use sequence::Sequence;
