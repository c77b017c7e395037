//! ncbridge: coercion core for a NetCDF binding to the R environment.
//!
//! The binding proper hands every R argument through this crate on the way
//! into the storage library, and every native status back through it on the
//! way out:
//!
//! - Identifier decoding (dimension / variable / type, by numeric id or by
//!   name)
//! - Type-name resolution against the built-in catalogue, with user-defined
//!   types looked up in the open dataset
//! - Size normalization from R's signed scalar kinds to unsigned sizes
//! - Status translation into fatal host errors
//! - Pin/drain lifetime protection for values held across native calls
//!
//! The storage library sits behind the [`Dataset`] trait; this crate
//! performs no I/O of its own. Everything is synchronous and call-scoped,
//! and a [`ProtectScope`] is owned by exactly one top-level call.

pub mod convert;
pub mod dataset;
pub mod error;
pub mod protect;
pub mod value;

pub use dataset::{enter_define, leave_define, Dataset, NcType};
pub use error::{check, strerror, Error, Result, Status};
pub use protect::ProtectScope;
pub use value::RValue;
