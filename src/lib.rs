//! # Reservoir Units
//!
//! Unit constants and conversions between field units (feet, psi,
//! millidarcy, days) and the SI representation used internally by
//! reservoir-simulation code.
//!
//! ## Crate layout
//!
//! - [`prefix`]: Decimal scale factors (`MILLI`, `KILO`, ...).
//! - [`unit`]: Base, derived and standardised unit constants.
//! - [`unit::convert`]: Conversions into and out of internal units.
//! - [`units`]: An older, fixed-literal constant group kept for existing callers.
//!
//! ## Internal units
//!
//! Internal units are *always*, and exclusively, SI. The base units
//! [`unit::METER`], [`unit::SECOND`] and [`unit::KILOGRAM`] are all `1.0`,
//! and every other constant is the size of its unit expressed in SI.
//!
//! ```
//! use reservoir_units::{prefix::MILLI, unit::{self, convert}};
//!
//! // 250 mD into m².
//! let k = convert::from(250.0, MILLI * unit::DARCY);
//!
//! // 2.0e7 Pa out to psi.
//! let p = convert::to(2.0e7, unit::PSIA);
//! # assert!(k > 0.0 && p > 0.0);
//! ```
//!
//! Keep calls qualified (`convert::from`, `convert::to`) rather than
//! glob-importing [`unit::convert`]: the names collide with common
//! conversion traits.

pub mod prefix;
pub mod unit;
pub mod units;
