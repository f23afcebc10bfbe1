// Copyright 2026 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A streaming codec for SVG path data.
//!
//! Path data (the `d` attribute of an SVG `<path>`) is parsed into
//! [`SubPath`]s, each a start point followed by a list of absolute
//! [`Segment`]s. Parsing consumes its input as a sequence of text chunks
//! which may be split anywhere, and produces subpaths as soon as they are
//! complete. Going the other way, [`serialize`] turns subpaths back into
//! text fragments.
//!
//! Two transformations work on parsed subpaths: [`normalize_arcs`] replaces
//! elliptical arcs with cubic Béziers, and [`invert`] reverses the direction
//! a subpath is traced in.
//!
//! # Examples
//!
//! ```
//! use pathdata::{parse, to_svg, Point, Segment};
//!
//! // The text may arrive in pieces, e.g. from a network stream.
//! let chunks = ["M0,0 Q65,75 9", "0,110 T200,300 Z"];
//! let subpaths = parse(chunks).collect::<Result<Vec<_>, _>>().unwrap();
//!
//! assert_eq!(subpaths.len(), 1);
//! assert_eq!(
//!     subpaths[0].segments[1],
//!     Segment::Quad { ctrl: Point::new(115., 145.), to: Point::new(200., 300.) }
//! );
//! assert_eq!(to_svg(&subpaths), "M0,0 Q65,75 90,110 Q115,145 200,300 Z");
//! ```
//!
//! Arcs have to be normalized before an arbitrary point transform can be
//! applied:
//!
//! ```
//! use pathdata::{parse_str, Point};
//!
//! let path = parse_str("M10 10 a5 5 0 0 1 10 0").next().unwrap().unwrap();
//! assert!(path.transform_points(|p| p).is_err());
//!
//! let moved = path
//!     .normalize_arcs()
//!     .transform_points(|p| Point::new(p.x + 5., p.y))
//!     .unwrap();
//! assert_eq!(moved.start, Point::new(15., 10.));
//! assert_eq!(moved.end_point(), Point::new(25., 10.));
//! ```
//!
//! Errors end the parse; every error is reported once, as the last item:
//!
//! ```
//! use pathdata::{parse_str, ParseError};
//!
//! let result = parse_str("M0,0 L1").collect::<Result<Vec<_>, _>>();
//! assert!(matches!(result, Err(ParseError::InvalidParameterCount { .. })));
//! ```
//!
//! # Feature Flags
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//!   However, note that the `libm` crate is not as efficient as the standard library.
//! - `mint`: Enable `From`/`Into` conversion of the point types and [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the data model.
//! - `schemars`: Add best-effort support for using the data model in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! Note that this crate does require that an allocator is available (i.e. it uses [alloc]).
//!
//! Diagnostics are reported through the [`log`] facade; no logger is
//! installed by this crate.
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::exhaustive_enums,
    clippy::missing_errors_doc,
    reason = "segment kinds are fixed by the path data grammar"
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("pathdata requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod arc;
mod common;
mod invert;
mod param;
mod parse;
mod point;
mod segment;
mod serialize;
mod split;
mod tokenize;
mod vec2;

pub use crate::arc::*;
pub use crate::invert::*;
pub use crate::parse::*;
pub use crate::point::*;
pub use crate::segment::*;
pub use crate::serialize::*;
pub use crate::split::*;
pub use crate::tokenize::*;
pub use crate::vec2::*;
