//! csv2dat-rs — a builder for legacy MaxMind GeoIP `.dat` databases.
//!
//! This crate builds the binary radix-trie `.dat` files the legacy
//! `GeoIP`/`pygeoip` C API reads: ASN, ISP, Org, Country, and City rev1,
//! each in IPv4 and (where the format supports it) IPv6 flavors. It does not
//! read CSV input or query finished databases — both are left to the
//! caller; see the [`builder`] module for the actual build surface.
//!
//! # Quick start
//!
//! ```
//! use csv2dat::builder::{DatBuilder, Payload};
//! use csv2dat::config::Config;
//! use csv2dat::edition;
//! use csv2dat::prefix::Ipv4Prefix;
//!
//! let mut builder = DatBuilder::new(edition::ASN, Config::default());
//! builder
//!     .insert(Ipv4Prefix::new(0x0100_0000, 24), Payload::Text("AS13335 Cloudflare".into()))
//!     .unwrap();
//! let bytes = builder.finish().unwrap();
//! assert!(!bytes.is_empty());
//! ```

pub mod builder;
pub mod config;
pub mod country;
pub mod dat;
pub mod edition;
mod error;
pub mod payload;
pub mod prefix;
pub mod trie;
pub mod warnings;

pub use builder::{DatBuilder, Payload, Prefix};
pub use config::Config;
pub use error::{Error, Result};
pub use warnings::{Warning, Warnings};
