//! The public build surface: accumulate `(prefix, payload)` pairs and
//! serialize them into a `.dat` file (§6).

use std::path::Path;

use ahash::AHashMap;

use crate::config::Config;
use crate::country::{country_index, is_known};
use crate::dat;
use crate::edition::{EditionSpec, Family};
use crate::error::{Error, Result};
use crate::payload::{encode_asn_like, encode_city_rev1, CityRecord};
use crate::prefix::{Ipv4Prefix, Ipv6Prefix};
use crate::trie::{Overwrite, Trie};
use crate::warnings::{Warning, Warnings};

/// An IPv4 or IPv6 network, as accepted by [`DatBuilder::insert`].
#[derive(Debug, Clone, Copy)]
pub enum Prefix {
    V4(Ipv4Prefix),
    V6(Ipv6Prefix),
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prefix::V4(p) => write!(f, "{p}"),
            Prefix::V6(p) => write!(f, "{p}"),
        }
    }
}

impl From<Ipv4Prefix> for Prefix {
    fn from(p: Ipv4Prefix) -> Self {
        Prefix::V4(p)
    }
}

impl From<Ipv6Prefix> for Prefix {
    fn from(p: Ipv6Prefix) -> Self {
        Prefix::V6(p)
    }
}

impl From<ipnet::Ipv4Net> for Prefix {
    fn from(net: ipnet::Ipv4Net) -> Self {
        Prefix::V4(net.into())
    }
}

impl From<ipnet::Ipv6Net> for Prefix {
    fn from(net: ipnet::Ipv6Net) -> Self {
        Prefix::V6(net.into())
    }
}

/// The leaf data attached to a prefix, shaped per edition family (§4).
#[derive(Debug, Clone)]
pub enum Payload {
    /// ASN/ISP/Org editions: a single free-form string, NUL-terminated on encode.
    Text(String),
    /// Country/Countryv6 editions: an ISO-3166-ish alpha-2 code (aliases resolved).
    Country(String),
    /// City rev1 editions: the full location record.
    City(CityRecord),
}

/// Accumulates prefixes for one edition and serializes them into a `.dat` file.
pub struct DatBuilder {
    spec: EditionSpec,
    trie: Trie<u32>,
    dedup: AHashMap<Vec<u8>, u32>,
    data_section: Vec<u8>,
    cur_offset: u32,
    config: Config,
    warnings: Warnings,
    segment_overflow_warned: bool,
}

impl DatBuilder {
    /// Create a builder for `spec` with no network-count hint.
    pub fn new(spec: EditionSpec, config: Config) -> Self {
        Self::with_capacity(spec, config, 0)
    }

    /// Create a builder, pre-sizing the trie arena for `capacity` internal nodes.
    pub fn with_capacity(spec: EditionSpec, config: Config, capacity: usize) -> Self {
        let capacity = if capacity > 0 {
            capacity
        } else {
            config.capacity_hint
        };
        Self {
            trie: Trie::with_capacity(spec.seek_depth(), config.debug, capacity),
            dedup: AHashMap::default(),
            data_section: Vec::new(),
            cur_offset: 1,
            warnings: Warnings::new(),
            segment_overflow_warned: false,
            config,
            spec,
        }
    }

    /// Enable or disable origin tracking for [`Self::dump`]. Never affects
    /// the bytes produced by [`Self::finish`].
    ///
    /// Must be called before the first [`Self::insert`] — it replaces the
    /// trie outright, so any prior inserts would be silently lost.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        let capacity = self.trie.segment_count();
        self.trie = Trie::with_capacity(self.spec.seek_depth(), debug, capacity);
        self
    }

    /// Insert one prefix with its payload.
    pub fn insert(&mut self, prefix: impl Into<Prefix>, payload: Payload) -> Result<()> {
        let prefix = prefix.into();
        let (address, prefix_len) = self.address_and_len(&prefix)?;

        let leaf_value = self.leaf_value_for(&payload, &prefix)?;
        let origin = prefix.to_string();
        match self.trie.insert(address, prefix_len, leaf_value, || origin.clone()) {
            Ok(Overwrite::New) => {}
            Ok(Overwrite::ReplacedLeaf(_)) => {
                log::warn!("{prefix}: overwrote an existing entry (last write wins)");
            }
            Ok(Overwrite::ReplacedInternal) => {
                log::warn!("{prefix}: overwrote a more specific subtree");
            }
            Err(e) => return Err(e),
        }
        self.check_segment_overflow();
        Ok(())
    }

    /// Record (once) a [`Warning::SegmentCountOverflow`] the moment the
    /// segment table outgrows `segment_record_len` bytes, so it's visible
    /// through [`Self::warnings`] as soon as it happens rather than only
    /// after [`Self::finish`] has already consumed the builder.
    fn check_segment_overflow(&mut self) {
        if self.segment_overflow_warned {
            return;
        }
        let max = 1usize << (8 * self.spec.segment_record_len as u32);
        if self.trie.segment_count() >= max {
            self.segment_overflow_warned = true;
            self.warnings.push(Warning::SegmentCountOverflow {
                count: self.trie.segment_count(),
                bytes: self.spec.segment_record_len,
            });
        }
    }

    fn address_and_len(&self, prefix: &Prefix) -> Result<(u128, u8)> {
        let max = self.spec.family.max_prefix_len();
        let (address, prefix_len, actual_family) = match prefix {
            Prefix::V4(p) => (p.address as u128, p.prefix_len, Family::V4),
            Prefix::V6(p) => (p.address, p.prefix_len, Family::V6),
        };
        if actual_family != self.spec.family {
            return Err(Error::AddressFamilyMismatch {
                expected: self.spec.family.label(),
                actual: actual_family.label(),
            });
        }
        if prefix_len == 0 || prefix_len > max {
            return Err(Error::InvalidPrefixLength { len: prefix_len, bits: max });
        }
        Ok((address, prefix_len))
    }

    fn leaf_value_for(&mut self, payload: &Payload, prefix: &Prefix) -> Result<u32> {
        if self.spec.is_country {
            let Payload::Country(code) = payload else {
                return Err(Error::PayloadMismatch {
                    edition: self.spec.name,
                    expected: "Country",
                });
            };
            if !code.is_empty() && code != "--" && !is_known(code) {
                self.warnings.push(Warning::UnknownCountryCode {
                    code: code.clone(),
                    context: prefix.to_string(),
                });
            }
            return Ok(country_index(code) as u32);
        }

        let encoded = match payload {
            Payload::Text(s) => encode_asn_like(s),
            Payload::City(record) => {
                if !record.country.is_empty()
                    && record.country != "--"
                    && !is_known(&record.country)
                {
                    self.warnings.push(Warning::UnknownCountryCode {
                        code: record.country.clone(),
                        context: prefix.to_string(),
                    });
                }
                encode_city_rev1(record)
            }
            Payload::Country(_) => {
                return Err(Error::PayloadMismatch {
                    edition: self.spec.name,
                    expected: "Text or City",
                })
            }
        };

        if let Some(offset) = self.dedup.get(&encoded) {
            return Ok(*offset);
        }
        let offset = self.cur_offset;
        self.cur_offset += encoded.len() as u32;
        self.dedup.insert(encoded.clone(), offset);
        self.data_section.extend_from_slice(&encoded);
        Ok(offset)
    }

    /// Serialize the accumulated build into `.dat` bytes.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        self.check_segment_overflow();
        if self.segment_overflow_warned && self.config.strict_segment_overflow {
            return Err(Error::SegmentCountOverflow {
                count: self.trie.segment_count(),
                bytes: self.spec.segment_record_len,
            });
        }
        dat::serialize(&self.spec, &self.trie, &self.data_section, &self.config.comment)
    }

    /// `finish` followed by an atomic write to `path`.
    pub fn write_to_path(self, path: &Path) -> Result<()> {
        let bytes = self.finish()?;
        dat::write_atomically(path, &bytes)
    }

    /// Accumulated non-fatal diagnostics from inserts so far.
    pub fn warnings(&self) -> &Warnings {
        &self.warnings
    }

    /// Pretty-print the trie as built so far (debug mode only shows origins).
    pub fn dump(&self) -> String {
        self.trie.dump()
    }
}
