//! Edition descriptors: the small record that replaces the reference's
//! per-format class hierarchy (§9).

/// Address family a builder works over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    pub(crate) fn seek_depth(self) -> u8 {
        match self {
            Family::V4 => 31,
            Family::V6 => 127,
        }
    }

    pub(crate) fn max_prefix_len(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Family::V4 => "IPv4",
            Family::V6 => "IPv6",
        }
    }
}

/// Describes one of the eight MaxMind legacy editions this crate emits.
///
/// Replaces the reference Python implementation's `RadixTree` subclasses
/// with a single descriptor record plus the two serialization branches
/// (generic vs. country) selected by `is_country`.
#[derive(Debug, Clone, Copy)]
pub struct EditionSpec {
    /// Byte written into the trailer identifying the edition.
    pub edition_byte: u8,
    /// Bytes per segment record: 3 for STANDARD, 4 for ORG/ISP.
    pub record_len: u8,
    /// Bytes of the trailing segment-count field; always 3 for these editions.
    pub segment_record_len: u8,
    /// Address family, which also fixes `seek_depth`.
    pub family: Family,
    /// Whether this edition stores country indices directly in the trie
    /// (no data section) rather than deduplicated payload bytes.
    pub is_country: bool,
    /// Human-readable name, used only in diagnostics.
    pub name: &'static str,
}

impl EditionSpec {
    pub(crate) fn seek_depth(&self) -> u8 {
        self.family.seek_depth()
    }
}

// MaxMind legacy edition byte values (from the reference's `pygeoip.const`).
const ASNUM_EDITION: u8 = 21;
const ASNUM_EDITION_V6: u8 = 22;
const ISP_EDITION: u8 = 4;
const ORG_EDITION: u8 = 5;
const COUNTRY_EDITION: u8 = 1;
const COUNTRY_EDITION_V6: u8 = 12;
const CITY_EDITION_REV1: u8 = 2;

const STANDARD_RECORD_LENGTH: u8 = 3;
const ORG_RECORD_LENGTH: u8 = 4;
const SEGMENT_RECORD_LENGTH: u8 = 3;

/// ASN, IPv4.
pub const ASN: EditionSpec = EditionSpec {
    edition_byte: ASNUM_EDITION,
    record_len: STANDARD_RECORD_LENGTH,
    segment_record_len: SEGMENT_RECORD_LENGTH,
    family: Family::V4,
    is_country: false,
    name: "ASN",
};

/// ASN, IPv6.
pub const ASN_V6: EditionSpec = EditionSpec {
    edition_byte: ASNUM_EDITION_V6,
    record_len: STANDARD_RECORD_LENGTH,
    segment_record_len: SEGMENT_RECORD_LENGTH,
    family: Family::V6,
    is_country: false,
    name: "ASNv6",
};

/// ISP, IPv4. Same payload encoding as ASN; only `record_len` differs.
pub const ISP: EditionSpec = EditionSpec {
    edition_byte: ISP_EDITION,
    record_len: ORG_RECORD_LENGTH,
    segment_record_len: SEGMENT_RECORD_LENGTH,
    family: Family::V4,
    is_country: false,
    name: "ISP",
};

/// Org, IPv4. Same payload encoding as ASN; only `record_len` differs.
pub const ORG: EditionSpec = EditionSpec {
    edition_byte: ORG_EDITION,
    record_len: ORG_RECORD_LENGTH,
    segment_record_len: SEGMENT_RECORD_LENGTH,
    family: Family::V4,
    is_country: false,
    name: "Org",
};

/// Country, IPv4.
pub const COUNTRY: EditionSpec = EditionSpec {
    edition_byte: COUNTRY_EDITION,
    record_len: STANDARD_RECORD_LENGTH,
    segment_record_len: SEGMENT_RECORD_LENGTH,
    family: Family::V4,
    is_country: true,
    name: "Country",
};

/// Country, IPv6.
pub const COUNTRY_V6: EditionSpec = EditionSpec {
    edition_byte: COUNTRY_EDITION_V6,
    record_len: STANDARD_RECORD_LENGTH,
    segment_record_len: SEGMENT_RECORD_LENGTH,
    family: Family::V6,
    is_country: true,
    name: "Countryv6",
};

/// City rev1, IPv4.
pub const CITY_REV1: EditionSpec = EditionSpec {
    edition_byte: CITY_EDITION_REV1,
    record_len: STANDARD_RECORD_LENGTH,
    segment_record_len: SEGMENT_RECORD_LENGTH,
    family: Family::V4,
    is_country: false,
    name: "CityRev1",
};

/// City rev1, IPv6. Same edition byte as v4 in the reference implementation.
pub const CITY_REV1_V6: EditionSpec = EditionSpec {
    edition_byte: CITY_EDITION_REV1,
    record_len: STANDARD_RECORD_LENGTH,
    segment_record_len: SEGMENT_RECORD_LENGTH,
    family: Family::V6,
    is_country: false,
    name: "CityRev1v6",
};
