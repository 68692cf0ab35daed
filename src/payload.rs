//! Data-section payload encoders (§4).
//!
//! Country editions never reach this module — their leaf value is a country
//! index added directly to [`crate::country::COUNTRY_BEGIN`] (§4.3). Every
//! other edition stores its payload here, deduplicated by encoded bytes
//! before being appended to the data section (§5).

use crate::country::country_index;

/// Encode an ASN/ISP/Org string payload: UTF-8 bytes followed by a NUL (§4.1, §4.2).
pub fn encode_asn_like(value: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.len() + 1);
    out.extend_from_slice(value.as_bytes());
    out.push(0);
    out
}

/// A City rev1 record prior to encoding (§4.4).
#[derive(Debug, Clone, Default)]
pub struct CityRecord {
    pub country: String,
    pub region: String,
    pub city: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    /// US-only metro code. Combined with `area_code` into one field; only
    /// written when the country is `"us"` and at least one of the two is nonzero.
    pub metro_code: u32,
    /// US-only area code. See `metro_code`.
    pub area_code: u32,
}

/// Encode a uint24, little-endian, truncating any bits above bit 23.
///
/// Mirrors the reference's record-packing helper, which always serializes a
/// 4-byte little-endian integer and then slices it down to the field width.
pub fn encode_uint24_le(value: u32) -> [u8; 3] {
    let bytes = value.to_le_bytes();
    [bytes[0], bytes[1], bytes[2]]
}

/// Bias and scale a coordinate the way the reference's City encoder does:
/// round to 4 decimal places, then `(value + 180.0) * 10000.0`, truncated to
/// an integer. The intermediate rounding step matters — without it, floating
/// point noise in the input can tip the truncation to the wrong side.
fn encode_coordinate(value: f64) -> u32 {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    ((rounded + 180.0) * 10_000.0) as u32
}

/// Encode a City rev1 record's data-section payload (§4.4).
///
/// Layout: country index byte, then region/city/postal_code NUL-joined into
/// one run of UTF-8 bytes (`region\0city\0postal_code\0`), then encoded
/// latitude and longitude as uint24_le, then a final uint24_le field that is
/// `metro_code * 1000 + area_code` for US records with a nonzero metro or
/// area code, and zero otherwise.
pub fn encode_city_rev1(record: &CityRecord) -> Vec<u8> {
    let mut out = Vec::new();
    out.push(country_index(&record.country));
    for field in [&record.region, &record.city, &record.postal_code] {
        out.extend_from_slice(field.as_bytes());
        out.push(0);
    }
    out.extend_from_slice(&encode_uint24_le(encode_coordinate(record.latitude)));
    out.extend_from_slice(&encode_uint24_le(encode_coordinate(record.longitude)));
    let metro_field = if record.country.eq_ignore_ascii_case("us")
        && (record.metro_code != 0 || record.area_code != 0)
    {
        record.metro_code * 1000 + record.area_code
    } else {
        0
    };
    out.extend_from_slice(&encode_uint24_le(metro_field));
    out
}
