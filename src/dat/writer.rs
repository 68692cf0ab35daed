//! Serializes a finished [`Trie`] plus its payload bytes into the on-disk
//! `.dat` layout (§5).

use crate::country::COUNTRY_BEGIN;
use crate::dat::format::{encode_rec, COUNTRY_PADDING, SENTINEL, SIGNATURE};
use crate::edition::EditionSpec;
use crate::error::Result;
use crate::trie::{Child, Trie};

/// Render a complete `.dat` file body for one edition.
///
/// `trie` leaves carry a `u32` that means different things depending on the
/// edition: for country editions it is the country's table index (added
/// directly to [`COUNTRY_BEGIN`]); for every other edition it is the 1-based
/// byte offset of that leaf's encoded payload within `data_section`, and the
/// final record value is `segment_count + offset` — exactly the reference
/// implementation's `len(self.segments) + self.data_offsets[data]`.
///
/// A `segment_count` too large for `spec.segment_record_len` bytes is not
/// rejected here — the reference only warns and writes the truncated count
/// anyway (§7), and [`crate::builder::DatBuilder::finish`] is where that
/// choice (warn vs. hard error, per `Config::strict_segment_overflow`) is
/// made before this function ever runs.
pub fn serialize(
    spec: &EditionSpec,
    trie: &Trie<u32>,
    data_section: &[u8],
    comment: &str,
) -> Result<Vec<u8>> {
    let segment_count = trie.segment_count();

    let mut out = Vec::with_capacity(segment_count * 2 * spec.record_len as usize + 64);

    for node in trie.segments() {
        out.extend(record_bytes(spec, segment_count, &node.lhs));
        out.extend(record_bytes(spec, segment_count, &node.rhs));
    }

    if spec.is_country {
        out.extend_from_slice(&COUNTRY_PADDING);
    } else {
        out.push(SENTINEL);
        out.extend_from_slice(data_section);
    }

    out.extend_from_slice(comment.as_bytes());
    out.extend_from_slice(&SIGNATURE);
    out.push(spec.edition_byte);
    out.extend(encode_rec(segment_count as u32, spec.segment_record_len));

    Ok(out)
}

fn record_bytes(spec: &EditionSpec, segment_count: usize, child: &Child<u32>) -> Vec<u8> {
    let rec = match child {
        Child::Empty => {
            if spec.is_country {
                COUNTRY_BEGIN
            } else {
                segment_count as u32
            }
        }
        Child::Internal(idx) => *idx,
        Child::Leaf { value, .. } => {
            if spec.is_country {
                COUNTRY_BEGIN + *value
            } else {
                segment_count as u32 + *value
            }
        }
    };
    encode_rec(rec, spec.record_len)
}
