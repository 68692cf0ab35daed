//! Builder-wide configuration (§6).

/// Tunables shared by every builder type.
#[derive(Debug, Clone)]
pub struct Config {
    /// Free-form text written into the trailer's comment field. The
    /// reference hardcodes `"csv2dat.py"`; any text is valid here.
    pub comment: String,
    /// When `true`, a segment table that outgrows the 3-byte segment record
    /// ([`crate::dat::format::SEGMENT_RECORD_LENGTH`]) is a hard
    /// [`crate::Error::SegmentCountOverflow`]. When `false` (the reference's
    /// behavior), it is only a logged warning and the count is truncated on
    /// write, matching byte-for-byte what the original tool produces.
    pub strict_segment_overflow: bool,
    /// Keep `origin()` labels on every leaf, for [`crate::trie::Trie::dump`].
    /// Doubles leaf memory use; only worth enabling while debugging a build.
    pub debug: bool,
    /// Expected number of `insert` calls, used to pre-size the trie's arena.
    pub capacity_hint: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            comment: "csv2dat-rs".to_string(),
            strict_segment_overflow: false,
            debug: false,
            capacity_hint: 0,
        }
    }
}
