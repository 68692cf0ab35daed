//! Non-fatal build diagnostics (§6, §9).
//!
//! The reference implementation only ever `logging.warning`s these cases and
//! keeps going. We do the same by default (see [`crate::config::Config`])
//! but also collect them, so callers who want to fail a build on data quality
//! issues can inspect [`DatBuilder::warnings`](crate::builder) without
//! scraping logs.

/// One non-fatal issue noticed while building a database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A country code in the input had no entry in [`crate::country::COUNTRY_CODES`]
    /// and was recorded as "unknown" (index 0) instead.
    UnknownCountryCode { code: String, context: String },
    /// The segment table outgrew the 3-byte segment record field. Only
    /// reachable when `Config::strict_segment_overflow` is `false`, since
    /// otherwise this is a hard error instead.
    SegmentCountOverflow { count: usize, bytes: u8 },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::UnknownCountryCode { code, context } => write!(
                f,
                "'{code}': missing country for {context}, recorded as unknown"
            ),
            Warning::SegmentCountOverflow { count, bytes } => write!(
                f,
                "segment count {count} exceeds the {bytes}-byte segment record capacity"
            ),
        }
    }
}

/// An ordered collection of [`Warning`]s accumulated during a build.
#[derive(Debug, Clone, Default)]
pub struct Warnings(Vec<Warning>);

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning, also emitting it through `log::warn!` immediately,
    /// mirroring the reference's behavior of logging as it goes.
    pub fn push(&mut self, warning: Warning) {
        log::warn!("{warning}");
        self.0.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Warnings {
    type Item = &'a Warning;
    type IntoIter = std::slice::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
