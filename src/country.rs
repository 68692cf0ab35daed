//! Canonical MaxMind legacy country-code table.
//!
//! This is the same fixed-order ISO-3166-ish alpha-2 table the legacy
//! GeoIP C library (and `pygeoip.const.COUNTRY_CODES`) ships: index 0 is
//! "unknown", and country *editions* (§4.3) add a country's index directly
//! to `COUNTRY_BEGIN` rather than storing it in the data section. The order
//! is part of the on-disk format — it must never be resorted.

/// Base record value added to a country index when writing a country-edition data leaf.
pub const COUNTRY_BEGIN: u32 = 16_776_960;

/// Canonical, order-significant country code table.
///
/// Index 0 is the "unknown"/no-country sentinel (the reference maps both
/// `""` and `"--"` onto it).
pub const COUNTRY_CODES: &[&str] = &[
    "", "ap", "eu", "ad", "ae", "af", "ag", "ai", "al", "am", "an", "ao", "aq", "ar", "as", "at",
    "au", "aw", "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo", "br",
    "bs", "bt", "bv", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl", "cm",
    "cn", "co", "cr", "cu", "cv", "cx", "cy", "cz", "de", "dj", "dk", "dm", "do", "dz", "ec", "ee",
    "eg", "eh", "er", "es", "et", "fi", "fj", "fk", "fm", "fo", "fr", "fx", "ga", "gb", "gd", "ge",
    "gf", "gh", "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt", "gu", "gw", "gy", "hk", "hm",
    "hn", "hr", "ht", "hu", "id", "ie", "il", "in", "io", "iq", "ir", "is", "it", "jm", "jo", "jp",
    "ke", "kg", "kh", "ki", "km", "kn", "kp", "kr", "kw", "ky", "kz", "la", "lb", "lc", "li", "lk",
    "lr", "ls", "lt", "lu", "lv", "ly", "ma", "mc", "md", "mg", "mh", "mk", "ml", "mm", "mn", "mo",
    "mp", "mq", "mr", "ms", "mt", "mu", "mv", "mw", "mx", "my", "mz", "na", "nc", "ne", "nf", "ng",
    "ni", "nl", "no", "np", "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph", "pk", "pl", "pm",
    "pn", "pr", "ps", "pt", "pw", "py", "qa", "re", "ro", "ru", "rw", "sa", "sb", "sc", "sd", "se",
    "sg", "sh", "si", "sj", "sk", "sl", "sm", "sn", "so", "sr", "st", "sv", "sy", "sz", "tc", "td",
    "tf", "tg", "th", "tj", "tk", "tm", "tn", "to", "tl", "tr", "tt", "tv", "tw", "tz", "ua", "ug",
    "um", "us", "uy", "uz", "va", "vc", "ve", "vg", "vi", "vn", "vu", "wf", "ws", "ye", "yt", "rs",
    "za", "zm", "me", "zw", "a1", "a2", "o1", "ax", "gg", "im", "je", "bl", "mf",
];

/// Look up a country's canonical index, applying the legacy aliases.
///
/// The input is matched case-insensitively. `""` and `"--"` both resolve to
/// index 0 ("unknown"), as do any codes absent from the table — callers
/// that care about the distinction should check [`is_known`] first.
pub fn country_index(code: &str) -> u8 {
    let lower = code.to_lowercase();
    let aliased = match lower.as_str() {
        "cw" => "an",
        "uk" => "gb",
        "sx" => "fx",
        "--" => "",
        other => other,
    };
    COUNTRY_CODES
        .iter()
        .position(|c| *c == aliased)
        .unwrap_or(0) as u8
}

/// Whether `code` (after alias resolution) is a known, non-"unknown" entry.
pub fn is_known(code: &str) -> bool {
    let lower = code.to_lowercase();
    let aliased = match lower.as_str() {
        "cw" => "an",
        "uk" => "gb",
        "sx" => "fx",
        other => other,
    };
    !aliased.is_empty() && aliased != "--" && COUNTRY_CODES.contains(&aliased)
}
