//! End-to-end builds, one per `.dat` family, verified with a hand-rolled
//! bit-walk over the emitted bytes. There is no reader in this crate — the
//! walk below exists only to prove the writer's output is faithful to the
//! legacy format, the same way a byte-compatibility test would.

use csv2dat::builder::{DatBuilder, Payload};
use csv2dat::config::Config;
use csv2dat::country::{self, COUNTRY_BEGIN};
use csv2dat::edition;
use csv2dat::payload::{encode_uint24_le, CityRecord};
use csv2dat::prefix::Ipv4Prefix;

fn read_rec(dat: &[u8], pos: usize, record_len: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes[..record_len].copy_from_slice(&dat[pos..pos + record_len]);
    u32::from_le_bytes(bytes)
}

fn segment_count(dat: &[u8]) -> u32 {
    let mut bytes = [0u8; 4];
    bytes[..3].copy_from_slice(&dat[dat.len() - 3..]);
    u32::from_le_bytes(bytes)
}

/// Walk all 32 bits of `addr` from the segment table at the front of `dat`,
/// returning the raw record value of whichever leaf (or empty sentinel) is
/// reached. Mirrors the legacy reader's traversal, not this crate's writer.
fn bitwalk_v4(dat: &[u8], record_len: u8, is_country: bool, addr: u32) -> u32 {
    let segs = segment_count(dat);
    let record_len = record_len as usize;
    let mut node = 0u32;
    for bit in (0..32).rev() {
        let side = (addr >> bit) & 1;
        let pos = node as usize * 2 * record_len + side as usize * record_len;
        let rec = read_rec(dat, pos, record_len);
        if rec < segs {
            node = rec;
        } else {
            let base = if is_country { COUNTRY_BEGIN } else { segs };
            return rec - base;
        }
    }
    unreachable!("32-bit walk always resolves to a leaf or empty sentinel")
}

fn data_section_start(dat: &[u8], record_len: u8) -> usize {
    segment_count(dat) as usize * 2 * record_len as usize + 1 // +1 for the 0x2A sentinel
}

#[test]
fn scenario_a_country_v4_bitwalk() {
    let mut builder = DatBuilder::new(edition::COUNTRY, Config::default());
    builder
        .insert(Ipv4Prefix::new(0xC0A8_0000, 24), Payload::Country("US".into()))
        .unwrap();
    let dat = builder.finish().unwrap();

    let trailer_edition = dat[dat.len() - 4];
    assert_eq!(trailer_edition, edition::COUNTRY.edition_byte);

    let inside = bitwalk_v4(&dat, edition::COUNTRY.record_len, true, 0xC0A8_0001);
    assert_eq!(country::COUNTRY_CODES[inside as usize], "us");

    let outside = bitwalk_v4(&dat, edition::COUNTRY.record_len, true, 0x0A00_0001);
    assert_eq!(outside, 0);
}

#[test]
fn scenario_b_asn_v4_bitwalk() {
    let mut builder = DatBuilder::new(edition::ASN, Config::default());
    builder
        .insert(
            Ipv4Prefix::new(0x0100_0000, 24),
            Payload::Text("AS13335 Cloudflare".into()),
        )
        .unwrap();
    let dat = builder.finish().unwrap();

    let offset = bitwalk_v4(&dat, edition::ASN.record_len, false, 0x0100_0064);
    assert!(offset > 0);
    let start = data_section_start(&dat, edition::ASN.record_len) + offset as usize - 1;
    let end = dat[start..].iter().position(|&b| b == 0).unwrap() + start;
    assert_eq!(&dat[start..end], b"AS13335 Cloudflare");
}

#[test]
fn scenario_c_dedup_shares_one_data_entry() {
    let mut builder = DatBuilder::new(edition::ASN, Config::default());
    builder
        .insert(Ipv4Prefix::new(0x0100_0000, 24), Payload::Text("AS15169 Google".into()))
        .unwrap();
    builder
        .insert(Ipv4Prefix::new(0x0800_0000, 24), Payload::Text("AS15169 Google".into()))
        .unwrap();
    let dat = builder.finish().unwrap();

    let a = bitwalk_v4(&dat, edition::ASN.record_len, false, 0x0100_0001);
    let b = bitwalk_v4(&dat, edition::ASN.record_len, false, 0x0800_0001);
    assert_eq!(a, b);
}

#[test]
fn scenario_d_country_alias() {
    let mut uk_builder = DatBuilder::new(edition::COUNTRY, Config::default());
    uk_builder
        .insert(Ipv4Prefix::new(0x0100_0000, 24), Payload::Country("uk".into()))
        .unwrap();
    let uk_dat = uk_builder.finish().unwrap();

    let mut gb_builder = DatBuilder::new(edition::COUNTRY, Config::default());
    gb_builder
        .insert(Ipv4Prefix::new(0x0100_0000, 24), Payload::Country("gb".into()))
        .unwrap();
    let gb_dat = gb_builder.finish().unwrap();

    let uk_idx = bitwalk_v4(&uk_dat, edition::COUNTRY.record_len, true, 0x0100_0001);
    let gb_idx = bitwalk_v4(&gb_dat, edition::COUNTRY.record_len, true, 0x0100_0001);
    assert_eq!(uk_idx, gb_idx);
}

#[test]
fn scenario_e_and_f_city_record_round_trip() {
    let mut builder = DatBuilder::new(edition::CITY_REV1, Config::default());
    builder
        .insert(
            Ipv4Prefix::new(0x0100_0000, 24),
            Payload::City(CityRecord {
                country: "us".into(),
                region: "CA".into(),
                city: "Mountain View".into(),
                postal_code: "94043".into(),
                latitude: 0.0,
                longitude: -180.0,
                metro_code: 807,
                area_code: 415,
            }),
        )
        .unwrap();
    let dat = builder.finish().unwrap();

    let offset = bitwalk_v4(&dat, edition::CITY_REV1.record_len, false, 0x0100_0001);
    let start = data_section_start(&dat, edition::CITY_REV1.record_len) + offset as usize - 1;

    assert_eq!(dat[start], country::country_index("us"));

    let after_strings = start + 1 + "CA".len() + 1 + "Mountain View".len() + 1 + "94043".len() + 1;
    let lat = &dat[after_strings..after_strings + 3];
    let lon = &dat[after_strings + 3..after_strings + 6];
    let metro = &dat[after_strings + 6..after_strings + 9];

    assert_eq!(lat, &encode_uint24_le(1_800_000)[..]);
    assert_eq!(lon, &encode_uint24_le(0)[..]);
    assert_eq!(metro, &encode_uint24_le(807 * 1000 + 415)[..]);
}

#[test]
fn scenario_f_non_us_metro_area_is_zeroed() {
    let mut builder = DatBuilder::new(edition::CITY_REV1, Config::default());
    builder
        .insert(
            Ipv4Prefix::new(0x0100_0000, 24),
            Payload::City(CityRecord {
                country: "de".into(),
                region: "".into(),
                city: "".into(),
                postal_code: "".into(),
                latitude: 0.0,
                longitude: 0.0,
                metro_code: 807,
                area_code: 415,
            }),
        )
        .unwrap();
    let dat = builder.finish().unwrap();

    let offset = bitwalk_v4(&dat, edition::CITY_REV1.record_len, false, 0x0100_0001);
    let start = data_section_start(&dat, edition::CITY_REV1.record_len) + offset as usize - 1;
    // 1 country byte + three empty NUL-terminated strings ("", "", "") = 3 NULs.
    let after_strings = start + 1 + 3;
    let metro = &dat[after_strings + 6..after_strings + 9];
    assert_eq!(metro, &[0, 0, 0]);
}

#[test]
fn asn_and_isp_data_sections_are_identical_for_the_same_input() {
    let mut asn = DatBuilder::new(edition::ASN, Config::default());
    asn.insert(Ipv4Prefix::new(0x0100_0000, 24), Payload::Text("AS1234 X".into()))
        .unwrap();
    let asn_dat = asn.finish().unwrap();

    let mut isp = DatBuilder::new(edition::ISP, Config::default());
    isp.insert(Ipv4Prefix::new(0x0100_0000, 24), Payload::Text("AS1234 X".into()))
        .unwrap();
    let isp_dat = isp.finish().unwrap();

    assert_eq!(asn_dat[asn_dat.len() - 4], edition::ASN.edition_byte);
    assert_eq!(isp_dat[isp_dat.len() - 4], edition::ISP.edition_byte);

    let asn_data_start = data_section_start(&asn_dat, edition::ASN.record_len);
    let isp_data_start = data_section_start(&isp_dat, edition::ISP.record_len);
    assert_eq!(&asn_dat[asn_data_start..], &isp_dat[isp_data_start..]);
}

#[test]
fn write_to_path_is_atomic_and_round_trips() {
    let mut builder = DatBuilder::new(edition::ASN, Config::default());
    builder
        .insert(Ipv4Prefix::new(0x0100_0000, 24), Payload::Text("AS1234 X".into()))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("GeoIPASNum2.dat");
    builder.write_to_path(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes[bytes.len() - 4], edition::ASN.edition_byte);
}

#[test]
fn unknown_country_code_is_logged_and_recorded() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut builder = DatBuilder::new(edition::COUNTRY, Config::default());
    builder
        .insert(Ipv4Prefix::new(0x0100_0000, 24), Payload::Country("zz".into()))
        .unwrap();

    assert_eq!(builder.warnings().len(), 1);
    let idx = bitwalk_v4(&builder.finish().unwrap(), edition::COUNTRY.record_len, true, 0x0100_0001);
    assert_eq!(idx, 0);
}
