//! IP prefix types and range-to-CIDR summarization.

use ipnet::{Ipv4Net, Ipv6Net};
use std::net::{Ipv4Addr, Ipv6Addr};

/// An IPv4 network: an address plus the number of significant leading bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Prefix {
    /// Network address, host bits zeroed.
    pub address: u32,
    /// Prefix length, `1..=32`.
    pub prefix_len: u8,
}

impl Ipv4Prefix {
    /// Build a prefix, masking off any host bits in `address`.
    pub fn new(address: u32, prefix_len: u8) -> Self {
        let mask = if prefix_len == 0 {
            0
        } else {
            !0u32 << (32 - prefix_len)
        };
        Self {
            address: address & mask,
            prefix_len,
        }
    }
}

impl From<Ipv4Net> for Ipv4Prefix {
    fn from(net: Ipv4Net) -> Self {
        Self::new(u32::from(net.network()), net.prefix_len())
    }
}

impl std::fmt::Display for Ipv4Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", Ipv4Addr::from(self.address), self.prefix_len)
    }
}

/// An IPv6 network: an address plus the number of significant leading bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv6Prefix {
    /// Network address, host bits zeroed.
    pub address: u128,
    /// Prefix length, `1..=128`.
    pub prefix_len: u8,
}

impl Ipv6Prefix {
    /// Build a prefix, masking off any host bits in `address`.
    pub fn new(address: u128, prefix_len: u8) -> Self {
        let mask = if prefix_len == 0 {
            0
        } else {
            !0u128 << (128 - prefix_len)
        };
        Self {
            address: address & mask,
            prefix_len,
        }
    }
}

impl From<Ipv6Net> for Ipv6Prefix {
    fn from(net: Ipv6Net) -> Self {
        Self::new(u128::from(net.network()), net.prefix_len())
    }
}

impl std::fmt::Display for Ipv6Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", Ipv6Addr::from(self.address), self.prefix_len)
    }
}

/// Number of trailing zero bits in `addr` below `max_bits`, capped so the
/// resulting block never exceeds `max_bits` total width.
fn max_block_bits(addr: u128, max_bits: u32) -> u32 {
    if addr == 0 {
        return max_bits;
    }
    addr.trailing_zeros().min(max_bits)
}

/// Summarize the inclusive range `[lo, hi]` as the minimal ordered list of
/// CIDR prefixes that exactly cover it.
///
/// This is the classical greedy algorithm used by `ipaddr.summarize_address_range`
/// in the reference implementation: repeatedly take the largest
/// power-of-two-aligned block starting at the current low bound that does
/// not overshoot `hi`, then advance past it.
pub fn summarize_range_v4(lo: u32, hi: u32) -> Vec<Ipv4Prefix> {
    summarize_range_generic(lo as u128, hi as u128, 32)
        .into_iter()
        .map(|(addr, len)| Ipv4Prefix::new(addr as u32, len))
        .collect()
}

/// IPv6 counterpart of [`summarize_range_v4`].
pub fn summarize_range_v6(lo: u128, hi: u128) -> Vec<Ipv6Prefix> {
    summarize_range_generic(lo, hi, 128)
        .into_iter()
        .map(|(addr, len)| Ipv6Prefix::new(addr, len))
        .collect()
}

fn summarize_range_generic(lo: u128, hi: u128, bits: u32) -> Vec<(u128, u8)> {
    assert!(lo <= hi);
    let mut out = Vec::new();
    let mut cur = lo;
    loop {
        let by_alignment = max_block_bits(cur, bits);
        // How many low bits can we cover without passing `hi`?
        let remaining = hi - cur;
        let by_budget = if remaining == u128::MAX {
            bits
        } else {
            (128 - (remaining + 1).leading_zeros()).saturating_sub(1).min(bits)
        };
        let block_bits = by_alignment.min(by_budget);
        let prefix_len = bits - block_bits;
        out.push((cur, prefix_len as u8));

        if block_bits >= 128 {
            // The block spans the entire remaining address space (only
            // possible for the full `::/0` range): `1u128 << 128` would
            // overflow the shift, but there's nothing left to cover anyway.
            break;
        }
        let block_size = 1u128 << block_bits;
        if let Some(next) = cur.checked_add(block_size) {
            if next > hi {
                break;
            }
            cur = next;
        } else {
            break;
        }
    }
    out
}
