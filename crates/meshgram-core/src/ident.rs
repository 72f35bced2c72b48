// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Label derivation and digest utilities.

/// Canonical 256-bit digest produced by [`state_hash`](crate::state_hash).
pub type Hash = [u8; 32];

/// Derives the storage label of a hyperedge from its tag and members.
///
/// The label is the tag followed by each member label in construction order,
/// joined with `_`. It is order-sensitive on purpose: `E_a_b` and `E_b_a` are
/// distinct storage keys even though the two hyperedges compare equal.
pub fn hyperedge_label<'a, I>(tag: &str, members: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut label = String::from(tag);
    for member in members {
        label.push('_');
        label.push_str(member);
    }
    label
}

/// Hex-encodes the first eight bytes of a digest for log lines.
pub fn short_hash(hash: &Hash) -> String {
    hex::encode(&hash[..8])
}
