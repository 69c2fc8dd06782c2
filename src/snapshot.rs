//! Reference snapshot fingerprint.
//!
//! A stable digest over the watchlist and country table. It is logged with
//! every batch so a decision list can be tied back to the exact reference
//! data that produced it. Country iteration is sorted by code and every
//! field is length-prefixed, so the digest does not depend on hash-map
//! order or on field boundaries.

use blake3::Hasher;

use crate::country::CountryTable;
use crate::watchlist::Watchlist;

fn update_str(h: &mut Hasher, s: &str) {
    h.update(&(s.len() as u64).to_le_bytes());
    h.update(s.as_bytes());
}

/// Digest of the reference data, as lowercase hex.
#[must_use]
pub fn fingerprint(watchlist: &Watchlist, countries: &CountryTable) -> String {
    let mut h = Hasher::new();

    h.update(b"watchlist");
    h.update(&(watchlist.len() as u64).to_le_bytes());
    for entry in watchlist.as_slice() {
        update_str(&mut h, &entry.passport);
        update_str(&mut h, &entry.first_name);
        update_str(&mut h, &entry.last_name);
    }

    h.update(b"countries");
    h.update(&(countries.len() as u64).to_le_bytes());
    for (code, policy) in countries.sorted() {
        update_str(&mut h, code);
        update_str(&mut h, &policy.medical_advisory);
        h.update(&[
            u8::from(policy.visitor_visa_required),
            u8::from(policy.transit_visa_required),
        ]);
    }

    h.finalize().to_hex().to_string()
}
