// Seeded value generator.
//
// A linear congruential transform of a per-player seed. The output is stable
// per player and per range; it is not a statistical RNG and must not be
// replaced by one, since every derived metric depends on its exact values.

use crate::player::PlayerRecord;

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233280;

/// Seed for a player: the first UTF-16 code unit of the id plus the overall
/// rating. An empty id contributes zero.
pub fn seed_for(record: &PlayerRecord) -> u64 {
    let first = record.id.encode_utf16().next().map_or(0, u64::from);
    first + u64::from(record.overall)
}

/// The LCG draw for `seed`, normalized to [0, 1).
pub fn unit_value(seed: u64) -> f64 {
    let raw = seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) % MODULUS;
    raw as f64 / MODULUS as f64
}

/// Deterministic value in [min, max) for the given seed.
pub fn seeded_value(seed: u64, min: f64, max: f64) -> f64 {
    min + unit_value(seed) * (max - min)
}
