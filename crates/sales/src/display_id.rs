//! Short, human-friendly order numbers printed on the order sheet.

use rand::Rng;

pub const MIN: u32 = 10_000;
pub const MAX: u32 = 99_999;

/// Random five-digit display id.
///
/// Not unique: the sheet also carries the full order id.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(MIN..=MAX).to_string()
}
