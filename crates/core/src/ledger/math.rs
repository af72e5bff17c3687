//! Tolerance-based amount comparison.
//!
//! Balance and equation checks compare aggregated amounts against a fixed
//! rounding tolerance rather than exact equality, so that totals assembled
//! from many sub-ledger rows are not rejected over sub-cent residue.

use rust_decimal::Decimal;

/// The rounding tolerance applied by every validator: 0.01.
#[must_use]
pub fn tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// Returns true if `a` and `b` are equal within the rounding tolerance.
#[must_use]
pub fn within_tolerance(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < tolerance()
}

/// Returns true if `delta` is large enough to matter, i.e. at or above the
/// rounding tolerance in magnitude.
#[must_use]
pub fn is_material(delta: Decimal) -> bool {
    delta.abs() >= tolerance()
}
