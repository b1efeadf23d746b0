//! Ordered map merging.

use indexmap::IndexMap;

/// Merge `overlay` into `base`.
///
/// Values from `overlay` win on key collision, but the insertion order of
/// `base` is preserved; keys new to `base` are appended in overlay order.
/// Emitted configuration stays diff-friendly because key order never shifts
/// when only values change.
pub fn merge(base: &mut IndexMap<String, String>, overlay: &IndexMap<String, String>) {
    for (key, value) in overlay {
        base.insert(key.clone(), value.clone());
    }
}
