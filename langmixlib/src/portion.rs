//! Largest-remainder (Hamilton) apportionment.
//!
//! Rounding each language's fractional share independently can over- or
//! under-shoot the requested total. The largest-remainder method floors
//! every quota first, then hands the leftover units to the largest
//! fractional remainders, so the result always sums to the target exactly.

use std::collections::BTreeMap;

use crate::census::Census;
use crate::error::LangmixError;
use crate::Result;

/// Integer line budget per language, summing exactly to the requested total.
pub type Allocation = BTreeMap<String, u64>;

/// Apportion `total` units across `weights` with the largest-remainder method.
///
/// Pure over `(weights, total)`: no filesystem or language concept. Every
/// key of `weights` appears in the result; zero-weight keys get zero.
/// Quotas use exact integer arithmetic (`total * w / grand` with the
/// division remainder standing in for the fractional part), so the floors
/// never overshoot and the deficit is always below the number of non-zero
/// keys. Ties between equal remainders are broken by key order ascending;
/// that ordering is part of the contract, not an accident of iteration.
pub fn largest_remainder<K: Ord + Clone>(
    weights: &BTreeMap<K, u64>,
    total: u64,
) -> BTreeMap<K, u64> {
    let grand_total: u128 = weights.values().map(|&w| w as u128).sum();

    let mut allocations: BTreeMap<K, u64> = weights.keys().map(|k| (k.clone(), 0)).collect();
    if grand_total == 0 || total == 0 {
        return allocations;
    }

    let mut assigned: u64 = 0;
    let mut remainders: Vec<(u128, &K)> = Vec::new();

    for (key, &weight) in weights {
        if weight == 0 {
            continue;
        }
        let product = total as u128 * weight as u128;
        let floor = (product / grand_total) as u64;
        let remainder = product % grand_total;
        allocations.insert(key.clone(), floor);
        assigned += floor;
        remainders.push((remainder, key));
    }

    // 0 <= deficit < number of non-zero keys
    let deficit = total - assigned;
    remainders.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));

    for (_, key) in remainders.into_iter().take(deficit as usize) {
        if let Some(slot) = allocations.get_mut(key) {
            *slot += 1;
        }
    }

    allocations
}

/// Apportion `total` synthetic lines across the census languages.
///
/// Negative totals are rejected before any work is done. Languages with
/// zero recorded lines are present in the result with an explicit zero.
pub fn apportion(census: &Census, total: i64) -> Result<Allocation> {
    if total < 0 {
        return Err(LangmixError::InvalidTotal(total));
    }

    let weights: BTreeMap<String, u64> = census
        .languages
        .iter()
        .map(|(label, stat)| (label.clone(), stat.lines))
        .collect();

    Ok(largest_remainder(&weights, total as u64))
}
