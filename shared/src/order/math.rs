//! Small helpers used by order bookkeeping

use rust_decimal::Decimal;

/// Smallest positive integer not present in `values`
///
/// Used for gap-filling id allocation: `[1, 2, 3, 5, 7, 12]` yields `4`,
/// an empty slice yields `1`. Input order does not matter.
pub fn lowest_missing_value(values: &[u32]) -> u32 {
    let mut candidate = 1;
    let mut sorted: Vec<u32> = values.iter().copied().filter(|v| *v > 0).collect();
    sorted.sort_unstable();
    sorted.dedup();
    for value in sorted {
        if value != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}

/// Sum of money amounts, saturating at the `Decimal` bounds
pub fn sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().fold(Decimal::ZERO, Decimal::saturating_add)
}
