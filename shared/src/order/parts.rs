//! Order part bookkeeping and price aggregation
//!
//! Every function returns a new value and leaves its input untouched.
//! References to menu objects that no longer exist are skipped.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::math::{lowest_missing_value, sum};
use super::money::{line_total, to_decimal, to_f64};
use crate::models::{Addon, Item, Order, OrderPart, PartPatch, PersonalInfo};

/// Append `part` with the lowest unused part id
pub fn add_part(order: &Order, part: OrderPart) -> Order {
    let used: Vec<u32> = order.parts.iter().map(|p| p.part_id).collect();
    let part_id = lowest_missing_value(&used);

    let mut next = order.clone();
    next.parts.push(OrderPart { part_id, ..part });
    next
}

/// Drop the part with `part_id`, unchanged copy if absent
pub fn remove_part(order: &Order, part_id: u32) -> Order {
    Order {
        parts: order
            .parts
            .iter()
            .filter(|p| p.part_id != part_id)
            .cloned()
            .collect(),
        ..order.clone()
    }
}

/// Shallow-merge `patch` into the part with `part_id`
pub fn change_part(order: &Order, part_id: u32, patch: &PartPatch) -> Order {
    Order {
        parts: order
            .parts
            .iter()
            .map(|p| {
                if p.part_id != part_id {
                    return p.clone();
                }
                OrderPart {
                    part_id,
                    item_id: patch.item_id.clone().unwrap_or_else(|| p.item_id.clone()),
                    quantity: patch.quantity.unwrap_or(p.quantity),
                    addon_ids: patch.addon_ids.clone().unwrap_or_else(|| p.addon_ids.clone()),
                    notes: patch.notes.clone().unwrap_or_else(|| p.notes.clone()),
                }
            })
            .collect(),
        ..order.clone()
    }
}

/// Shallow-merge customer details into the order
pub fn set_personal_info(order: &Order, info: &PersonalInfo) -> Order {
    let mut next = order.clone();
    if let Some(name) = &info.name {
        next.name = name.clone();
    }
    if let Some(notes) = &info.notes {
        next.notes = notes.clone();
    }
    if let Some(phone) = &info.phone {
        next.phone = phone.clone();
    }
    next
}

/// `quantity * (item.price + sum(addon.price))`
///
/// `None` while the item or the addon list is not available yet.
pub fn calculate_part_price<'a, I>(
    addons: Option<I>,
    item: Option<&Item>,
    quantity: u32,
) -> Option<f64>
where
    I: IntoIterator<Item = &'a Addon>,
{
    let item = item?;
    let addons = addons?;
    let addon_total = sum(addons.into_iter().map(|a| to_decimal(a.price)));
    let unit = to_decimal(item.price).saturating_add(addon_total);
    Some(to_f64(line_total(unit, quantity)))
}

/// `sum(item.price) + sum(addon.price)` over fully expanded lists
pub fn calculate_order_subtotal<'a, I, A>(items: I, addons: A) -> f64
where
    I: IntoIterator<Item = &'a Item>,
    A: IntoIterator<Item = &'a Addon>,
{
    let item_total = sum(items.into_iter().map(|i| to_decimal(i.price)));
    let addon_total = sum(addons.into_iter().map(|a| to_decimal(a.price)));
    to_f64(item_total.saturating_add(addon_total))
}

/// One entry per unit of quantity, missing items skipped
pub fn items_from_order<'a>(order: &Order, items: &'a [Item]) -> Vec<&'a Item> {
    let mut result = Vec::new();
    for part in &order.parts {
        let Some(item) = items.iter().find(|i| i.id == part.item_id) else {
            continue;
        };
        result.extend(std::iter::repeat_n(item, part.quantity as usize));
    }
    result
}

/// Each addon instance repeated once per unit of quantity, missing addons skipped
pub fn addons_from_order<'a>(order: &Order, addons: &'a [Addon]) -> Vec<&'a Addon> {
    let mut result = Vec::new();
    for part in &order.parts {
        for addon_id in &part.addon_ids {
            if let Some(addon) = addons.iter().find(|a| &a.id == addon_id) {
                result.extend(std::iter::repeat_n(addon, part.quantity as usize));
            }
        }
    }
    result
}

/// Expand an addon -> count selection into a flat list, in menu order
pub fn flatten_addons<'a>(
    selected: &HashMap<String, u32>,
    addons: &'a [Addon],
) -> Vec<&'a Addon> {
    addons
        .iter()
        .flat_map(|addon| {
            let count = selected.get(&addon.id).copied().unwrap_or(0);
            std::iter::repeat_n(addon, count as usize)
        })
        .collect()
}

/// Tax on `subtotal` at `tax_rate` percent, rounded to cents
pub fn calculate_tax(subtotal: f64, tax_rate: f64) -> f64 {
    to_f64(to_decimal(subtotal).saturating_mul(to_decimal(tax_rate)) / Decimal::ONE_HUNDRED)
}

/// Subtotal plus tax
pub fn calculate_order_total(subtotal: f64, tax_rate: f64) -> f64 {
    let tax = to_decimal(calculate_tax(subtotal, tax_rate));
    to_f64(to_decimal(subtotal).saturating_add(tax))
}
