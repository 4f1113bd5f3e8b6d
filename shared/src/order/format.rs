//! Display form of an order with menu references resolved

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::math::sum;
use super::money::{line_total, to_decimal, to_f64};
use crate::models::{Addon, Item, Menu, Order};

/// Repeated addon collapsed into one entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonCount {
    #[serde(rename = "type")]
    pub addon: Addon,
    pub count: u32,
}

/// Order part with its item and grouped addons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedPart {
    #[serde(rename = "partID")]
    pub part_id: u32,
    pub item: Item,
    pub quantity: u32,
    pub addons: Vec<AddonCount>,
    pub notes: String,
}

impl FormattedPart {
    /// `quantity * (item.price + sum(addon.price * count))`
    pub fn price(&self) -> f64 {
        to_f64(self.price_decimal())
    }

    fn price_decimal(&self) -> Decimal {
        let addons = sum(
            self.addons
                .iter()
                .map(|a| line_total(to_decimal(a.addon.price), a.count)),
        );
        line_total(to_decimal(self.item.price).saturating_add(addons), self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedOrder {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub notes: String,
    pub timestamp: i64,
    pub finished: bool,
    pub parts: Vec<FormattedPart>,
    /// Sum of all part prices, before tax
    pub price: f64,
}

/// Group repeated ids, keeping first-appearance order
fn group_addons(addon_ids: &[String], menu: &Menu) -> Vec<AddonCount> {
    let mut grouped: Vec<AddonCount> = Vec::new();
    for id in addon_ids {
        let Some(addon) = menu.find_addon(id) else {
            continue;
        };
        match grouped.iter_mut().find(|g| g.addon.id == addon.id) {
            Some(existing) => existing.count += 1,
            None => grouped.push(AddonCount {
                addon: addon.clone(),
                count: 1,
            }),
        }
    }
    grouped
}

/// Resolve item and addon ids against `menu`
///
/// `None` if either side is missing. Parts whose item was deleted are left
/// out, as are deleted addons.
pub fn format_order(order: Option<&Order>, menu: Option<&Menu>) -> Option<FormattedOrder> {
    let order = order?;
    let menu = menu?;

    let parts: Vec<FormattedPart> = order
        .parts
        .iter()
        .filter_map(|part| {
            let item = menu.find_item(&part.item_id)?;
            Some(FormattedPart {
                part_id: part.part_id,
                item: item.clone(),
                quantity: part.quantity,
                addons: group_addons(&part.addon_ids, menu),
                notes: part.notes.clone(),
            })
        })
        .collect();

    let price = sum(parts.iter().map(FormattedPart::price_decimal));

    Some(FormattedOrder {
        id: order.id.clone(),
        name: order.name.clone(),
        phone: order.phone.clone(),
        notes: order.notes.clone(),
        timestamp: order.timestamp,
        finished: order.finished,
        parts,
        price: to_f64(price),
    })
}
