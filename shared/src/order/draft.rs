//! Kiosk-side in-progress order

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::parts;
use crate::models::{Addon, Item, Menu, Order, OrderPart, PartPatch, PersonalInfo};

/// Local storage key the kiosk keeps its draft under
pub const DRAFT_STORAGE_KEY: &str = "current-order";

/// Order being built on a kiosk before submission
///
/// Owns the order until [`OrderDraft::into_order`] hands it to the server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderDraft {
    current: Order,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Order {
        &self.current
    }

    /// Returns the id assigned to the new part
    pub fn add_part(&mut self, part: OrderPart) -> u32 {
        self.current = parts::add_part(&self.current, part);
        self.current.parts.last().map(|p| p.part_id).unwrap_or_default()
    }

    /// Add `quantity` of `item` with an addon -> count selection
    pub fn add_selection(
        &mut self,
        item: &Item,
        quantity: u32,
        selected: &HashMap<String, u32>,
        addons: &[Addon],
    ) -> u32 {
        let addon_ids = parts::flatten_addons(selected, addons)
            .into_iter()
            .map(|a| a.id.clone())
            .collect();
        self.add_part(OrderPart::new(item.id.clone(), quantity, addon_ids))
    }

    pub fn remove_part(&mut self, part_id: u32) {
        self.current = parts::remove_part(&self.current, part_id);
    }

    pub fn change_part(&mut self, part_id: u32, patch: &PartPatch) {
        self.current = parts::change_part(&self.current, part_id, patch);
    }

    pub fn set_personal_info(&mut self, info: &PersonalInfo) {
        self.current = parts::set_personal_info(&self.current, info);
    }

    pub fn clear(&mut self) {
        self.current = Order::default();
    }

    pub fn is_empty(&self) -> bool {
        self.current.parts.is_empty()
    }

    /// Subtotal against the current menu, missing references skipped
    pub fn subtotal(&self, menu: &Menu) -> f64 {
        parts::calculate_order_subtotal(
            parts::items_from_order(&self.current, &menu.items),
            parts::addons_from_order(&self.current, &menu.addons),
        )
    }

    /// Subtotal plus tax at the menu's rate
    pub fn total(&self, menu: &Menu) -> f64 {
        parts::calculate_order_total(self.subtotal(menu), menu.settings.tax_rate)
    }

    /// Hand the order over for submission
    pub fn into_order(self) -> Order {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Settings;

    fn menu() -> Menu {
        Menu {
            categories: vec![],
            items: vec![Item {
                id: "burger".into(),
                name: "Burger".into(),
                description: String::new(),
                price: 5.0,
                image_id: None,
                category_ids: vec![],
                addon_ids: vec!["cheese".into()],
            }],
            addons: vec![Addon {
                id: "cheese".into(),
                name: "Cheese".into(),
                price: 0.5,
            }],
            settings: Settings { tax_rate: 10.0 },
        }
    }

    #[test]
    fn test_draft_lifecycle() {
        let menu = menu();
        let mut draft = OrderDraft::new();
        assert!(draft.is_empty());

        let selected = HashMap::from([("cheese".to_string(), 2)]);
        let first = draft.add_selection(&menu.items[0], 2, &selected, &menu.addons);
        let second = draft.add_selection(&menu.items[0], 1, &HashMap::new(), &menu.addons);
        assert_eq!((first, second), (1, 2));
        assert_eq!(draft.current().parts[0].addon_ids, vec!["cheese", "cheese"]);

        // 2 * (5 + 0.5 * 2) + 5
        assert_eq!(draft.subtotal(&menu), 17.0);
        assert_eq!(draft.total(&menu), 18.7);

        draft.remove_part(first);
        assert_eq!(draft.subtotal(&menu), 5.0);

        draft.set_personal_info(&PersonalInfo {
            name: Some("Sam".into()),
            ..Default::default()
        });
        let order = draft.clone().into_order();
        assert_eq!(order.name, "Sam");
        assert_eq!(order.parts.len(), 1);

        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft.current().name, "");
    }

    #[test]
    fn test_draft_serializes_as_plain_order() {
        let mut draft = OrderDraft::new();
        draft.add_part(OrderPart::new("burger", 1, vec![]));
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["parts"][0]["partID"], 1);
        let back: OrderDraft = serde_json::from_value(json).unwrap();
        assert_eq!(back, draft);
    }
}
