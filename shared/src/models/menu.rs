//! Menu view and tagged menu objects

use serde::{Deserialize, Serialize};

use super::{Addon, Category, Item, Settings};

/// Everything a kiosk needs to render the menu
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Menu {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub addons: Vec<Addon>,
    #[serde(default)]
    pub settings: Settings,
}

impl Menu {
    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn find_addon(&self, id: &str) -> Option<&Addon> {
        self.addons.iter().find(|a| a.id == id)
    }

    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Items listed under a category, in menu order
    pub fn items_in_category<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a Item> {
        self.items
            .iter()
            .filter(move |i| i.category_ids.iter().any(|c| c == category_id))
    }
}

/// Collection selector for menu objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuObjectType {
    Category,
    Item,
    Addon,
}

impl MenuObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuObjectType::Category => "Category",
            MenuObjectType::Item => "Item",
            MenuObjectType::Addon => "Addon",
        }
    }
}

impl std::fmt::Display for MenuObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Item as sent by the management panel, optionally with a new image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload {
    #[serde(flatten)]
    pub item: Item,
    /// Base64 image (plain or data URL), replaces the current image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Menu object tagged by its collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MenuObject {
    Category(Category),
    Item(ItemPayload),
    Addon(Addon),
}

impl MenuObject {
    pub fn object_type(&self) -> MenuObjectType {
        match self {
            MenuObject::Category(_) => MenuObjectType::Category,
            MenuObject::Item(_) => MenuObjectType::Item,
            MenuObject::Addon(_) => MenuObjectType::Addon,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MenuObject::Category(c) => &c.name,
            MenuObject::Item(p) => &p.item.name,
            MenuObject::Addon(a) => &a.name,
        }
    }
}
