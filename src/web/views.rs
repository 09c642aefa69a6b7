// View models for template rendering
//
// Templates only ever see preformatted strings and flags; all price
// formatting and highlight decisions happen here, not in the templates.

use crate::cart::CartSnapshot;
use crate::categories::CATEGORY_IDS;
use crate::plant::{format_price, Plant};

/// One sidebar category button.
pub struct CategoryView {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// One plant card in the grid.
pub struct CardView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: String,
    pub price_label: String,
    /// Raw price carried through the add-to-cart form.
    pub price_value: String,
    pub description: String,
}

/// One plant in the detail modal.
pub struct ModalView {
    pub name: String,
    pub image: String,
    pub category: String,
    pub price_label: String,
    pub description: String,
}

/// One row in the cart panel.
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub qty: u32,
    pub unit_price: String,
    pub highlighted: bool,
}

/// Sidebar buttons with the active slug marked. An unknown slug simply
/// marks nothing active.
pub fn category_views(active_slug: &str) -> Vec<CategoryView> {
    CATEGORY_IDS
        .iter()
        .map(|id| CategoryView {
            id: id.as_str(),
            label: id.label(),
            active: id.as_str() == active_slug,
        })
        .collect()
}

pub fn card_views(plants: &[Plant]) -> Vec<CardView> {
    plants
        .iter()
        .map(|plant| CardView {
            id: plant.id.clone(),
            name: plant.name.clone(),
            image: plant.image.clone(),
            category: plant.category.clone(),
            price_label: format_price(plant.price),
            price_value: plant.price.to_string(),
            description: card_description(plant),
        })
        .collect()
}

pub fn modal_view(plant: &Plant) -> ModalView {
    // the modal prefers the long description, cards prefer the short one
    let description = if plant.description.is_empty() {
        plant.short_description.clone()
    } else {
        plant.description.clone()
    };

    ModalView {
        name: plant.name.clone(),
        image: plant.image.clone(),
        category: plant.category.clone(),
        price_label: format_price(plant.price),
        description,
    }
}

pub fn cart_line_views(snapshot: &CartSnapshot) -> Vec<CartLineView> {
    snapshot
        .lines
        .iter()
        .map(|line| CartLineView {
            id: line.id.clone(),
            name: line.name.clone(),
            qty: line.qty,
            unit_price: format_price(line.price),
            highlighted: snapshot.last_added_id.as_deref() == Some(line.id.as_str()),
        })
        .collect()
}

fn card_description(plant: &Plant) -> String {
    if plant.short_description.is_empty() {
        plant.description.clone()
    } else {
        plant.short_description.clone()
    }
}
