// hamper/src/model/order.rs

//! The checkout handoff shape. The cart core never submits an order itself;
//! at checkout time the consuming page builds an [`OrderDraft`] from the
//! current cart snapshot and submits it through whatever order API the
//! application uses. Clearing the cart after a successful submission is the
//! page's responsibility.

use crate::model::line_item::LineItem;

use serde::Serialize;
use uuid::Uuid;

/// One line of an outgoing order payload, flattened from a [`LineItem`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderLine {
  pub product_id: Uuid,
  pub name: String,
  pub image: Option<String>,
  pub price_cents: i64,
  pub quantity: u32,
}

impl From<&LineItem> for OrderLine {
  fn from(item: &LineItem) -> Self {
    Self {
      product_id: item.product_id,
      name: item.product.name.clone(),
      image: item.product.image.clone(),
      price_cents: item.price_cents,
      quantity: item.quantity,
    }
  }
}

/// The full order payload a checkout page submits.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderDraft {
  pub items: Vec<OrderLine>,
  pub total_amount_cents: i64,
  pub delivery_address: String,
  pub payment_method: String,
}

impl OrderDraft {
  /// Builds a draft from a cart snapshot. The total is recomputed from the
  /// pinned line prices, so it always agrees with the items it accompanies.
  pub fn from_items(items: &[LineItem], delivery_address: impl Into<String>, payment_method: impl Into<String>) -> Self {
    Self {
      items: items.iter().map(OrderLine::from).collect(),
      total_amount_cents: items.iter().map(LineItem::line_total_cents).sum(),
      delivery_address: delivery_address.into(),
      payment_method: payment_method.into(),
    }
  }
}
