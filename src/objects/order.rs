//! Order request and response types.
//!
//! Sizes, shipping, and the order itself all hang off a design identifier
//! that must already exist server-side; the client performs no local
//! existence checks and failure surfaces as a `NotFound` error.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One (size, quantity) line item.
///
/// The size label is an opaque string; the server owns the valid set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub size: String,
    pub quantity: u32,
}

/// A shipping destination.  Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub recipient_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip: String,
}

/// Request body for `POST /orders/sizes-quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectSizesRequest {
    pub design_id: String,
    pub items: Vec<OrderItem>,
}

/// Request body for `POST /orders/shipping`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetShippingRequest {
    pub design_id: String,
    pub address: ShippingAddress,
}

/// Request body for `POST /orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub design_id: String,
    pub payment_method_id: String,
}

/// Response returned after sizes and quantities are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizesQuantitySet {
    pub design_id: String,
    pub items: Vec<OrderItem>,
}

/// Response returned after the shipping destination is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingSet {
    pub design_id: String,
    pub address: ShippingAddress,
}

/// Response returned after an order is placed.
///
/// `status` is controlled by the server (`"Processing"`, `"Shipped"`,
/// `"Cancelled"`, …) and is deliberately left as a free string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPlaced {
    pub order_id: String,
    pub design_id: String,
    pub payment_method_id: String,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Current order state returned by `GET /orders/{id}`.
///
/// The client holds no order state locally; every read re-fetches this
/// record from the server.  Shipping and delivery fields appear only once
/// the order has progressed far enough to have them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusReport {
    pub order_id: String,
    pub design_id: String,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<OffsetDateTime>,
}

/// Response returned after an order is cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCancelled {
    pub order_id: String,
    pub status: String,
}
