//! Payment method request and response types.
//!
//! The SDK passes payment details through uninterpreted; the server
//! returns an identifier that is later referenced when placing an order.

use serde::{Deserialize, Serialize};

/// A payment method record, e.g. card details.
///
/// Not validated or stored by the client beyond pass-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub kind: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

/// Request body for `POST /payment-methods`.
///
/// The API nests the record under a `paymentMethod` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPaymentMethodRequest {
    pub payment_method: PaymentMethod,
}

/// Response returned after a payment method is registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodAdded {
    pub payment_method_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub expiry_date: String,
}
