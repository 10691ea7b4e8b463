//! Order operations: sizes, shipping, payment methods, place/track/cancel.

use tracing::debug;

use super::{ClientError, SwagUpClient, parse_response};
use crate::objects::order::{
    OrderCancelled, OrderItem, OrderPlaced, OrderStatusReport, PlaceOrderRequest,
    SelectSizesRequest, SetShippingRequest, ShippingAddress, ShippingSet, SizesQuantitySet,
};
use crate::objects::payment::{AddPaymentMethodRequest, PaymentMethod, PaymentMethodAdded};

impl SwagUpClient {
    /// `POST /orders/sizes-quantity` – set the size/quantity line items for
    /// a design.
    pub async fn select_size_and_quantity(
        &self,
        design_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<SizesQuantitySet, ClientError> {
        let url = self.endpoint("/orders/sizes-quantity")?;
        let payload = SelectSizesRequest {
            design_id: design_id.into(),
            items,
        };
        debug!(design_id = %payload.design_id, items = payload.items.len(), "selecting sizes");

        let resp = self.post(url).json(&payload).send().await?;
        parse_response(resp).await
    }

    /// `POST /orders/shipping` – set the shipping destination for a design.
    pub async fn set_shipping_destination(
        &self,
        design_id: impl Into<String>,
        address: ShippingAddress,
    ) -> Result<ShippingSet, ClientError> {
        let url = self.endpoint("/orders/shipping")?;
        let payload = SetShippingRequest {
            design_id: design_id.into(),
            address,
        };
        debug!(design_id = %payload.design_id, "setting shipping destination");

        let resp = self.post(url).json(&payload).send().await?;
        parse_response(resp).await
    }

    /// `POST /payment-methods` – register a payment method.
    ///
    /// The returned identifier is what [`place_order`](Self::place_order)
    /// expects; the card details themselves are passed through untouched.
    pub async fn add_payment_method(
        &self,
        payment_method: PaymentMethod,
    ) -> Result<PaymentMethodAdded, ClientError> {
        let url = self.endpoint("/payment-methods")?;
        let payload = AddPaymentMethodRequest { payment_method };
        debug!("adding payment method");

        let resp = self.post(url).json(&payload).send().await?;
        parse_response(resp).await
    }

    /// `POST /orders` – place an order for a design using a previously
    /// registered payment method.
    pub async fn place_order(
        &self,
        design_id: impl Into<String>,
        payment_method_id: impl Into<String>,
    ) -> Result<OrderPlaced, ClientError> {
        let url = self.endpoint("/orders")?;
        let payload = PlaceOrderRequest {
            design_id: design_id.into(),
            payment_method_id: payment_method_id.into(),
        };
        debug!(design_id = %payload.design_id, "placing order");

        let resp = self.post(url).json(&payload).send().await?;
        parse_response(resp).await
    }

    /// `GET /orders/{id}` – fetch the current state of an order.
    pub async fn track_order(&self, order_id: &str) -> Result<OrderStatusReport, ClientError> {
        let url = self.endpoint(&format!("/orders/{order_id}"))?;
        debug!(order_id, "tracking order");

        let resp = self.get(url).send().await?;
        parse_response(resp).await
    }

    /// `DELETE /orders/{id}` – cancel an order.
    pub async fn cancel_order(&self, order_id: &str) -> Result<OrderCancelled, ClientError> {
        let url = self.endpoint(&format!("/orders/{order_id}"))?;
        debug!(order_id, "cancelling order");

        let resp = self.delete(url).send().await?;
        parse_response(resp).await
    }
}
