//! Request and response bodies for subscription endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::product_prices::ProductPriceResponse;
use crate::application::handlers::subscription::SubscriptionDetails;
use crate::domain::foundation::{SubscriptionId, Timestamp, ValidationError};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscribeRequest {
    pub product_price_id: Option<String>,
}

impl SubscribeRequest {
    /// The requested price id, trimmed. Absent or blank ids are violations;
    /// whether a present id names an existing price is decided later.
    pub fn product_price_id(&self) -> Result<&str, Vec<ValidationError>> {
        match self.product_price_id.as_deref().map(str::trim) {
            None | Some("") => Err(vec![ValidationError::empty_field("productPriceId")]),
            Some(raw) => Ok(raw),
        }
    }
}

/// A subscription as rendered to clients. `endDate` is omitted while open.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponse {
    pub id: SubscriptionId,
    pub product_price: ProductPriceResponse,
    pub start_date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
}

impl From<SubscriptionDetails> for SubscriptionResponse {
    fn from(details: SubscriptionDetails) -> Self {
        Self {
            id: details.subscription.id(),
            product_price: details.product_price.into(),
            start_date: details.subscription.start_date(),
            end_date: details.subscription.end_date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{PricePeriod, ProductPrice};
    use crate::domain::foundation::{ProductId, UserId};
    use crate::domain::subscription::Subscription;
    use serde_json::json;

    fn details(end: Option<&str>) -> SubscriptionDetails {
        let price = ProductPrice::create(ProductId::new(), PricePeriod::Monthly, 999).unwrap();
        let mut subscription = Subscription::start(
            UserId::new(),
            price.id,
            Timestamp::parse_rfc3339("2026-01-05T10:00:00Z").unwrap(),
        );
        if let Some(end) = end {
            subscription.terminate(Timestamp::parse_rfc3339(end).unwrap());
        }
        SubscriptionDetails {
            subscription,
            product_price: price,
        }
    }

    #[test]
    fn subscribe_request_requires_price_id() {
        for body in [json!({}), json!({ "productPriceId": "" }), json!({ "productPriceId": " " })] {
            let req: SubscribeRequest = serde_json::from_value(body).unwrap();
            let errors = req.product_price_id().unwrap_err();
            assert_eq!(errors[0].field(), "productPriceId");
        }
    }

    #[test]
    fn subscribe_request_keeps_malformed_id_for_lookup() {
        let req: SubscribeRequest =
            serde_json::from_value(json!({ "productPriceId": " garbage " })).unwrap();
        assert_eq!(req.product_price_id(), Ok("garbage"));
    }

    #[test]
    fn open_subscription_omits_end_date() {
        let value = serde_json::to_value(SubscriptionResponse::from(details(None))).unwrap();

        assert!(value.get("endDate").is_none());
        assert_eq!(value["startDate"], "2026-01-05T10:00:00Z");
        assert_eq!(value["productPrice"]["pricePeriod"], "monthly");
    }

    #[test]
    fn terminated_subscription_renders_end_date() {
        let value = serde_json::to_value(SubscriptionResponse::from(details(Some(
            "2026-03-05T00:00:00Z",
        ))))
        .unwrap();

        assert_eq!(value["endDate"], "2026-03-05T00:00:00Z");
    }
}
