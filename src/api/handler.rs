//! `POST /orders` handler

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::dto::{OrderFormDto, PlaceOrderErrorDto, PlaceOrderEventDto};
use crate::infrastructure::AppDependencies;
use crate::workflow::PlaceOrderError;

/// HTTP status for a workflow failure
#[must_use]
pub const fn status_for(error: &PlaceOrderError) -> StatusCode {
    match error {
        PlaceOrderError::Validation(_) | PlaceOrderError::Pricing(_) => StatusCode::BAD_REQUEST,
        PlaceOrderError::RemoteService(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Parses the body itself so that malformed JSON gets the error DTO shape
pub async fn place_order_handler(
    State(dependencies): State<AppDependencies>,
    body: String,
) -> Response {
    let form: OrderFormDto = match serde_json::from_str(&body) {
        Ok(form) => form,
        Err(error) => {
            tracing::debug!(%error, "rejecting malformed order body");
            return (
                StatusCode::BAD_REQUEST,
                Json(PlaceOrderErrorDto::malformed_body(error.to_string())),
            )
                .into_response();
        }
    };

    match dependencies.place_order(&form.to_unvalidated_order()).await {
        Ok(events) => (
            StatusCode::OK,
            Json(PlaceOrderEventDto::from_domain_list(&events)),
        )
            .into_response(),
        Err(error) => (
            status_for(&error),
            Json(PlaceOrderErrorDto::from_domain(&error)),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::{PricingError, RemoteServiceError, ServiceInfo, ValidationError};
    use rstest::rstest;

    #[rstest]
    #[case(ValidationError::new("bad").into(), StatusCode::BAD_REQUEST)]
    #[case(PricingError::new("too much").into(), StatusCode::BAD_REQUEST)]
    #[case(
        RemoteServiceError::new(ServiceInfo::new("Pricing", "https://pricing.example"), "down").into(),
        StatusCode::SERVICE_UNAVAILABLE
    )]
    fn maps_error_categories_to_status(#[case] error: PlaceOrderError, #[case] expected: StatusCode) {
        assert_eq!(status_for(&error), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let response =
            place_order_handler(State(AppDependencies::default()), "{ not json".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[tokio::test]
    async fn empty_form_fails_validation() {
        let response = place_order_handler(State(AppDependencies::default()), "{}".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
