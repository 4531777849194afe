//! Error handling integration tests
//!
//! Verifies that provider failures reach HTTP clients as `{detail, code}`
//! bodies with the right status, and that startup failures are configuration
//! errors.

#[cfg(test)]
mod tests {
    use crate::common::*;
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use smartcost_api::config::AzureConfig;
    use smartcost_api::services::cost::CostService;
    use smartcost_api::utils::error::ErrorResponse;
    use smartcost_api::{Days, SmartCostError};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn body_of(error: &SmartCostError) -> ErrorResponse {
        let bytes = to_bytes(error.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // ==================== Provider failures ====================

    #[actix_web::test]
    async fn test_throttling_surfaces_as_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(arm_error_body(
                "TooManyRequests",
                "Too many requests. Please retry.",
            )))
            .mount(&server)
            .await;

        let err = cost_service(&server)
            .get_cost_summary(Days::default())
            .await
            .unwrap_err();

        assert_eq!(err.status_code().as_u16(), 500);
        let body = body_of(&err).await;
        assert!(body.detail.starts_with("Error fetching cost summary: "));
        assert!(body.detail.contains("TooManyRequests"));
        assert_eq!(body.code, "SERVICE_ERROR");
    }

    #[actix_web::test]
    async fn test_each_operation_names_itself() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&server)
            .await;

        let service = cost_service(&server);
        let errors = [
            (
                service.get_subscription_info().await.unwrap_err(),
                "Error fetching subscription info: ",
            ),
            (
                service.get_cost_by_resource_group().await.unwrap_err(),
                "Error fetching costs by resource group: ",
            ),
            (
                service.get_cost_forecast(Days::default()).await.unwrap_err(),
                "Error fetching cost forecast: ",
            ),
        ];

        for (err, prefix) in errors {
            let body = body_of(&err).await;
            assert!(body.detail.starts_with(prefix), "{}", body.detail);
        }
    }

    #[actix_web::test]
    async fn test_empty_error_body_is_described() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = cost_service(&server)
            .get_subscription_info()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("empty response body"));
    }

    // ==================== Startup failures ====================

    #[tokio::test]
    async fn test_malformed_credential_fails_startup() {
        let mut config = AzureConfig::new("not a tenant!", CLIENT_ID, "secret", SUBSCRIPTION_ID);
        config.verify_on_startup = false;

        let err = CostService::connect(&config).await.unwrap_err();
        assert!(matches!(err, SmartCostError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error: "));
    }

    #[tokio::test]
    async fn test_connect_without_verification() {
        let mut config = test_config().azure;
        config.verify_on_startup = false;

        let service = CostService::connect(&config).await.unwrap();
        assert_eq!(service.subscription_id(), SUBSCRIPTION_ID);
    }
}
