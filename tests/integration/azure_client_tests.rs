//! Azure client integration tests
//!
//! Verifies request shape (path, api-version, bearer token, body) and the
//! decoding of success and error responses.

#[cfg(test)]
mod tests {
    use crate::common::*;
    use serde_json::json;
    use smartcost_api::core::providers::azure::{
        COST_MANAGEMENT_API_VERSION, CostManagementClient, ExportType, ProviderError,
        QueryAggregation, QueryDataset, QueryDefinition, SUBSCRIPTION_API_VERSION,
        SubscriptionClient, Timeframe,
    };
    use smartcost_api::core::traits::{CostManagementApi, SubscriptionApi};
    use std::collections::BTreeMap;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn month_to_date() -> QueryDefinition {
        QueryDefinition {
            export_type: ExportType::Usage,
            timeframe: Timeframe::MonthToDate,
            time_period: None,
            dataset: QueryDataset {
                granularity: None,
                aggregation: BTreeMap::from([(
                    "totalCost".to_string(),
                    QueryAggregation::sum("PreTaxCost"),
                )]),
                grouping: vec![],
            },
        }
    }

    fn scope() -> String {
        format!("/subscriptions/{}", SUBSCRIPTION_ID)
    }

    #[tokio::test]
    async fn test_get_subscription() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/subscriptions/{}", SUBSCRIPTION_ID)))
            .and(query_param("api-version", SUBSCRIPTION_API_VERSION))
            .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(subscription_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = SubscriptionClient::new(arm_client(&server));
        let subscription = client.get_subscription(SUBSCRIPTION_ID).await.unwrap();

        assert_eq!(subscription.subscription_id, SUBSCRIPTION_ID);
        assert_eq!(subscription.display_name.as_deref(), Some("Contoso Production"));
        assert_eq!(subscription.state.as_deref(), Some("Enabled"));
    }

    #[tokio::test]
    async fn test_query_posts_definition() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(cost_management_path("query")))
            .and(query_param("api-version", COST_MANAGEMENT_API_VERSION))
            .and(body_partial_json(json!({
                "type": "Usage",
                "timeframe": "MonthToDate",
                "dataset": {
                    "aggregation": {"totalCost": {"name": "PreTaxCost", "function": "Sum"}}
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(resource_group_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = CostManagementClient::new(arm_client(&server));
        let result = client.query(&scope(), &month_to_date()).await.unwrap();

        assert_eq!(result.rows().len(), 3);
        assert_eq!(result.column_index(&["resourcegroupname"]), Some(1));
        assert!(!result.has_more());
    }

    #[tokio::test]
    async fn test_forecast_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(cost_management_path("forecast")))
            .and(query_param("api-version", COST_MANAGEMENT_API_VERSION))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .expect(1)
            .mount(&server)
            .await;

        let service = cost_service(&server);
        let forecast = service
            .get_cost_forecast(smartcost_api::Days::new(2).unwrap())
            .await
            .unwrap();

        assert_eq!(forecast.estimated_cost, 41.75);
        assert_eq!(forecast.currency, "USD");
    }

    #[tokio::test]
    async fn test_partial_page_is_returned() {
        let server = MockServer::start().await;
        let mut body = daily_query_body();
        body["properties"]["nextLink"] = json!("https://management.azure.com/next?skiptoken=abc");
        Mock::given(method("POST"))
            .and(path(cost_management_path("query")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = CostManagementClient::new(arm_client(&server));
        let result = client.query(&scope(), &month_to_date()).await.unwrap();
        assert!(result.has_more());
        assert_eq!(result.rows().len(), 3);
    }

    #[tokio::test]
    async fn test_arm_error_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(cost_management_path("query")))
            .respond_with(ResponseTemplate::new(403).set_body_json(arm_error_body(
                "AuthorizationFailed",
                "The client does not have authorization to perform action",
            )))
            .mount(&server)
            .await;

        let client = CostManagementClient::new(arm_client(&server));
        let err = client.query(&scope(), &month_to_date()).await.unwrap_err();

        assert_eq!(err.status(), Some(403));
        match err {
            ProviderError::Api { code, message, .. } => {
                assert_eq!(code, "AuthorizationFailed");
                assert!(message.contains("does not have authorization"));
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unauthorized_is_authentication_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(arm_error_body(
                "InvalidAuthenticationToken",
                "The access token is invalid",
            )))
            .mount(&server)
            .await;

        let client = SubscriptionClient::new(arm_client(&server));
        let err = client.get_subscription(SUBSCRIPTION_ID).await.unwrap_err();
        assert!(matches!(err, ProviderError::Authentication { .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parsing_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let client = SubscriptionClient::new(arm_client(&server));
        let err = client.get_subscription(SUBSCRIPTION_ID).await.unwrap_err();
        assert!(matches!(err, ProviderError::ResponseParsing { .. }));
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(subscription_body())
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client =
            SubscriptionClient::new(arm_client_with_timeout(&server, Duration::from_millis(200)));
        let err = client.get_subscription(SUBSCRIPTION_ID).await.unwrap_err();
        assert!(matches!(err, ProviderError::Timeout { .. }));
    }
}
