use crate::app_config::AppConfig;
use crate::domain::{ReportQuery, ReportResult, ReportService};
use crate::geofencing::GeofenceError;
use crate::geofencing::domain::ReportResponse;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::{info, instrument};

/// Containment reports for a location. Every call is an independent request, there is no
/// de-duplication or retrying.
#[derive(Debug, Clone)]
pub struct ReportClient {
    client: Client,
    config: Arc<AppConfig>,
}

impl ReportClient {
    pub fn new(client: Client, config: Arc<AppConfig>) -> Self {
        ReportClient { client, config }
    }

    fn report_url(&self, query: &ReportQuery) -> String {
        format!("{}/{}", self.config.geofencing().report_url().trim_end_matches('/'), query.project_id())
    }
}

#[async_trait]
impl ReportService for ReportClient {
    #[instrument(skip_all, fields(project_id = %query.project_id(), range_m = query.range_meters()))]
    async fn obtain_report(&self, query: &ReportQuery) -> Result<ReportResult, GeofenceError> {
        query.validate()?;

        let location = query.location();
        info!("📡 Obtaining geofencing report for ({}, {})...", location.latitude, location.longitude);

        let point = format!("{},{}", location.longitude, location.latitude);
        let range = query.range_meters().to_string();
        let response = self
            .client
            .get(self.report_url(query))
            .query(&[("key", self.config.geofencing().api_key()), ("point", point.as_str()), ("range", range.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let report = ReportResult::from(response.json::<ReportResponse>().await?);
        info!(
            "📡 Obtaining geofencing report... OK, inside {} fence(s), outside {} fence(s)",
            report.inside().len(),
            report.outside().len()
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::domain::Location;
    use mockito::Matcher;
    use uuid::Uuid;

    const PROJECT_ID: &str = "7d6e9f3a-52c4-4b8a-9d41-0a3c5e2b1f60";

    fn query(range: &str) -> ReportQuery {
        ReportQuery::builder(Location::new(52.0, 21.0)).project(PROJECT_ID).range(range).build().unwrap()
    }

    #[tokio::test]
    async fn obtain_report_returns_the_partitioned_fences() -> Result<(), GeofenceError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", format!("/report/{}", PROJECT_ID).as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("key".to_string(), "key".to_string()),
                Matcher::UrlEncoded("point".to_string(), "21,52".to_string()),
                Matcher::UrlEncoded("range".to_string(), "250".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/report_response.json"))
            .create_async()
            .await;

        let config = AppConfigBuilder::new().geofencing_url(server.url()).build();
        let client = ReportClient::new(Client::new(), Arc::new(config));

        let report = client.obtain_report(&query("250")).await?;

        mock.assert();
        assert_eq!(report.inside().len(), 1);
        assert_eq!(report.inside()[0].id(), Uuid::parse_str("1c2a5e3b-6a2f-4f0e-9d1b-1f6a0b3c4d51").unwrap());
        assert_eq!(report.outside().len(), 1);
        assert_eq!(report.outside()[0].closest_point, Some(Location::new(52.2479, 21.0121)));

        Ok(())
    }

    #[tokio::test]
    async fn obtain_report_fails_on_an_error_status() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", format!("/report/{}", PROJECT_ID).as_str())
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().geofencing_url(server.url()).build();
        let client = ReportClient::new(Client::new(), Arc::new(config));

        let result = client.obtain_report(&query("250")).await;

        mock.assert();
        assert!(matches!(result, Err(GeofenceError::UnreachableService(_))), "unexpected result: {:?}", result);
    }

    #[tokio::test]
    async fn obtain_report_fails_on_an_unparsable_body() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", format!("/report/{}", PROJECT_ID).as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let config = AppConfigBuilder::new().geofencing_url(server.url()).build();
        let client = ReportClient::new(Client::new(), Arc::new(config));

        let result = client.obtain_report(&query("250")).await;

        assert!(matches!(result, Err(GeofenceError::UnreachableService(_))), "unexpected result: {:?}", result);
    }

    #[tokio::test]
    async fn obtain_report_fails_when_the_service_is_down() {
        let config = AppConfigBuilder::new().geofencing_url("http://127.0.0.1:1".to_string()).build();
        let client = ReportClient::new(Client::new(), Arc::new(config));

        let result = client.obtain_report(&query("250")).await;

        assert!(matches!(result, Err(GeofenceError::UnreachableService(_))), "unexpected result: {:?}", result);
    }
}
