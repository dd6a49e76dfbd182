use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, ClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(config.geofencing().request_timeout())
        .default_headers(headers)
        .build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
