use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, RequestBuilder,
};
use std::ops::Deref;
use thiserror::Error;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT_NAME: &str = "reposcanner";

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn default_headers(self) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self) -> RequestBuilder {
        self.header(ACCEPT, GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT, USER_AGENT_NAME)
    }
}

/// Status and untouched body of a response, before any interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn ensure_success(&self) -> Result<(), Error> {
        if self.is_success() {
            return Ok(());
        }

        Err(Error::UnexpectedStatus {
            status: self.status,
            message: self.body.trim().to_owned(),
        })
    }
}

pub trait ResponseHandler {
    async fn handle(self) -> Result<RawResponse, Error>;
}

impl ResponseHandler for reqwest::Result<reqwest::Response> {
    async fn handle(self) -> Result<RawResponse, Error> {
        let response = self.map_err(|cause| Error::RequestError { cause })?;
        let status = response.status().as_u16();

        let body = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        Ok(RawResponse { status, body })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to send request")]
    RequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Unexpected response status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}
