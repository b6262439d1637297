use super::{account::Account, handler::account_handler::AccountHandler};
use crate::{
    get,
    http::{Error, RawResponse},
};

pub const GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct GithubClient {
    api_url: String,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();

        GithubClient {
            api_url: api_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn account<'a>(&'a self, account: &'a Account) -> AccountHandler<'a> {
        AccountHandler::new(self, account)
    }

    pub fn repositories_url(&self, account: &Account, page: u32, per_page: u32) -> String {
        format!(
            "{}/{}/{}/repos?page={}&per_page={}",
            self.api_url,
            account.kind().path_segment(),
            account.name(),
            page,
            per_page
        )
    }

    pub(super) async fn list_repositories(
        &self,
        account: &Account,
        page: u32,
        per_page: u32,
    ) -> Result<RawResponse, Error> {
        let uri = self.repositories_url(account, page, per_page);

        log::info!("Getting repos with: GET {}", uri);

        get!(&uri)
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        GithubClient::new(GITHUB_API_URL)
    }
}
