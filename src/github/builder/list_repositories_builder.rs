use super::BuilderExecutor;
use crate::{
    github::{account::Account, github_client::GithubClient, MAX_PER_PAGE},
    http::RawResponse,
};
use anyhow::Result;

pub struct ListRepositoriesBuilder<'a> {
    client: &'a GithubClient,
    account: &'a Account,
    page: u32,
    per_page: u32,
}

impl<'a> ListRepositoriesBuilder<'a> {
    pub fn new(client: &'a GithubClient, account: &'a Account) -> Self {
        ListRepositoriesBuilder {
            client,
            account,
            page: 1,
            per_page: MAX_PER_PAGE,
        }
    }

    /// 1-based page index
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }
}

impl BuilderExecutor for ListRepositoriesBuilder<'_> {
    type Output = RawResponse;

    async fn execute(self) -> Result<Self::Output> {
        let response = self
            .client
            .list_repositories(self.account, self.page, self.per_page)
            .await?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::account::AccountKind;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn should_request_the_configured_page() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = GithubClient::new(server.url());
        let account = Account::new(AccountKind::Orgs, "pennBBL");

        let m = server
            .mock("GET", "/orgs/pennBBL/repos")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "3".into()),
                Matcher::UrlEncoded("per_page".into(), "50".into()),
            ]))
            .with_body("[{\"name\":\"a\"}]")
            .create_async()
            .await;

        let response = client
            .account(&account)
            .repos()
            .page(3)
            .per_page(50)
            .execute()
            .await?;

        m.assert_async().await;
        assert_eq!(response.body, "[{\"name\":\"a\"}]");

        Ok(())
    }

    #[tokio::test]
    async fn should_default_to_first_page_of_max_size() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = GithubClient::new(server.url());
        let account = Account::new(AccountKind::Users, "alice");

        let m = server
            .mock("GET", "/users/alice/repos")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("per_page".into(), "100".into()),
            ]))
            .with_body("[]")
            .create_async()
            .await;

        client.account(&account).repos().per_page(500).execute().await?;

        m.assert_async().await;

        Ok(())
    }
}
