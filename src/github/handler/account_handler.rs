use crate::github::{
    account::Account, builder::list_repositories_builder::ListRepositoriesBuilder,
    github_client::GithubClient,
};

pub struct AccountHandler<'a> {
    client: &'a GithubClient,
    account: &'a Account,
}

impl<'a> AccountHandler<'a> {
    pub fn new(client: &'a GithubClient, account: &'a Account) -> Self {
        AccountHandler { client, account }
    }

    pub fn repos(&self) -> ListRepositoriesBuilder<'a> {
        ListRepositoriesBuilder::new(self.client, self.account)
    }
}
