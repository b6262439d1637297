use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    #[serde(alias = "user")]
    Users,
    #[serde(alias = "org", alias = "organization")]
    Orgs,
}

impl AccountKind {
    /// Path segment used by the GitHub API for this kind of account
    pub fn path_segment(&self) -> &str {
        match self {
            AccountKind::Users => "users",
            AccountKind::Orgs => "orgs",
        }
    }
}

impl Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

/// A GitHub user or organization whose repositories get scanned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    kind: AccountKind,
    name: String,
}

impl Account {
    pub fn new(kind: AccountKind, name: impl Into<String>) -> Self {
        Account {
            kind,
            name: name.into(),
        }
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_a_new_account() {
        let account = Account::new(AccountKind::Users, "cookpa");

        assert_eq!(account.kind(), AccountKind::Users);
        assert_eq!(account.name(), "cookpa");
    }

    #[test]
    fn should_render_the_api_path_segment() {
        assert_eq!(AccountKind::Users.path_segment(), "users");
        assert_eq!(AccountKind::Orgs.path_segment(), "orgs");
        assert_eq!(
            Account::new(AccountKind::Orgs, "pennBBL").to_string(),
            "orgs/pennBBL"
        );
    }

    #[test]
    fn should_accept_kind_aliases() -> Result<(), Box<dyn std::error::Error>> {
        let kinds: Vec<AccountKind> =
            serde_yaml::from_str("[users, user, orgs, org, organization]")?;

        assert_eq!(
            kinds,
            vec![
                AccountKind::Users,
                AccountKind::Users,
                AccountKind::Orgs,
                AccountKind::Orgs,
                AccountKind::Orgs
            ]
        );
        Ok(())
    }
}
