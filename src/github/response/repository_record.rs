use serde::Deserialize;

/// One entry of a repository listing. Only the name is consumed, every
/// other field of the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
}

impl RepositoryRecord {
    pub fn new(name: impl Into<String>) -> Self {
        RepositoryRecord { name: name.into() }
    }
}
