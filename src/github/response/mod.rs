mod repository_record;

pub use repository_record::RepositoryRecord;
