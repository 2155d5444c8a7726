pub mod career;
pub mod grade;
pub mod profile;
pub mod subject;
