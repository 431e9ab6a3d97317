pub mod last_records;
pub mod models;
pub mod publish;
