pub mod argsets;
pub mod command;
pub mod constants;
pub mod data_mgmt;
pub mod fetch;
pub mod interfaces;
pub mod settings;
