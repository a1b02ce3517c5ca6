// Core state and transport for the jobdeck job-portal terminal client:
// domain types, record-list editing, profile form aggregation, user-service API client.

pub mod api;
pub mod profile_form;
pub mod profile_loader;
pub mod record_list;
pub mod types;

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
