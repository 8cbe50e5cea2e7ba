//! Data export in CSV, JSON, and YAML formats

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{
    export_income_csv, export_shared_expenses_csv, export_subscriptions_csv,
    export_transactions_csv,
};
pub use json::{export_json, DataSnapshot};
pub use yaml::export_yaml;
