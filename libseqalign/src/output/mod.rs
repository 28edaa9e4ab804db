pub mod output_json;
pub mod output_standard;
pub mod output_tabular;
