pub mod file_change;
pub mod status_info;
