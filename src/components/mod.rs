pub mod user_directory;
pub mod user_table;
