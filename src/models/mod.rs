pub mod directory;
pub mod heading;
pub mod user;
