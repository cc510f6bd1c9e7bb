pub mod header;
pub mod patient;
