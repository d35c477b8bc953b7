pub mod extract;
pub mod json;
