pub mod aggregate;
pub mod extract;
