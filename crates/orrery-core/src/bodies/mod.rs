pub mod catalog;
pub mod hierarchy;
pub mod table;
