pub mod condition;
pub mod operator;
pub mod order;
pub mod schema;
