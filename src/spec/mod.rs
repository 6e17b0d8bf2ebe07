pub mod assertion;
pub mod schema;

pub use assertion::*;
pub use schema::*;
