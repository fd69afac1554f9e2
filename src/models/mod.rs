mod category;
mod direction;
mod transaction;

pub use category::Category;
pub use direction::Direction;
pub use transaction::{Transaction, TransactionId};
