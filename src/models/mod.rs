mod kind;
mod month;
mod swatch;
mod transaction;

pub use kind::Kind;
pub use month::Month;
pub use swatch::Swatch;
pub use transaction::Transaction;
