mod error;
mod filter;
mod query;
mod record;
mod store;

#[cfg(test)]
mod tests;

pub use error::QueryError;
pub use filter::{Period, RequestFilter, StatusRange};
pub use query::{QueryScope, ScopeSettings};
pub use record::{Attribute, Field, RequestRecord};
pub use store::{MemoryStore, RequestStore};
