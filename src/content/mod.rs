//! Content loading and models

pub mod post;
pub mod store;

pub use post::{BlogPost, BlogSummary, NewsSource, Status};
pub use store::{ContentStore, StoreError};
