//! Where posts come from

use std::future::Future;

use super::Post;
use crate::error::Result;

/// A read-only supplier of posts, ordered newest first.
///
/// The builder only depends on this trait so tests can hand it fixed data.
pub trait ContentSource {
    fn fetch_posts(&self) -> impl Future<Output = Result<Vec<Post>>> + Send;
}
