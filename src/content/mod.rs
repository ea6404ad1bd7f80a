//! Content module - post model and the sources posts are fetched from

mod post;
mod source;
mod supabase;

pub use post::Post;
pub use source::ContentSource;
pub use supabase::SupabaseSource;
