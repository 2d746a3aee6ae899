//! Domain entities - the core business objects.

mod comment;
mod post;
mod principal;

pub use comment::Comment;
pub use post::{Post, PostContent};
pub use principal::Principal;
