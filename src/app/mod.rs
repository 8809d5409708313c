pub mod index;
pub mod post;
