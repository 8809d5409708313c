pub mod engagement;
pub mod post;
