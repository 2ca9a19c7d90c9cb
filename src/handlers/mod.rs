// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! HTTP handlers for the feedback API.

pub mod feedback;
pub use feedback::{create_feedback_http, list_feedback_http};
