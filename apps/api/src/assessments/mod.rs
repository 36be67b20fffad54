// Assessment submission workflow: validation, prediction, persistence of the
// ranked recommendations, and history/detail reads.

pub mod handlers;
pub mod service;
pub mod validation;
