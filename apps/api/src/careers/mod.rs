// Career catalogue: static reference requirements and the `career_details`
// table seeded from them.

pub mod catalog;
pub mod handlers;
pub mod reference;
