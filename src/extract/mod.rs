// Entity extractors: each consumes the navigator's outputs plus one or
// more raw endpoint documents and produces canonical entity instances.

pub mod accounts;
pub mod employers;
pub mod identity;
pub mod inquiries;
pub mod public_records;
pub mod scores;
