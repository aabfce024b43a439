//! Service layer: page store operations, content seeding, upstream auth.

pub mod content;
pub mod page;
pub mod upstream;
