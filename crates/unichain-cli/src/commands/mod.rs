pub mod invoke;
pub mod metadata;
