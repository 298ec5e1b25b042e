pub mod calculus;
pub mod linalg;
pub mod probability;
pub mod report;
pub mod security;
