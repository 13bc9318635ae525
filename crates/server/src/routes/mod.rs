pub mod similarity;
pub mod system;
