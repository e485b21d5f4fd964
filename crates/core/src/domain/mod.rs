pub mod pantry;
pub mod recipe;
