//! Login collaborators

pub mod seeded;


pub use seeded::SeededUserDirectory;
