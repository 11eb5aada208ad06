pub mod openai; // OpenAI vision service

pub use openai::{DishAnalysis, OpenAiVisionService};
