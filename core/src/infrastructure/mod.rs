pub mod capture;
pub mod export;
pub mod llm;
