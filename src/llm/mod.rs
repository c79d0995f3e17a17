// LLM abstraction layer

pub mod groq;
pub mod provider;

pub use groq::GroqAdapter;
pub use provider::*;
