// Resume evaluation: prompt assembly, model call, response decoding, HTTP handler.
// All model calls go through llm_client; nothing here talks to Gemini directly.

pub mod evaluator;
pub mod handlers;
pub mod prompts;
