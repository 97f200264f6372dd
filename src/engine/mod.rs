pub mod llm_client;
pub mod prompt_builder;
