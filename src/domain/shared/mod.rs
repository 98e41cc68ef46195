pub mod llm_text;
