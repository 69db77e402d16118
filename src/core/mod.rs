pub mod commands;
pub mod env;
pub mod tokenizer;
