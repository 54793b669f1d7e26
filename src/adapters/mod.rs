pub mod clipboard_arboard;
pub mod image_claude;
pub mod llm_command;
pub mod opener_system;
pub mod prompt_assets;
pub mod shortener_command;
pub mod state_filesystem;
pub mod subprocess;
pub mod transcript_http;
