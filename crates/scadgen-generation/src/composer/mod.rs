//! Generation prompt assembly.

mod prompt;
pub mod rules;
mod system_message;

pub use prompt::PromptComposer;
pub use system_message::system_prompt;
