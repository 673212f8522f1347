mod input;
mod renderer;

pub use input::{Command, InputError, parse_command};
pub use renderer::ConsoleRenderer;
