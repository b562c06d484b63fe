//! Player inputs and the collaborators that collect them

mod data;
pub mod prompt;
pub mod slate;

pub use data::PlayerInputs;
pub use prompt::Prompter;
pub use slate::{load_slate, load_slate_from_reader, write_slate, SlateRow};

/// Parse a yes/no answer
///
/// Accepts `1/0`, `y/n`, `yes/no` and `true/false`, case-insensitively.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "y" | "yes" | "true" => Some(true),
        "0" | "n" | "no" | "false" => Some(false),
        _ => None,
    }
}
