//! Banner and interactive debug-mode prompt shown between the
//! preparation steps and the viewer launch.

use geest_core::api as core_api;

const BANNER: &str = "GEEST model pipeline";
const SEPARATOR: &str = "--------------------";

pub fn print_banner() {
    println!("{}", BANNER);
    println!("{}", SEPARATOR);
}

/// Ask whether the viewer should run with debug instrumentation, reading
/// one line from `input` (stdin in production).
///
/// There is no default: a closed input or an unrecognized answer is an
/// error, never silently treated as "no".
pub fn ask_debug_mode(
    input: &mut dyn std::io::BufRead,
) -> Result<core_api::DebugMode, core_api::CliError> {
    println!("Enable debug mode in the viewer?");
    println!("  1. yes  - launch with debug instrumentation");
    println!("  2. no   - launch normally");
    println!();

    print!("Enter choice (1-2): ");
    use std::io::Write;
    std::io::stdout().flush().unwrap();

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| core_api::CliError::Command(format!("Failed to read input: {}", e)))?;
    if read == 0 {
        // input closed before a choice was made
        return Err(core_api::CliError::from(
            core_api::PipelineError::PromptAborted,
        ));
    }

    parse_choice(&line).ok_or_else(|| {
        core_api::CliError::from(core_api::PipelineError::PromptAborted)
    })
}

/// Map raw prompt input to a debug selection. `None` means the answer was
/// not one of the offered options.
pub fn parse_choice(input: &str) -> Option<core_api::DebugMode> {
    match input.trim().to_ascii_lowercase().as_str() {
        "1" | "y" | "yes" => Some(core_api::DebugMode::Enabled),
        "2" | "n" | "no" => Some(core_api::DebugMode::Disabled),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geest_core::api::{CliError, DebugMode, PipelineError};
    use std::io::Cursor;

    #[test]
    fn yes_answers_enable_debug() {
        assert_eq!(parse_choice("1"), Some(DebugMode::Enabled));
        assert_eq!(parse_choice("y"), Some(DebugMode::Enabled));
        assert_eq!(parse_choice("yes"), Some(DebugMode::Enabled));
        assert_eq!(parse_choice("  YES \n"), Some(DebugMode::Enabled));
    }

    #[test]
    fn no_answers_disable_debug() {
        assert_eq!(parse_choice("2"), Some(DebugMode::Disabled));
        assert_eq!(parse_choice("n"), Some(DebugMode::Disabled));
        assert_eq!(parse_choice("No\n"), Some(DebugMode::Disabled));
    }

    #[test]
    fn anything_else_is_rejected_including_empty() {
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("\n"), None);
        assert_eq!(parse_choice("3"), None);
        assert_eq!(parse_choice("maybe"), None);
    }

    #[test]
    fn first_line_decides_the_mode() {
        let mut input = Cursor::new(&b"1\n2\n"[..]);
        assert_eq!(ask_debug_mode(&mut input).unwrap(), DebugMode::Enabled);
    }

    #[test]
    fn closed_input_aborts_the_prompt() {
        let mut input = Cursor::new(&b""[..]);
        let err = ask_debug_mode(&mut input).unwrap_err();
        assert!(matches!(
            err,
            CliError::Pipeline(PipelineError::PromptAborted)
        ));
    }

    #[test]
    fn unrecognized_answer_aborts_the_prompt() {
        let mut input = Cursor::new(&b"maybe\n"[..]);
        let err = ask_debug_mode(&mut input).unwrap_err();
        assert!(matches!(
            err,
            CliError::Pipeline(PipelineError::PromptAborted)
        ));
    }
}
