//! The `explain` command: display documentation for error codes.

use plate_diagnostic::{ErrorCode, ErrorDocs};

use super::EXIT_ERROR;

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str) {
    let Some(code) = code_str.parse::<ErrorCode>().ok() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E1001, E1006, E5002");
        std::process::exit(EXIT_ERROR);
    };

    if let Some(doc) = ErrorDocs::get(code) {
        println!("{doc}");
    } else {
        eprintln!("No documentation available for {code_str}");
        eprintln!();
        eprintln!("Documented codes:");
        for code in ErrorDocs::all_codes() {
            eprintln!("  {code}");
        }
        std::process::exit(EXIT_ERROR);
    }
}
