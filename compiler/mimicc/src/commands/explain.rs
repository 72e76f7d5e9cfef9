//! The `explain` command: documentation for an error code.

use mimic_diagnostic::{ErrorCode, ErrorDocs};

/// Print the documentation for `code_str`. Returns the exit code.
pub fn explain_error(code_str: &str) -> i32 {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format MXXXX where X is a digit.");
        eprintln!("Examples: M0001, M0004, M0101");
        return 1;
    };

    if let Some(doc) = ErrorDocs::get(code) {
        println!("{doc}");
        0
    } else {
        eprintln!("No documentation available for {code}");
        eprintln!();
        eprintln!("Summary: {}", code.summary());
        1
    }
}
