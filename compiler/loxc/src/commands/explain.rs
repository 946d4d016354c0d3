//! The `explain` command: show the documentation for an error code.

use lox_diagnostic::{ErrorCode, ErrorDocs};

pub fn explain_error(code_str: &str) -> u8 {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes look like E0001: a letter E followed by four digits.");
        let known: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        eprintln!("Known codes: {}", known.join(", "));
        return crate::EXIT_USAGE;
    };

    match ErrorDocs::get(code) {
        Some(doc) => {
            println!("{doc}");
            0
        }
        None => {
            eprintln!("No documentation available for {code}");
            1
        }
    }
}
