use super::*;

#[test]
fn test_every_code_is_documented() {
    for code in ErrorCode::ALL {
        assert!(ErrorDocs::has_docs(code), "{code} has no docs");
    }
    assert_eq!(ErrorDocs::all_codes().count(), ErrorCode::ALL.len());
}

#[test]
fn test_doc_heading_names_the_code() {
    for code in ErrorDocs::all_codes() {
        let doc = ErrorDocs::get(code).unwrap_or_default();
        assert!(
            doc.starts_with(&format!("# {code}:")),
            "{code} doc should open with its heading"
        );
    }
}

#[test]
fn test_invalid_assignment_doc() {
    let doc = ErrorDocs::get(ErrorCode::E1004).unwrap_or_default();
    assert!(doc.contains("Invalid Assignment Target"));
    assert!(doc.contains("1 + 2 = 3;"));
}
