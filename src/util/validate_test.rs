use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn valid_email_accepted() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("  padded@example.co.uk  "));
}

#[test]
fn email_without_at_rejected() {
    assert!(!is_valid_email("example.com"));
}

#[test]
fn email_without_domain_dot_rejected() {
    assert!(!is_valid_email("user@localhost"));
}

#[test]
fn email_with_empty_parts_rejected() {
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("user@example."));
}

#[test]
fn email_with_whitespace_rejected() {
    assert!(!is_valid_email("us er@example.com"));
}

// =============================================================
// Password rules and strength
// =============================================================

#[test]
fn password_rules_require_all_classes() {
    assert!(password_meets_rules("Abcdef12"));
    assert!(!password_meets_rules("abcdef12"));
    assert!(!password_meets_rules("ABCDEF12"));
    assert!(!password_meets_rules("Abcdefgh"));
    assert!(!password_meets_rules("Ab1"));
}

#[test]
fn password_strength_scores_each_class() {
    assert_eq!(password_strength(""), 0);
    assert_eq!(password_strength("abc"), 25);
    assert_eq!(password_strength("abcdefgh"), 50);
    assert_eq!(password_strength("Abcdefgh"), 75);
    assert_eq!(password_strength("Abcdefg1"), 100);
}

#[test]
fn password_strength_text_bands() {
    assert_eq!(password_strength_text(0), "Weak");
    assert_eq!(password_strength_text(25), "Weak");
    assert_eq!(password_strength_text(50), "Fair");
    assert_eq!(password_strength_text(75), "Good");
    assert_eq!(password_strength_text(100), "Strong");
}

// =============================================================
// URLs
// =============================================================

#[test]
fn http_and_https_urls_accepted() {
    assert!(is_valid_url("https://example.com"));
    assert!(is_valid_url("http://example.com/docs?page=1"));
}

#[test]
fn not_a_url_rejected() {
    assert!(!is_valid_url("not a url"));
    assert!(!is_valid_url("example.com"));
    assert!(!is_valid_url("ftp://example.com"));
    assert!(!is_valid_url("https://"));
    assert!(!is_valid_url(""));
}

// =============================================================
// Upload extension allowlist
// =============================================================

#[test]
fn supported_extensions_accepted_case_insensitively() {
    assert!(is_supported_upload("guide.pdf"));
    assert!(is_supported_upload("NOTES.TXT"));
    assert!(is_supported_upload("handbook.docx"));
    assert!(is_supported_upload("legacy.doc"));
}

#[test]
fn unsupported_extensions_rejected() {
    assert!(!is_supported_upload("malware.exe"));
    assert!(!is_supported_upload("archive.tar.gz"));
    assert!(!is_supported_upload("noextension"));
}

#[test]
fn upload_batch_keeps_pdf_drops_exe() {
    let plan = plan_upload_batch(&["report.pdf", "setup.exe"]);
    assert_eq!(plan.accepted, vec!["report.pdf".to_owned()]);
    assert_eq!(plan.rejected, 1);
}

#[test]
fn upload_batch_with_all_supported_rejects_nothing() {
    let plan = plan_upload_batch(&["a.pdf", "b.txt"]);
    assert_eq!(plan.accepted.len(), 2);
    assert_eq!(plan.rejected, 0);
}
