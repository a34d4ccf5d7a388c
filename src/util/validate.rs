//! Client-side input validation.
//!
//! DESIGN
//! ======
//! Every precondition checked here runs before a network call is issued, so
//! malformed input never leaves the browser. The rules mirror what the
//! backend enforces; the server remains the authority and 422 responses are
//! still mapped onto forms by the callers.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// File extensions accepted for training-document upload.
pub const SUPPORTED_UPLOAD_EXTENSIONS: [&str; 4] = [".pdf", ".doc", ".docx", ".txt"];

/// Outcome of filtering an upload batch against the extension allowlist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadPlan {
    /// File names that passed the allowlist, in their original order.
    pub accepted: Vec<String>,
    /// How many names were dropped from the batch.
    pub rejected: usize,
}

/// Minimal email syntax check: one `@` with a non-empty local part and a
/// dotted, non-empty domain. The server performs the authoritative check.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((head, tail)) = domain.rsplit_once('.') else {
        return false;
    };
    !head.is_empty() && !tail.is_empty()
}

/// Password policy: at least 8 characters with one uppercase letter, one
/// lowercase letter, and one digit.
pub fn password_meets_rules(value: &str) -> bool {
    value.chars().count() >= 8
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// Score a password 0–100 for the strength meter on the change-password form.
pub fn password_strength(value: &str) -> u8 {
    if value.is_empty() {
        return 0;
    }
    let mut score = 0u8;
    if value.chars().count() >= 8 {
        score += 25;
    }
    if value.chars().any(|c| c.is_ascii_uppercase()) {
        score += 25;
    }
    if value.chars().any(|c| c.is_ascii_lowercase()) {
        score += 25;
    }
    if value.chars().any(|c| c.is_ascii_digit()) {
        score += 25;
    }
    score
}

/// Label shown next to the strength meter.
pub fn password_strength_text(strength: u8) -> &'static str {
    match strength {
        0..=25 => "Weak",
        26..=50 => "Fair",
        51..=75 => "Good",
        _ => "Strong",
    }
}

/// Syntactic URL check for website sources: an `http`/`https` scheme and a
/// non-empty host, with no embedded whitespace.
pub fn is_valid_url(value: &str) -> bool {
    let value = value.trim();
    if value.contains(char::is_whitespace) {
        return false;
    }
    let rest = if let Some(rest) = value.strip_prefix("https://") {
        rest
    } else if let Some(rest) = value.strip_prefix("http://") {
        rest
    } else {
        return false;
    };
    let host = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    !host.is_empty()
}

/// Whether a file name carries one of the supported upload extensions.
pub fn is_supported_upload(name: &str) -> bool {
    let lowered = name.to_lowercase();
    SUPPORTED_UPLOAD_EXTENSIONS
        .iter()
        .any(|ext| lowered.ends_with(ext))
}

/// Partition an upload batch into accepted names and a rejected count.
pub fn plan_upload_batch<S: AsRef<str>>(names: &[S]) -> UploadPlan {
    let mut plan = UploadPlan::default();
    for name in names {
        if is_supported_upload(name.as_ref()) {
            plan.accepted.push(name.as_ref().to_owned());
        } else {
            plan.rejected += 1;
        }
    }
    plan
}
