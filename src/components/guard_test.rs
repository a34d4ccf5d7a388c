use super::*;

#[test]
fn present_credential_allows() {
    assert_eq!(decide(true, "/dashboard"), GuardDecision::Allow);
}

#[test]
fn absent_credential_redirects_with_origin_captured() {
    assert_eq!(
        decide(false, "/dashboard"),
        GuardDecision::Redirect("/login?from=%2Fdashboard".to_owned())
    );
}

#[test]
fn nested_paths_are_fully_encoded() {
    assert_eq!(
        login_redirect_target("/dashboard/b1/preview"),
        "/login?from=%2Fdashboard%2Fb1%2Fpreview"
    );
}

#[test]
fn empty_and_login_origins_redirect_plainly() {
    assert_eq!(login_redirect_target(""), "/login");
    assert_eq!(login_redirect_target("/login"), "/login");
}
