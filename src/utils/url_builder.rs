/// Join a UI route onto a base URL. Absolute URLs pass through untouched.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base, trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_joins_route() {
        assert_eq!(
            absolute_url("https://controller.example.com/", "/jobs/playbook/42/output"),
            "https://controller.example.com/jobs/playbook/42/output"
        );
        assert_eq!(absolute_url("https://c.example.com", "jobs"), "https://c.example.com/jobs");
    }

    #[test]
    fn test_absolute_url_keeps_absolute_paths() {
        assert_eq!(absolute_url("https://a", "https://b/x"), "https://b/x");
        assert_eq!(absolute_url("https://a/", "/"), "https://a");
    }
}
