/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use linestrip::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\pages\\Home.tsx")), "pages/Home.tsx");
/// assert_eq!(normalize_display_path(Path::new("./src/main.rs")), "src/main.rs");
/// ```
#[must_use]
pub fn normalize_display_path(path: &std::path::Path) -> String {
    let s = path.to_string_lossy();
    let normalized = s.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_plain_relative_path_unchanged() {
        assert_eq!(
            normalize_display_path(Path::new("pages/ClientDashboard.tsx")),
            "pages/ClientDashboard.tsx"
        );
    }

    #[test]
    fn test_only_leading_dot_slash_stripped() {
        assert_eq!(normalize_display_path(Path::new("a/./b.txt")), "a/./b.txt");
    }
}
