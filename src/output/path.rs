use std::path::Path;

/// Render `path` relative to `project_root` when it lies beneath it, with
/// forward slashes on every platform.
#[must_use]
pub fn display_path(path: &Path, project_root: Option<&Path>) -> String {
    let relative = project_root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);

    let rendered = relative.to_string_lossy().replace('\\', "/");
    let rendered = rendered.strip_prefix("./").unwrap_or(&rendered);

    if rendered.is_empty() {
        ".".to_string()
    } else {
        rendered.to_string()
    }
}
