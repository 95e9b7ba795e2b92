//! Shared output formatting for the built-in commands.

/// Boxed-title block used by the built-ins for multi-line output.
pub(crate) fn banner(title: &str, body: &str) -> String {
    format!(
        "╔════════════════════════════════════════╗\n\
         ║   {title:<38}║\n\
         ╚════════════════════════════════════════╝\n\n\
         {body}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_contains_title_and_body() {
        let block = banner("DEMO", "line one\nline two");
        assert!(block.contains("║   DEMO"));
        assert!(block.contains("line one\nline two"));
        assert!(block.starts_with('╔'));
    }
}
