//! Placement status vocabulary.
//!
//! Status is an open string set. The store only attaches meaning to
//! [`STATUS_APPLIED`] (the column default) and [`STATUS_PLACED`] (counted by
//! the statistics views and procedures); any other value is stored verbatim.

/// Status given to a placement when the caller supplies none.
pub const STATUS_APPLIED: &str = "Applied";

/// Status marking a student as hired for the job role.
pub const STATUS_PLACED: &str = "Placed";

/// Minimum CGPA for a student to appear in the placement-ready view.
pub const PLACEMENT_READY_MIN_CGPA: f64 = 6.0;

/// Resolve a requested status, falling back to [`STATUS_APPLIED`].
///
/// An empty string counts as "not supplied", so form posts with a blank
/// status field get the default too.
pub fn resolve_status(requested: Option<&str>) -> &str {
    match requested {
        Some(status) if !status.is_empty() => status,
        _ => STATUS_APPLIED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_status_defaults_to_applied() {
        assert_eq!(resolve_status(None), "Applied");
    }

    #[test]
    fn empty_status_defaults_to_applied() {
        assert_eq!(resolve_status(Some("")), STATUS_APPLIED);
    }

    #[test]
    fn explicit_status_is_kept_verbatim() {
        assert_eq!(resolve_status(Some("Placed")), STATUS_PLACED);
        assert_eq!(resolve_status(Some("Interviewing")), "Interviewing");
        assert_eq!(resolve_status(Some(" ")), " ");
    }
}
