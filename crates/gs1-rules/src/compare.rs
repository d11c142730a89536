//! # License Value Comparison
//!
//! Containment in the license hierarchy is a literal prefix relation:
//! a child value belongs to a parent license iff it starts with the
//! parent's value, byte for byte.

/// True iff both values are present and non-empty and `child` starts with
/// `parent`.
pub fn compare_license_value(child: Option<&str>, parent: Option<&str>) -> bool {
    match (child, parent) {
        (Some(child), Some(parent)) if !child.is_empty() && !parent.is_empty() => {
            child.starts_with(parent)
        }
        _ => false,
    }
}
