//! Plain-text rendering of the catalog and activity selection.

use std::fmt::Write as _;

use roster::{Activity, Catalog};

/// One text card per activity, separated by blank lines.
#[must_use]
pub fn render_catalog(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return "No activities available.\n".to_owned();
    }
    catalog
        .iter()
        .map(|(name, activity)| render_activity(name, activity))
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn render_activity(name: &str, activity: &Activity) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{name}");
    let _ = writeln!(out, "  {}", activity.description);
    let _ = writeln!(out, "  Schedule: {}", activity.schedule);
    let _ = writeln!(out, "  Availability: {} spots left", activity.spots_left());
    if activity.participants.is_empty() {
        let _ = writeln!(out, "  No participants yet");
    } else {
        let _ = writeln!(out, "  Participants:");
        for email in &activity.participants {
            let _ = writeln!(out, "    - {email}");
        }
    }
    out
}

/// Numbered selection list, `1) Name` per line, in catalog order.
#[must_use]
pub fn render_options(catalog: &Catalog) -> String {
    let mut out = String::new();
    for (index, name) in catalog.keys().enumerate() {
        let _ = writeln!(out, "{}) {name}", index + 1);
    }
    out
}

/// Resolve a selection: an exact activity name, or a 1-based number from
/// [`render_options`]. Names win over numbers.
#[must_use]
pub fn resolve_selection<'a>(catalog: &'a Catalog, selection: &str) -> Option<&'a str> {
    if let Some((name, _)) = catalog.get_key_value(selection) {
        return Some(name.as_str());
    }
    let index = selection.trim().parse::<usize>().ok()?.checked_sub(1)?;
    catalog.keys().nth(index).map(String::as_str)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
