// Report Renderer.
// Picks one repository at random and formats its metadata as an aligned block.

use chrono::{DateTime, Local, Utc};
use rand::Rng;

use crate::github::Repository;

const TITLE: &str = "Random Starred Repository";
const RULE_EXTRA: usize = 32;

/// Placeholder for absent optional fields.
const ABSENT: &str = "—";

/// Select one repository uniformly at random.
///
/// Panics on an empty list; the provider guarantees a non-empty one.
pub fn pick_random(stars: &[Repository]) -> &Repository {
    let index = rand::rng().random_range(0..stars.len());
    &stars[index]
}

/// Render one repository's metadata as the printed report.
pub fn render(repo: &Repository) -> String {
    let fields = display_fields(repo);
    let label_width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let rule = "=".repeat(label_width + RULE_EXTRA);

    let mut out = String::new();
    out.push('\n');
    out.push_str(&rule);
    out.push_str("\n  ");
    out.push_str(TITLE);
    out.push_str("\n\n");

    for (label, value) in &fields {
        out.push_str(&format!("  {label:<label_width$} : {value}\n"));
    }

    out.push('\n');
    out.push_str(&rule);
    out.push_str("\n\n");
    out
}

/// The fixed, ordered field table, with "—" substituted for absent values.
fn display_fields(repo: &Repository) -> Vec<(&'static str, String)> {
    vec![
        ("Name", repo.name.clone()),
        ("Full Name", repo.full_name.clone()),
        (
            "Description",
            repo.description.clone().unwrap_or_else(|| ABSENT.to_string()),
        ),
        ("Stars", repo.stargazers_count.to_string()),
        ("Forks", repo.forks_count.to_string()),
        (
            "Language",
            repo.language.clone().unwrap_or_else(|| ABSENT.to_string()),
        ),
        (
            "License",
            repo.license
                .as_ref()
                .map(|l| l.name.clone())
                .unwrap_or_else(|| ABSENT.to_string()),
        ),
        (
            "Topics",
            if repo.topics.is_empty() {
                ABSENT.to_string()
            } else {
                repo.topics.join(", ")
            },
        ),
        ("Created At", localize(repo.created_at)),
        (
            "Last Push",
            repo.pushed_at.map(localize).unwrap_or_else(|| ABSENT.to_string()),
        ),
        ("URL", repo.html_url.clone()),
    ]
}

/// Format a timestamp in the local timezone.
fn localize(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}
