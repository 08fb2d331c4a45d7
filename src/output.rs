use owo_colors::OwoColorize;

pub struct MigrateSummary {
    pub prefix: String,
    pub message: String,
}

impl MigrateSummary {
    pub fn format(updated: usize, skipped: usize, failed: usize) -> Self {
        match (updated, failed) {
            (_, f) if f > 0 => Self {
                prefix: "✗".red().to_string(),
                message: format!(
                    "{} updated, {} skipped, {} failed",
                    updated.green(),
                    skipped.yellow(),
                    f.red()
                ),
            },
            (u, _) if u > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} file(s) updated, {} skipped", u.green(), skipped.yellow()),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: format!("No files updated ({skipped} skipped)"),
            },
        }
    }
}
