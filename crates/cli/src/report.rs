use std::collections::HashMap;
use std::fmt::Write;

use pwdist_audit::{Finding, PasswordRecord};

/// Human-readable audit report. Names records by label, id and change date,
/// never by password.
pub fn render(findings: &[Finding], records: &[PasswordRecord]) -> String {
    if findings.is_empty() {
        return "No similar passwords found.\n".to_string();
    }

    let by_id: HashMap<&str, &PasswordRecord> =
        records.iter().map(|r| (r.id.as_str(), r)).collect();
    let name = |id: &str| -> String {
        match by_id.get(id) {
            Some(rec) => describe(rec),
            None => id.to_string(),
        }
    };

    let mut out = String::new();
    for f in findings {
        let left = match &f.left_id {
            Some(id) => name(id),
            None => "new password".to_string(),
        };
        let _ = writeln!(out, "{left} ~ {}: {}", name(&f.right_id), f.verdict);
    }
    let _ = writeln!(out, "{} similar pair(s)", findings.len());
    out
}

fn describe(rec: &PasswordRecord) -> String {
    let mut details = Vec::new();
    if rec.display_name() != rec.id {
        details.push(rec.id.clone());
    }
    if let Some(date) = rec.changed_on {
        details.push(format!("changed {date}"));
    }

    if details.is_empty() {
        rec.display_name().to_string()
    } else {
        format!("{} [{}]", rec.display_name(), details.join(", "))
    }
}
