//! Rendered views over ledger snapshots: the paginated status table and the
//! lateness report.

use crate::core::ledger::{LedgerEntry, PageStatus};
use crate::models::attendance_day::AttendanceDay;
use crate::models::shift::Shift;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time;
use chrono::NaiveTime;

/// Transport message cap (Telegram). Rendered output is chunked to fit,
/// splitting only at line boundaries.
pub const MAX_MESSAGE_LEN: usize = 4096;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Split rendered text into transport-sized chunks at line boundaries.
/// A single oversized line becomes its own chunk rather than being cut.
pub fn chunk_lines(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let needed = line.len() + if current.is_empty() { 0 } else { 1 };
        if !current.is_empty() && current.len() + needed > MAX_MESSAGE_LEN {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Render one page of the status table. The requested page number clamps
/// into `[1, total_pages]` instead of failing.
pub fn status_table(
    snapshot: &[PageStatus],
    shift: Shift,
    day: AttendanceDay,
    page: usize,
    page_size: usize,
    missing_only: bool,
) -> Vec<String> {
    let page_size = page_size.max(1);

    let rows: Vec<&PageStatus> = snapshot
        .iter()
        .filter(|r| !missing_only || r.missing)
        .collect();

    let total_pages = rows.len().div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let mut out = format!(
        "📋 CLOCK IN STATUS — {} — {} (page {}/{})\n",
        shift.name(),
        day,
        page,
        total_pages
    );

    if rows.is_empty() {
        out.push_str(if missing_only {
            "\nNo missing pages. Everyone clocked in. ✅\n"
        } else {
            "\nNo pages in the catalog.\n"
        });
        return chunk_lines(&out);
    }

    let mut table = Table::new(vec![
        Column::left("TAG", 26),
        Column::left("PAGE", 34),
        Column::right("USERS", 5),
        Column::right("COVERS", 6),
        Column::left("", 2),
    ]);

    let start = (page - 1) * page_size;
    for status in rows.iter().skip(start).take(page_size) {
        table.add_row(vec![
            status.key.clone(),
            status.label.clone(),
            status.user_count.to_string(),
            status.cover_count.to_string(),
            if status.missing { "🚫" } else { "✅" }.to_string(),
        ]);
    }

    out.push('\n');
    out.push_str(&table.render());

    chunk_lines(&out)
}

const NO_LATE_MESSAGE: &str = "✅ No late clock-ins.";

/// List everyone whose clock-in time-of-day is strictly after the shift's
/// late cutoff. Pages with no late people are omitted entirely.
pub fn late_report(
    entries: &[(String, LedgerEntry)],
    shift: Shift,
    day: AttendanceDay,
    cutoff: NaiveTime,
) -> String {
    let mut body = String::new();

    for (page_key, entry) in entries {
        let mut late_lines = Vec::new();

        for (name, ts) in &entry.users {
            if ts.time() > cutoff {
                late_lines.push(format!("  {} at {}", name, format_time(ts.time())));
            }
        }
        for (name, ts) in &entry.covers {
            if ts.time() > cutoff {
                late_lines.push(format!(
                    "  {} (cover) at {}",
                    name,
                    format_time(ts.time())
                ));
            }
        }

        if !late_lines.is_empty() {
            body.push_str(&format!("#{}\n", page_key));
            for l in late_lines {
                body.push_str(&l);
                body.push('\n');
            }
        }
    }

    if body.is_empty() {
        return NO_LATE_MESSAGE.to_string();
    }

    format!(
        "⏰ LATE CLOCK-INS — {} — {} (after {})\n\n{}",
        shift.name(),
        day,
        cutoff.format("%H:%M"),
        body
    )
}
