//! Printable roster export.
//!
//! The export is produced behind [`RosterDocumentRenderer`] so the output format can change
//! without touching how the grid is built. [`HtmlRosterDocument`] writes a self-contained
//! landscape print layout.

use std::fmt::Write;

use crate::server::{
    model::db::ScheduleModel,
    roster::{grid::RosterGrid, locale::Locale},
};

/// File name the export is downloaded as
pub const REPORT_FILENAME: &str = "report.html";

pub trait RosterDocumentRenderer {
    /// MIME type of the rendered document
    fn content_type(&self) -> &'static str;

    fn render(&self, schedule: &ScheduleModel, grid: &RosterGrid) -> Vec<u8>;
}

pub struct HtmlRosterDocument {
    pub locale: Locale,
}

impl HtmlRosterDocument {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl RosterDocumentRenderer for HtmlRosterDocument {
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn render(&self, schedule: &ScheduleModel, grid: &RosterGrid) -> Vec<u8> {
        let mut html = String::new();

        // Writing into a String cannot fail
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
             <style>@page {{ size: A4 landscape; margin: 1cm; }} \
             body {{ font-family: sans-serif; font-size: 9pt; }} \
             table {{ border-collapse: collapse; width: 100%; }} \
             th, td {{ border: 1px solid #000; padding: 2px 4px; vertical-align: top; }}</style>\n\
             </head>\n<body>\n<h1>{}</h1>\n<table>\n<thead>\n\
             <tr><th colspan=\"{}\">{} - {}</th></tr>\n<tr><th></th><th></th>",
            self.locale.language_tag(),
            escape_html(&schedule.name),
            escape_html(&schedule.name),
            grid.column_count(),
            schedule.start_day.format("%Y-%m-%d"),
            schedule.end_date.format("%Y-%m-%d"),
        );

        for shift in &grid.columns {
            let _ = write!(
                html,
                "<th>{}<br>{} - {}</th>",
                escape_html(&shift.name),
                shift.start_time.format("%H:%M"),
                shift.end_time.format("%H:%M"),
            );
        }
        html.push_str("</tr>\n</thead>\n<tbody>\n");

        for row in &grid.rows {
            let _ = write!(
                html,
                "<tr><td>{}</td><td>{}</td>",
                escape_html(&row.day_label),
                escape_html(&row.weekday_label),
            );

            for cell in &row.cells {
                let labels: Vec<String> = cell
                    .entries
                    .iter()
                    .map(|entry| escape_html(&entry.label))
                    .collect();
                let _ = write!(html, "<td>{}</td>", labels.join("<br>"));
            }

            html.push_str("</tr>\n");
        }

        html.push_str("</tbody>\n</table>\n</body>\n</html>\n");

        html.into_bytes()
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }

    escaped
}
