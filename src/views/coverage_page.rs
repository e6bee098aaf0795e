use crate::core::coverage::{red_scale, CoverageReport};
use crate::services::format_time;
use crate::views::document;

/// Grid of every minute on the dial, coloured by how well it is covered
pub fn render_coverage_page(report: &CoverageReport) -> String {
    let mut rows = String::new();

    for hour in 0..12 {
        let label = if hour == 0 { 12 } else { hour };
        rows.push_str(&format!("<tr class=\"hour\"><th>{}</th>", label));

        for minute in report.hour(hour) {
            let title = match minute.best_closeness {
                Some(best) => format!(
                    "{}: {} match(es), best {:.1}\u{b0}",
                    format_time(minute.time),
                    minute.match_count,
                    best
                ),
                None => format!("{}: no match", format_time(minute.time)),
            };
            rows.push_str(&format!(
                "<td style=\"background-color: {}\" title=\"{}\">{}</td>",
                red_scale(minute.quality(report.max_threshold)),
                title,
                minute.match_count,
            ));
        }

        rows.push_str("</tr>");
    }

    let header: String = (0..60).map(|m| format!("<th>{:02}</th>", m)).collect();

    let body = format!(
        concat!(
            "<main class=\"coverage\">",
            "<h1>Bun coverage</h1>",
            "<p>{covered} of 720 minutes have a matching bun ({percent:.1}%) across {size} buns.</p>",
            "<table><thead><tr><th></th>{header}</tr></thead><tbody>{rows}</tbody></table>",
            "</main>"
        ),
        covered = report.covered,
        percent = report.coverage_ratio * 100.0,
        size = report.catalog_size,
        header = header,
        rows = rows,
    );

    document("Bun coverage", &body)
}
