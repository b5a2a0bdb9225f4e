use tabled::settings::Style;
use tabled::{Table, Tabled};
use tsa::{Analysis, DisplayResult};

/// One ranked series as a table row.
#[derive(Tabled)]
struct Row<'a> {
    label: &'a str,
    min: String,
    max: String,
    mean: String,
}

/// Human-readable rendering: the summary line, or one row per series in
/// ranked order.
pub fn text(result: &DisplayResult) -> String {
    match result {
        DisplayResult::Summary(stats) => stats.to_string(),
        DisplayResult::Table(table) => {
            let rows = table.iter().map(|(label, s)| Row {
                label,
                min: s.min.to_string(),
                max: s.max.to_string(),
                mean: s.mean.to_string(),
            });
            Table::new(rows).with(Style::sharp()).to_string()
        }
    }
}

pub fn json(analysis: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(analysis)
}
