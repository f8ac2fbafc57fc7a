use crate::engine::RunningTotalTable;

/// Plain text table of the totals, one line per entity, numbers right-aligned.
pub fn render_table(table: &RunningTotalTable) -> String {
    let rows: Vec<(&str, &str, String)> = table
        .iter()
        .map(|(key, count)| (key.id.as_str(), key.name.as_str(), count.to_string()))
        .collect();

    let id_width = rows
        .iter()
        .map(|r| r.0.chars().count())
        .fold("id".len(), usize::max);
    let name_width = rows
        .iter()
        .map(|r| r.1.chars().count())
        .fold("name".len(), usize::max);
    let count_width = rows.iter().map(|r| r.2.len()).fold("count".len(), usize::max);

    let mut out = format!(
        "{:>id_width$}  {:<name_width$}  {:>count_width$}\n",
        "id", "name", "count"
    );
    for (id, name, count) in &rows {
        out.push_str(&format!(
            "{:>id_width$}  {:<name_width$}  {:>count_width$}\n",
            id, name, count
        ));
    }
    if rows.is_empty() {
        out.push_str("(no entities)\n");
    }
    out
}
