//! Markdown table export of all evaluations.

use nninv_db::EntityPair;

const HEADER: &str = "| Entity Name | Evaluation | Notes |";
const SEPARATOR: &str = "|------------|------------|-------|";
const PLACEHOLDER: &str = "—";

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

fn single_line(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Render `pairs` in the order given. No trailing newline.
pub fn export_markdown(pairs: &[EntityPair]) -> String {
    let mut lines = Vec::with_capacity(pairs.len() + 2);
    lines.push(HEADER.to_string());
    lines.push(SEPARATOR.to_string());

    for pair in pairs {
        let evaluation = pair.evaluation.map_or(PLACEHOLDER, |e| e.as_str());
        let notes = pair
            .evaluation_notes
            .as_deref()
            .filter(|n| !n.is_empty())
            .map_or_else(|| PLACEHOLDER.to_string(), single_line);

        lines.push(format!(
            "| {} | {} | {} |",
            escape_cell(&single_line(&pair.entity_name)),
            escape_cell(evaluation),
            escape_cell(&notes),
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nninv_db::Evaluation;
    use pretty_assertions::assert_eq;

    fn pair(name: &str, evaluation: Option<Evaluation>, notes: Option<&str>) -> EntityPair {
        EntityPair {
            id: 1,
            entity_name: name.into(),
            curie_a: "A:1".into(),
            label_a: None,
            curie_b: "B:1".into(),
            label_b: None,
            notes: None,
            created_at: Default::default(),
            evaluation,
            evaluation_notes: notes.map(String::from),
        }
    }

    #[test]
    fn test_empty_listing_is_header_only() {
        assert_eq!(export_markdown(&[]), format!("{HEADER}\n{SEPARATOR}"));
    }

    #[test]
    fn test_rows_and_placeholders() {
        let out = export_markdown(&[
            pair("water", Some(Evaluation::Same), Some("same clique")),
            pair("iron", None, None),
        ]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "| water | same | same clique |");
        assert_eq!(lines[3], "| iron | — | — |");
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn test_pipes_escaped_and_newlines_collapsed() {
        let out = export_markdown(&[pair("a|b", Some(Evaluation::Unsure), Some("a|b\nc"))]);
        assert_eq!(out.lines().nth(2), Some("| a\\|b | unsure | a\\|b c |"));
    }

    #[test]
    fn test_entity_name_stays_on_one_row() {
        let out = export_markdown(&[pair("two\nlines", None, None)]);
        assert_eq!(out.lines().count(), 3);
        assert_eq!(out.lines().nth(2), Some("| two lines | — | — |"));
    }

    #[test]
    fn test_crlf_collapses_to_one_space() {
        let out = export_markdown(&[pair("x", Some(Evaluation::Different), Some("one\r\ntwo\rthree"))]);
        assert_eq!(out.lines().nth(2), Some("| x | different | one two three |"));
    }
}
