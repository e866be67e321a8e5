use crate::controller::DetailToggleController;
use crate::models::panel::{ResultsPanel, Session};
use crate::models::view::{DetailSection, DetailValue, SummaryRow, ViewModel};
use html_escape::{encode_double_quoted_attribute, encode_text};

pub const EMPTY_INPUT_PROMPT: &str = "Please enter at least one URL.";
pub const IN_PROGRESS: &str = "Analyzing...";
pub const REFRESH_SECS: u64 = 1;

const PRESENT: &str = "✓";
const ABSENT: &str = "✗";
const NOT_AVAILABLE: &str = "Not available";

/// The whole viewer page: input form plus the current results panel.
///
/// While a run is in flight the page reloads `/` every [`REFRESH_SECS`] so it
/// picks up the table or the error without user action.
pub fn page(session: &Session) -> String {
    let busy = session.panel.is_busy();
    let disabled = if busy { " disabled" } else { "" };
    let refresh = if busy {
        format!(
            "\n    <meta http-equiv=\"refresh\" content=\"{}; url=/\">",
            REFRESH_SECS
        )
    } else {
        String::new()
    };
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">{}
    <title>Website Ranker</title>
</head>
<body>
    <h1>Website Ranker</h1>
    <form method=\"post\" action=\"/analyze\">
        <textarea id=\"urls\" name=\"urls\" rows=\"6\" cols=\"60\" placeholder=\"One URL per line\">{}</textarea>
        <button id=\"analyzeBtn\" type=\"submit\"{}>Analyze</button>
    </form>
    <div id=\"results\" data-status=\"{}\">{}</div>
</body>
</html>
",
        refresh,
        encode_text(&session.input),
        disabled,
        session.panel.status(),
        results_panel(&session.panel)
    )
}

pub fn results_panel(panel: &ResultsPanel) -> String {
    match panel {
        ResultsPanel::Idle => String::new(),
        ResultsPanel::Prompt => format!("<p>{}</p>", EMPTY_INPUT_PROMPT),
        ResultsPanel::InProgress { identifiers, .. } => format!(
            "<p>{}</p><p class=\"run-size\">{} urls submitted</p>",
            IN_PROGRESS, identifiers
        ),
        ResultsPanel::Failed { message, .. } => {
            format!("<p class=\"error\">{}</p>", encode_text(message))
        }
        ResultsPanel::Table(table) => results_table(&table.view, &table.controller),
    }
}

/// Ranked table with one summary row and one detail row per site. Panel
/// visibility and button labels come from the controller; rows it does not
/// know about keep the view model's defaults.
pub fn results_table(view: &ViewModel, controller: &DetailToggleController) -> String {
    let mut html = String::from(
        "
    <table class=\"rank-table\">
      <thead>
        <tr>
          <th>Rank</th>
          <th>Website</th>
          <th>Performance</th>
          <th>Security</th>
          <th>SEO</th>
          <th>Overall</th>
          <th>Details</th>
        </tr>
      </thead>
      <tbody>",
    );

    for row in &view.rows {
        html.push_str(&table_rows(row, controller));
    }

    html.push_str("</tbody></table>");
    html
}

fn table_rows(row: &SummaryRow, controller: &DetailToggleController) -> String {
    let state = controller.state(row.id);
    let label = state.map(|s| s.label()).unwrap_or(row.toggle_label);
    let hidden = state
        .map(|s| !s.is_expanded())
        .unwrap_or(row.detail.hidden);

    let sections: String = row.detail.sections.iter().map(section_markup).collect();
    let target = row.id.to_string();

    format!(
        "
      <tr>
        <td>{rank}</td>
        <td>{url}</td>
        <td>{performance}</td>
        <td>{security}</td>
        <td>{seo}</td>
        <td><strong>{total}</strong></td>
        <td><form method=\"post\" action=\"/toggle/{index}\"><button class=\"toggle-btn\" type=\"submit\" data-target=\"{target}\">{label}</button></form></td>
      </tr>
      <tr id=\"{target}\" class=\"details-row\"{hidden}>
        <td colspan=\"7\"><div class=\"details\">{sections}</div></td>
      </tr>",
        rank = row.rank,
        url = encode_text(&row.url),
        performance = row.performance,
        security = row.security,
        seo = row.seo,
        total = row.total,
        index = row.id.index(),
        target = encode_double_quoted_attribute(&target),
        label = label,
        hidden = if hidden { " hidden" } else { "" },
        sections = sections,
    )
}

fn section_markup(section: &DetailSection) -> String {
    let items: String = section
        .items
        .iter()
        .map(|item| {
            let value = match &item.value {
                DetailValue::Flag(true) => PRESENT.to_string(),
                DetailValue::Flag(false) => ABSENT.to_string(),
                DetailValue::Text(text) => encode_text(text).into_owned(),
                DetailValue::Missing => NOT_AVAILABLE.to_string(),
            };
            format!("<li><strong>{}:</strong> {}</li>", encode_text(item.label), value)
        })
        .collect();

    format!("<h4>{}</h4><ul>{}</ul>", encode_text(section.title), items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::{RawAnalysisResult, SecurityDetails};
    use crate::models::view::RowId;
    use crate::render::render;
    use crate::services::aggregate;

    fn view() -> ViewModel {
        render(&aggregate(vec![
            RawAnalysisResult {
                url: "<script>alert(1)</script>.com".to_string(),
                performance: 10,
                security: 10,
                seo: 10,
                security_details: Some(SecurityDetails {
                    https: true,
                    ..Default::default()
                }),
                ..Default::default()
            },
            RawAnalysisResult {
                url: "b.com".to_string(),
                performance: 90,
                security: 90,
                seo: 90,
                ..Default::default()
            },
        ]))
    }

    #[test]
    fn escapes_service_text() {
        let html = results_table(&view(), &DetailToggleController::attach(&view()));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn panels_follow_controller_state() {
        let view = view();
        let mut controller = DetailToggleController::attach(&view);

        let html = results_table(&view, &controller);
        assert!(html.contains("id=\"details-0\" class=\"details-row\" hidden"));
        assert!(html.contains("id=\"details-1\" class=\"details-row\" hidden"));
        assert!(!html.contains(">Hide<"));

        controller.toggle(RowId(1)).unwrap();
        let html = results_table(&view, &controller);
        assert!(html.contains("id=\"details-0\" class=\"details-row\" hidden"));
        assert!(html.contains("id=\"details-1\" class=\"details-row\">"));
        assert_eq!(html.matches(">Hide<").count(), 1);
        assert_eq!(html.matches(">Show<").count(), 1);
    }

    #[test]
    fn flags_and_missing_sections_render() {
        let html = results_table(&view(), &DetailToggleController::default());
        assert!(html.contains("<li><strong>HTTPS:</strong> ✓</li>"));
        assert!(html.contains("<li><strong>HSTS:</strong> ✗</li>"));
        assert!(html.contains("<li><strong>Details:</strong> Not available</li>"));
        assert!(html.contains("<h4>Backend &amp; Protocol</h4>"));
    }

    #[test]
    fn page_reflects_panel_state() {
        let mut session = Session::default();
        assert!(!page(&session).contains("disabled"));
        assert!(!page(&session).contains("http-equiv=\"refresh\""));

        let (run_id, _) = session.begin_run("a.com").unwrap();
        let html = page(&session);
        assert!(html.contains(IN_PROGRESS));
        assert!(html.contains(" disabled>Analyze"));
        assert!(html.contains("data-status=\"processing\""));
        assert!(html.contains("<meta http-equiv=\"refresh\" content=\"1; url=/\">"));

        session.finish_run(run_id, Vec::new());
        assert!(!page(&session).contains("http-equiv=\"refresh\""));

        let mut session = Session::default();
        let _ = session.begin_run("\n");
        assert!(page(&session).contains(EMPTY_INPUT_PROMPT));
    }
}
