use liftingorder::view::liftingorder::{MASTERS_HIDDEN, MASTERS_VISIBLE};
use liftingorder::{AthleteRow, PanelState, ScoreboardPanel, Translations};
use scraper::{ElementRef, Html, Selector};

mod common;

fn render(panel: &ScoreboardPanel, state: &PanelState, rows: &[AthleteRow]) -> Html {
    let markup = panel.render(state, rows, &common::english());
    Html::parse_fragment(&markup.into_string())
}

fn sel(s: &str) -> Selector {
    Selector::parse(s).expect("valid selector")
}

fn cell_texts(row: ElementRef<'_>) -> Vec<String> {
    row.select(&sel("td"))
        .map(|td| td.text().collect::<String>())
        .collect()
}

#[test]
fn current_athlete_row_is_highlighted() {
    let doc = render(
        &ScoreboardPanel::new(),
        &common::sample_state(),
        &[common::jane_doe()],
    );

    let rows: Vec<_> = doc.select(&sel("#orderDiv tbody tr")).collect();
    assert_eq!(rows.len(), 1);

    let name_cell = rows[0]
        .select(&sel("td.current.ellipsis"))
        .next()
        .expect("name cell tagged current");
    assert_eq!(name_cell.text().collect::<String>(), "Jane Doe");

    let cells = cell_texts(rows[0]);
    assert_eq!(cells[2], "85");
}

#[test]
fn data_row_has_seven_cells_in_column_order() {
    let doc = render(
        &ScoreboardPanel::new(),
        &common::sample_state(),
        &common::sample_rows(),
    );
    let rows: Vec<_> = doc.select(&sel("#orderDiv tbody tr")).collect();
    assert_eq!(rows.len(), 4);

    assert_eq!(
        cell_texts(rows[1]),
        vec!["7", "Mary Major", "87", "2", "W35", "F63", "Barbell Club"]
    );
    assert_eq!(
        cell_texts(rows[0]),
        vec!["12", "Jane Doe", "85", "2", "", "F63", "Acme"]
    );
}

#[test]
fn spacer_row_has_no_data_cells() {
    let doc = render(
        &ScoreboardPanel::new(),
        &common::sample_state(),
        &[AthleteRow::spacer()],
    );
    let rows: Vec<_> = doc.select(&sel("#orderDiv tbody tr")).collect();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].value().classes().any(|c| c == "spacer"));

    let cells: Vec<_> = rows[0].select(&sel("td")).collect();
    assert!(cells.len() <= 1);
    assert!(cells.iter().all(|c| c.text().collect::<String>().is_empty()));
    assert!(rows[0].select(&sel("td.club, td.ellipsis")).next().is_none());
}

#[test]
fn masters_flag_switches_column_class() {
    let mut state = common::sample_state();
    let panel = ScoreboardPanel::new();

    let doc = render(&panel, &state, &common::sample_rows());
    let age_cells: Vec<_> = doc.select(&sel(&format!(".{MASTERS_HIDDEN}"))).collect();
    // header plus three data rows
    assert_eq!(age_cells.len(), 4);
    assert!(doc.select(&sel(&format!(".{MASTERS_VISIBLE}"))).next().is_none());

    state.masters = true;
    let doc = render(&panel, &state, &common::sample_rows());
    assert_eq!(doc.select(&sel(&format!(".{MASTERS_VISIBLE}"))).count(), 4);
}

#[test]
fn hidden_panel_hides_every_section() {
    let mut state = common::sample_state();
    state.hidden = true;
    let doc = render(&ScoreboardPanel::new(), &state, &common::sample_rows());
    for id in [".attemptBar", "#athleteInfoDiv", "#groupDiv", "#orderDiv"] {
        let el = doc.select(&sel(id)).next().expect("section present");
        assert_eq!(el.value().attr("style"), Some("display:none"), "{id}");
    }
}

#[test]
fn group_done_hides_group_and_table_but_not_name() {
    let mut panel = ScoreboardPanel::new();
    panel.on_group_done();
    let doc = render(&panel, &common::sample_state(), &common::sample_rows());

    let group = doc.select(&sel("#groupDiv")).next().unwrap();
    assert!(group.value().attr("style").unwrap().contains("visibility:hidden"));
    let table = doc.select(&sel("#orderDiv")).next().unwrap();
    assert!(table.value().attr("style").unwrap().contains("visibility:hidden"));
    let name = doc.select(&sel("#fullNameDiv")).next().unwrap();
    assert_eq!(name.value().attr("style"), Some("display:block"));

    panel.on_start();
    let doc = render(&panel, &common::sample_state(), &common::sample_rows());
    for id in ["#groupDiv", "#orderDiv"] {
        let style = doc.select(&sel(id)).next().unwrap().value().attr("style").unwrap();
        assert!(style.contains("visibility:visible"), "{id}: {style}");
    }
}

#[test]
fn break_shows_table_as_block() {
    let mut panel = ScoreboardPanel::new();
    panel.on_group_done();
    panel.on_break();
    let doc = render(&panel, &common::sample_state(), &common::sample_rows());
    let table = doc.select(&sel("#orderDiv")).next().unwrap();
    assert_eq!(table.value().attr("style"), Some("display:block"));
}

#[test]
fn header_shows_name_markup_group_and_translations() {
    let doc = render(
        &ScoreboardPanel::new(),
        &common::sample_state(),
        &common::sample_rows(),
    );

    let last_name = doc.select(&sel("#fullNameDiv span.lastName")).next().unwrap();
    assert_eq!(last_name.text().collect::<String>(), "DOE");

    let group = doc.select(&sel("#groupDiv")).next().unwrap();
    let text = group.text().collect::<String>();
    assert!(text.contains("F1"));
    assert!(text.contains("4 lifts done"));

    let headers: Vec<String> = doc
        .select(&sel("#orderDiv thead th"))
        .map(|th| th.text().collect::<String>())
        .collect();
    assert_eq!(
        headers,
        vec!["Start", "Name", "RequestedWeight", "NextAttempt", "Age Group", "Cat.", "Team"]
    );
}

#[test]
fn missing_translations_leave_headers_blank() {
    let markup = ScoreboardPanel::new().render(
        &PanelState::default(),
        &[AthleteRow::default()],
        &Translations::default(),
    );
    let doc = Html::parse_fragment(&markup.into_string());
    assert_eq!(doc.select(&sel("thead th")).count(), 7);
    assert!(
        doc.select(&sel("thead th"))
            .all(|th| th.text().collect::<String>().is_empty())
    );
    let row = doc.select(&sel("tbody tr")).next().unwrap();
    assert!(cell_texts(row).iter().all(String::is_empty));
}

#[test]
fn cell_text_is_escaped() {
    let row = AthleteRow {
        full_name: "<script>alert(1)</script>".to_string(),
        ..common::jane_doe()
    };
    let markup = ScoreboardPanel::new()
        .render(&common::sample_state(), &[row], &common::english())
        .into_string();
    assert!(!markup.contains("<script>"));
    assert!(markup.contains("&lt;script&gt;"));
}
