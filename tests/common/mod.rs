#![allow(dead_code)]

use liftingorder::{AthleteRow, PanelState, Translations};

pub fn jane_doe() -> AthleteRow {
    AthleteRow {
        start_number: Some(12),
        full_name: "Jane Doe".to_string(),
        requested_weight: "85".to_string(),
        next_attempt_no: Some(2),
        masters_age_group: None,
        category: "F63".to_string(),
        team_name: "Acme".to_string(),
        is_spacer: false,
        classname: "current".to_string(),
    }
}

pub fn sample_rows() -> Vec<AthleteRow> {
    vec![
        jane_doe(),
        AthleteRow {
            start_number: Some(7),
            full_name: "Mary Major".to_string(),
            requested_weight: "87".to_string(),
            next_attempt_no: Some(2),
            masters_age_group: Some("W35".to_string()),
            category: "F63".to_string(),
            team_name: "Barbell Club".to_string(),
            is_spacer: false,
            classname: "next".to_string(),
        },
        AthleteRow::spacer(),
        AthleteRow {
            start_number: Some(3),
            full_name: "Erika Mustermann".to_string(),
            requested_weight: "105".to_string(),
            next_attempt_no: Some(1),
            masters_age_group: None,
            category: "F63".to_string(),
            team_name: "Acme".to_string(),
            is_spacer: false,
            classname: String::new(),
        },
    ]
}

pub fn sample_state() -> PanelState {
    PanelState {
        full_name: "<span class=\"lastName\">DOE</span> Jane".to_string(),
        group_name: "F1".to_string(),
        lifts_done: "4 lifts done".to_string(),
        masters: false,
        hidden: false,
    }
}

pub fn english() -> Translations {
    Translations::from_json(include_str!("translations_en.json")).expect("valid fixture")
}
