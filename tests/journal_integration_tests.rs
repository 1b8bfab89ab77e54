use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use tempfile::tempdir;

use workjournal::errors::AppResult;
use workjournal::journal_core::{
    add_item, total_time, BulletField, Entry, FixedClock, IdeasField, TimeLogRecord,
};
use workjournal::session::JournalSession;
use workjournal::storage::{self, FileBlobStore};

// Fixed reference time for deterministic testing: 2024-03-02 14:30:00
fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 2)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

fn open_session(dir: &std::path::Path) -> JournalSession {
    JournalSession::open(
        Box::new(FileBlobStore::new(dir)),
        Box::new(FixedClock(fixed_now())),
    )
}

#[test]
fn test_journal_basic_flow() -> AppResult<()> {
    let temp_dir = tempdir()?;
    let data_dir = temp_dir.path().join("journal");
    storage::ensure_data_dir_exists(&data_dir)?;

    let mut session = open_session(&data_dir);
    let mut draft = session.draft_today();
    draft.add_todo("release");
    draft.add_log(TimeLogRecord::new("4h", "release prep", "REL"));
    draft.add_bullet(BulletField::MajorContribution, "shipped 2.0");
    session.save_entry(draft)?;
    session.update_ideas(|ideas| add_item(ideas, IdeasField::LearningTopics, "serde"))?;

    // A fresh session sees everything the first one wrote.
    let reopened = open_session(&data_dir);
    assert_eq!(reopened.state(), session.state());
    let entry = reopened.entry("2024-03-02").unwrap();
    assert_eq!(entry.major_contribution, vec!["shipped 2.0"]);
    assert_eq!(total_time(&entry.logs), 240.0);
    assert_eq!(reopened.ideas().learning_topics, vec!["serde"]);

    Ok(())
}

#[test]
fn test_persisted_json_uses_camel_case_keys() -> AppResult<()> {
    let temp_dir = tempdir()?;
    let mut session = open_session(temp_dir.path());

    let mut draft = session.draft_for("2024-03-01");
    draft.add_log(TimeLogRecord::new("1h", "review", "OPS"));
    draft.add_bullet(BulletField::BigTheme, "quality");
    session.save_entry(draft)?;
    session.update_ideas(|ideas| add_item(ideas, IdeasField::ImprovementIdeas, "less meetings"))?;

    let entries = fs::read_to_string(temp_dir.path().join("entries.json"))?;
    assert!(entries.contains("\"timeSpent\":\"1h\""));
    assert!(entries.contains("\"projectCode\":\"OPS\""));
    assert!(entries.contains("\"bigTheme\":[\"quality\"]"));

    let ideas = fs::read_to_string(temp_dir.path().join("ideas.json"))?;
    assert!(ideas.contains("\"improvementIdeas\":[\"less meetings\"]"));
    assert!(ideas.contains("\"learningTopics\":[]"));

    Ok(())
}

#[test]
fn test_hydrates_blobs_written_elsewhere() -> AppResult<()> {
    let temp_dir = tempdir()?;
    fs::write(
        temp_dir.path().join("entries.json"),
        r#"[{"date":"2024-03-01","todos":[{"text":"a","completed":true}]},
            {"date":"2024-03-05","logs":[{"timeSpent":"2h","description":"x","projectCode":""}]}]"#,
    )?;
    fs::write(temp_dir.path().join("ideas.json"), "{ not json")?;

    let session = open_session(temp_dir.path());

    let dates: Vec<&str> = session.entries().iter().map(|e| e.date.as_str()).collect();
    assert_eq!(dates, ["2024-03-05", "2024-03-01"]);
    assert!(session.entries()[1].todos[0].completed);
    assert!(session.entries()[1].logs.is_empty());
    assert!(session.ideas().improvement_ideas.is_empty());

    Ok(())
}

#[test]
fn test_export_lists_newest_entry_first() -> AppResult<()> {
    let temp_dir = tempdir()?;
    let mut session = open_session(temp_dir.path());

    let mut older = session.draft_for("2024-03-01");
    older.add_todo("prep");
    session.save_entry(older)?;

    let mut newer = session.draft_for("2024-03-02");
    newer.add_log(TimeLogRecord::new("4h", "deep work", ""));
    session.save_entry(newer)?;

    let file = session.export();
    assert_eq!(file.filename, "work-journal_2024-03-02_14-30-00.csv");

    let body: Vec<&str> = file.content.lines().skip(1).collect();
    let newer_row = body.iter().position(|l| l.starts_with("\"2024-03-02\"")).unwrap();
    let older_row = body.iter().position(|l| l.starts_with("\"2024-03-01\"")).unwrap();
    assert!(newer_row < older_row);
    assert!(body[newer_row].contains("4h - deep work"));
    assert_eq!(total_time(&session.entries()[0].logs), 240.0);

    Ok(())
}

#[test]
fn test_rekeyed_entry_survives_reload() -> AppResult<()> {
    let temp_dir = tempdir()?;
    let mut session = open_session(temp_dir.path());

    let mut draft = session.draft_for("2024-03-01");
    draft.add_todo("carry over");
    session.save_entry(draft)?;

    let mut draft = session.draft_for("2024-03-01");
    draft.set_date("2024-03-04");
    session.save_entry(draft)?;

    let reopened = open_session(temp_dir.path());
    let dates: Vec<&str> = reopened.entries().iter().map(|e| e.date.as_str()).collect();
    assert_eq!(dates, ["2024-03-04"]);
    assert_eq!(reopened.entries()[0].todos[0].text, "carry over");

    Ok(())
}

#[test]
fn test_delete_is_two_step_and_persisted() -> AppResult<()> {
    let temp_dir = tempdir()?;
    let mut session = open_session(temp_dir.path());
    session.save_entry(session.draft_for("2024-03-01"))?;

    let token = session.request_delete("2024-03-01").unwrap();
    assert_eq!(open_session(temp_dir.path()).entries().len(), 1);

    assert!(session.confirm_delete(&token)?);
    assert!(!session.confirm_delete(&token)?);

    let reopened = open_session(temp_dir.path());
    assert_eq!(reopened.entries(), &[] as &[Entry]);

    Ok(())
}
