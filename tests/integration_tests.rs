use predicates::str::contains;

mod common;
use common::{setup_test_db, temp_out, tt};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_timer_save_and_list() {
    let db_path = setup_test_db("save_list");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "timer", "set", "3661"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "timer", "save", "Deep work"])
        .assert()
        .success()
        .stdout(contains("Deep work"));

    tt().args(["--db", &db_path, "tracker", "list"])
        .assert()
        .success()
        .stdout(contains("Deep work"))
        .stdout(contains("01:01:01"));
}

#[test]
fn test_timer_save_empty_name_is_rejected() {
    let db_path = setup_test_db("save_empty");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "timer", "save", "   "])
        .assert()
        .success()
        .stdout(contains("must not be empty"));

    tt().args(["--db", &db_path, "tracker", "list"])
        .assert()
        .success()
        .stdout(contains("No saved trackers"));
}

#[test]
fn test_timer_status_reflects_set_value_across_invocations() {
    let db_path = setup_test_db("status_persist");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "timer", "set", "120"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "timer", "status"])
        .assert()
        .success()
        .stdout(contains("00:02:00"))
        .stdout(contains("paused"));
}

#[test]
fn test_timer_play_pause_cycle() {
    let db_path = setup_test_db("play_pause");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "timer", "play"])
        .assert()
        .success()
        .stdout(contains("Timer running"));

    tt().args(["--db", &db_path, "timer", "status"])
        .assert()
        .success()
        .stdout(contains("running"));

    // a second play is a friendly no-op
    tt().args(["--db", &db_path, "timer", "play"])
        .assert()
        .success()
        .stdout(contains("already running"));

    tt().args(["--db", &db_path, "timer", "pause"])
        .assert()
        .success()
        .stdout(contains("Paused at"));

    tt().args(["--db", &db_path, "timer", "status"])
        .assert()
        .success()
        .stdout(contains("paused"));
}

#[test]
fn test_timer_reset_keeps_running_state() {
    let db_path = setup_test_db("reset_running");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "timer", "play"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "timer", "reset"])
        .assert()
        .success()
        .stdout(contains("still running"));
}

#[test]
fn test_timer_use_loads_a_saved_tracker() {
    let db_path = setup_test_db("timer_use");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "timer", "set", "300"])
        .assert()
        .success();
    tt().args(["--db", &db_path, "timer", "save", "Reading"])
        .assert()
        .success();

    // grab the id from the export since list output is padded
    let out = temp_out("timer_use", "json");
    tt().args(["--db", &db_path, "export", "--format", "json", "--file", &out, "--force"])
        .assert()
        .success();
    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let id = exported[0]["id"].as_i64().unwrap().to_string();

    tt().args(["--db", &db_path, "timer", "use", &id])
        .assert()
        .success()
        .stdout(contains("Reading"))
        .stdout(contains("00:05:00"));

    tt().args(["--db", &db_path, "timer", "use", "--new"])
        .assert()
        .success()
        .stdout(contains("fresh timer"));

    tt().args(["--db", &db_path, "timer", "use", "999999"])
        .assert()
        .success()
        .stdout(contains("No tracker with id"));
}

#[test]
fn test_tracker_rename_settime_delete() {
    let db_path = setup_test_db("tracker_ops");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "timer", "save", "Original"])
        .assert()
        .success();

    let out = temp_out("tracker_ops", "json");
    tt().args(["--db", &db_path, "export", "--format", "json", "--file", &out, "--force"])
        .assert()
        .success();
    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let id = exported[0]["id"].as_i64().unwrap().to_string();

    tt().args(["--db", &db_path, "tracker", "rename", &id, "Renamed"])
        .assert()
        .success()
        .stdout(contains("Renamed"));

    tt().args(["--db", &db_path, "tracker", "set-time", &id, "7200"])
        .assert()
        .success()
        .stdout(contains("02:00:00"));

    tt().args(["--db", &db_path, "tracker", "list"])
        .assert()
        .success()
        .stdout(contains("Renamed"))
        .stdout(contains("02:00:00"));

    tt().args(["--db", &db_path, "tracker", "del", &id])
        .assert()
        .success()
        .stdout(contains("deleted"));

    tt().args(["--db", &db_path, "tracker", "del", &id])
        .assert()
        .success()
        .stdout(contains("No tracker with id"));
}

#[test]
fn test_tracker_clear_requires_confirmation() {
    let db_path = setup_test_db("tracker_clear");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "timer", "save", "Keep me"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "tracker", "clear"])
        .assert()
        .success()
        .stdout(contains("--yes"));

    tt().args(["--db", &db_path, "tracker", "list"])
        .assert()
        .success()
        .stdout(contains("Keep me"));

    tt().args(["--db", &db_path, "tracker", "clear", "--yes"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "tracker", "list"])
        .assert()
        .success()
        .stdout(contains("No saved trackers"));
}

#[test]
fn test_note_lifecycle() {
    let db_path = setup_test_db("note_ops");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "note", "add", "Remember the milk"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "note", "list"])
        .assert()
        .success()
        .stdout(contains("Remember the milk"));

    tt().args(["--db", &db_path, "note", "clear", "--yes"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "note", "list"])
        .assert()
        .success()
        .stdout(contains("No notes yet"));
}

#[test]
fn test_todo_lifecycle() {
    let db_path = setup_test_db("todo_ops");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args([
        "--db", &db_path, "todo", "add", "Groceries", "--item", "milk", "--item", "bread",
    ])
    .assert()
    .success()
    .stdout(contains("Groceries"));

    tt().args(["--db", &db_path, "todo", "list"])
        .assert()
        .success()
        .stdout(contains("milk"))
        .stdout(contains("[ ]"));

    tt().args(["--db", &db_path, "note", "list"])
        .assert()
        .success()
        .stdout(contains("0/2 done"));
}

#[test]
fn test_stats_renders_seven_days_even_when_empty() {
    let db_path = setup_test_db("stats_empty");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Last 7 days"))
        .stdout(contains("Today"))
        .stdout(contains("Yesterday"));
}

#[test]
fn test_stats_shows_todays_total() {
    let db_path = setup_test_db("stats_total");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "timer", "set", "3600"])
        .assert()
        .success();
    tt().args(["--db", &db_path, "timer", "save", "Worked"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("1h 00min"));
}

#[test]
fn test_prefs_theme_and_dot_color() {
    let db_path = setup_test_db("prefs");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "prefs", "--theme", "night"])
        .assert()
        .success()
        .stdout(contains("night"));

    tt().args(["--db", &db_path, "prefs", "--dot-color", "#ff8800"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "prefs"])
        .assert()
        .success()
        .stdout(contains("night"))
        .stdout(contains("#ff8800"));

    tt().args(["--db", &db_path, "prefs", "--theme", "solarized"])
        .assert()
        .failure()
        .stderr(contains("Invalid theme"));
}

#[test]
fn test_export_json_and_csv() {
    let db_path = setup_test_db("export");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "timer", "set", "90"])
        .assert()
        .success();
    tt().args(["--db", &db_path, "timer", "save", "Exported"])
        .assert()
        .success();

    let json_out = temp_out("export", "json");
    tt().args([
        "--db", &db_path, "export", "--format", "json", "--file", &json_out, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let json_content = std::fs::read_to_string(&json_out).unwrap();
    assert!(json_content.contains("Exported"));
    assert!(json_content.contains("00:01:30"));

    let csv_out = temp_out("export", "csv");
    tt().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &csv_out, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let csv_content = std::fs::read_to_string(&csv_out).unwrap();
    assert!(csv_content.contains("Exported"));
}

#[test]
fn test_backup_creates_a_copy() {
    let db_path = setup_test_db("backup");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let backup_out = temp_out("backup", "sqlite");
    tt().args(["--db", &db_path, "backup", "--file", &backup_out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&backup_out).exists());
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("oplog");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "timer", "save", "Logged"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("save"));
}

#[test]
fn test_db_maintenance_commands() {
    let db_path = setup_test_db("db_maint");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    tt().args(["--db", &db_path, "db", "--migrate", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Migration completed"))
        .stdout(contains("Vacuum completed"));

    // before any mutation there is no snapshot row at all
    tt().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("snapshot: none"));

    tt().args(["--db", &db_path, "timer", "set", "5"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("trackers: 0"));
}

#[test]
fn test_timer_watch_prints_static_display_when_paused() {
    let db_path = setup_test_db("watch_paused");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "timer", "set", "61"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "timer", "watch"])
        .assert()
        .success()
        .stdout(contains("00:01:01"));
}
