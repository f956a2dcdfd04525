//! Tests for the interactive shell, driven with scripted input

use astro_schedule::config::ShellConfig;
use astro_schedule::core::services::ScheduleManager;
use astro_schedule::output::OutputMode;
use astro_schedule::shell::Shell;

use crate::common::{Recorder, descriptions, recorded_manager};

fn run(manager: &mut ScheduleManager, mode: OutputMode, script: &str) -> String {
    let mut out = Vec::new();
    Shell::new(manager, mode, &ShellConfig::default())
        .run(script.as_bytes(), &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

fn run_human(script: &str) -> (String, ScheduleManager, Recorder) {
    let (mut manager, recorder) = recorded_manager();
    let output = run(&mut manager, OutputMode::Human, script);
    (output, manager, recorder)
}

#[test]
fn test_menu_is_shown() {
    let (output, _, _) = run_human("5\n");

    assert!(output.contains("--- Astronaut Daily Schedule ---"));
    assert!(output.contains("1. Add Task"));
    assert!(output.contains("4. Mark Task Completed"));
    assert!(output.contains("Choose option: "));
    assert!(output.contains("Exiting... Goodbye!"));
}

#[test]
fn test_custom_title() {
    let mut manager = ScheduleManager::new();
    let config = ShellConfig {
        title: "ISS Day Plan".to_string(),
    };
    let mut out = Vec::new();
    Shell::new(&mut manager, OutputMode::Human, &config)
        .run("5\n".as_bytes(), &mut out)
        .unwrap();

    assert!(String::from_utf8(out).unwrap().contains("--- ISS Day Plan ---"));
}

#[test]
fn test_add_then_view() {
    let (output, manager, _) = run_human("1\nExercise\n06:00\n07:00\nHigh\n3\n5\n");

    assert!(output.contains("Task added successfully. No conflicts."));
    assert!(output.contains("06:00 - 07:00: Exercise [High]"));
    assert_eq!(descriptions(&manager), vec!["Exercise"]);
}

#[test]
fn test_conflicting_add_notifies_and_is_dropped() {
    let (output, manager, recorder) =
        run_human("1\nExercise\n06:00\n07:00\nHigh\n1\nMeeting\n06:30\n07:30\nMedium\n5\n");

    assert!(output.contains("Task was not added."));
    assert_eq!(
        recorder.messages(),
        vec!["Task conflicts with existing task \"Exercise\"".to_string()]
    );
    assert_eq!(descriptions(&manager), vec!["Exercise"]);
}

#[test]
fn test_factory_errors_are_printed() {
    let (output, manager, _) = run_human("1\nReport\n10:00\n09:00\nLow\n1\nReport\n9:00\n10:00\nLow\n5\n");

    assert!(output.contains("Error: End time must be after start time"));
    assert!(output.contains("Error: Invalid start time format: \"9:00\". Use HH:mm"));
    assert!(manager.is_empty());
}

#[test]
fn test_remove_and_mark_done() {
    let script = "1\nExercise\n06:00\n07:00\nHigh\n\
                  1\nMeeting\n07:00\n08:00\nMedium\n\
                  4\nmeeting\n\
                  2\nEXERCISE\n\
                  2\nExercise\n\
                  4\nNonexistent\n\
                  3\n5\n";
    let (output, manager, _) = run_human(script);

    assert!(output.contains("Task marked as completed."));
    assert!(output.contains("Task removed successfully."));
    assert_eq!(output.matches("Error: Task not found.").count(), 2);
    assert!(output.contains("07:00 - 08:00: Meeting [Medium] (Done)"));
    assert_eq!(descriptions(&manager), vec!["Meeting"]);
}

#[test]
fn test_empty_view() {
    let (output, _, _) = run_human("3\n5\n");
    assert!(output.contains("No tasks scheduled for the day."));
}

#[test]
fn test_invalid_choices() {
    let (output, _, _) = run_human("abc\n9\n\n5\n");
    assert_eq!(output.matches("Invalid choice. Try again.").count(), 3);
}

#[test]
fn test_end_of_input_stops_loop() {
    let (output, manager, _) = run_human("1\nExercise\n06:00\n");
    assert!(!output.contains("Exiting"));
    assert!(manager.is_empty());
}

#[test]
fn test_json_mode_emits_one_object_per_result() {
    let mut manager = ScheduleManager::new();
    let output = run(
        &mut manager,
        OutputMode::Json,
        "1\nExercise\n06:00\n07:00\nHigh\n1\nMeeting\n06:30\n07:30\nMedium\n3\n5\n",
    );

    let lines: Vec<serde_json::Value> =
        output.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["success"], true);
    assert_eq!(lines[1]["success"], false);
    assert_eq!(lines[1]["message"], "Task conflicts with existing task \"Exercise\"");
    assert_eq!(lines[2]["total"], 1);
    assert_eq!(lines[3]["operation"], "exit");
}

#[test]
fn test_invalid_utf8_input_does_not_end_session() {
    let (mut manager, _) = recorded_manager();
    let mut out = Vec::new();
    let script: &[u8] = b"1\nExercise\n06:00\n07:00\nHigh\n2\nCaf\xe9\n\xff\n3\n5\n";

    Shell::new(&mut manager, OutputMode::Human, &ShellConfig::default())
        .run(script, &mut out)
        .unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("Error: Task not found."));
    assert!(output.contains("Invalid choice. Try again."));
    assert!(output.contains("06:00 - 07:00: Exercise [High]"));
    assert!(output.contains("Exiting... Goodbye!"));
    assert_eq!(descriptions(&manager), vec!["Exercise"]);
}
