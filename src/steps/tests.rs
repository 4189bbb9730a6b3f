//! Tests for the prompt steps.

use super::*;
use crate::prompt::Prompter;
use crate::test_support::{RecordingPrompt, ScriptedReader, StaticCompletions};

fn answers_with_job(name: &str) -> Answers {
    let mut answers = Answers::new();
    answers.record(StepId::JobName, name.to_string());
    answers
}

/// Run a step against the real prompter with scripted input.
fn run_scripted(step: &dyn Step, lines: &[&str], answers: &Answers) -> (StepOutcome, String) {
    let mut reader = ScriptedReader::new(lines);
    let mut prompter = Prompter::new(&mut reader, Vec::new());
    let outcome = step.run(&mut prompter, answers).unwrap();
    let err = String::from_utf8(prompter.into_err()).unwrap();
    (outcome, err)
}

#[test]
fn test_job_name() {
    let mut prompt = RecordingPrompt::answering("awesome");
    let outcome = JobName.run(&mut prompt, &Answers::new()).unwrap();

    assert_eq!(
        outcome,
        StepOutcome::answered("awesome".into(), vec![Flag::with_arg("-J", "awesome")])
    );
    let request = prompt.last_request();
    assert_eq!(request.message, "Job name");
    assert!(request.required);
    assert!(!request.has_validator);
    assert_eq!(request.default, None);
}

#[test]
fn test_project_code_optional_with_group_completions() {
    let completions = StaticCompletions {
        queues: Vec::new(),
        groups: vec!["hpcstaff".to_string(), "physics".to_string()],
    };
    let step = ProjectCode::new(&completions);

    let mut prompt = RecordingPrompt::answering("physics");
    let outcome = step.run(&mut prompt, &Answers::new()).unwrap();
    assert_eq!(outcome.flags, vec![Flag::with_arg("-P", "physics")]);

    let request = prompt.last_request();
    assert_eq!(request.message, "Project code");
    assert!(!request.required);
    assert_eq!(request.completions, vec!["hpcstaff", "physics"]);
}

#[test]
fn test_project_code_skipped() {
    let completions = StaticCompletions::default();
    let mut prompt = RecordingPrompt::new(&[None]);
    let outcome = ProjectCode::new(&completions)
        .run(&mut prompt, &Answers::new())
        .unwrap();

    assert_eq!(outcome, StepOutcome::skipped());
}

#[test]
fn test_tasks_per_job_validates_positive_number() {
    let (outcome, err) = run_scripted(&TasksPerJob, &["", "-2", "24"], &Answers::new());

    assert_eq!(outcome.value.as_deref(), Some("24"));
    assert_eq!(outcome.flags, vec![Flag::with_arg("-n", "24")]);
    assert_eq!(
        err,
        "Please enter a value.\nPlease enter the correct format.\n"
    );
}

#[test]
fn test_tasks_per_job_request_shape() {
    let mut prompt = RecordingPrompt::answering("4");
    TasksPerJob.run(&mut prompt, &Answers::new()).unwrap();

    let request = prompt.last_request();
    assert_eq!(request.message, "Tasks per job");
    assert_eq!(request.format_hint.as_deref(), Some("positive number"));
    assert!(request.required);
    assert!(request.has_validator);
}

#[test]
fn test_tasks_per_node_builds_span_resource() {
    let (outcome, _) = run_scripted(&TasksPerNode, &["16"], &Answers::new());

    assert_eq!(outcome.value.as_deref(), Some("16"));
    assert_eq!(outcome.flags, vec![Flag::with_arg("-R", "span[ptile=16]")]);
}

#[test]
fn test_tasks_per_node_skipped() {
    let (outcome, _) = run_scripted(&TasksPerNode, &[""], &Answers::new());
    assert_eq!(outcome, StepOutcome::skipped());
}

#[test]
fn test_wall_clock_time() {
    let (outcome, err) = run_scripted(&WallClockTime, &["1h", "1:30"], &Answers::new());

    assert_eq!(outcome.flags, vec![Flag::with_arg("-W", "1:30")]);
    assert_eq!(err, "Please enter the correct format.\n");
}

#[test]
fn test_wall_clock_time_request_shape() {
    let mut prompt = RecordingPrompt::answering("30");
    WallClockTime.run(&mut prompt, &Answers::new()).unwrap();

    let request = prompt.last_request();
    assert_eq!(request.message, "Wall clock time limit");
    assert_eq!(
        request.format_hint.as_deref(),
        Some("00:00 for hours or 00 for minutes")
    );
    assert!(request.required);
}

#[test]
fn test_queue_name_defaults_to_regular() {
    let completions = StaticCompletions::with_queues(&["premium", "economy"]);
    let step = QueueName::new(&completions, "regular".to_string());

    // "regular" is not in the listing but the default bypasses validation.
    let (outcome, err) = run_scripted(&step, &[""], &Answers::new());

    assert_eq!(outcome.flags, vec![Flag::with_arg("-q", "regular")]);
    assert!(err.is_empty());
}

#[test]
fn test_queue_name_must_be_listed() {
    let completions = StaticCompletions::with_queues(&["premium", "regular"]);
    let step = QueueName::new(&completions, "regular".to_string());

    let (outcome, err) = run_scripted(&step, &["gpu", "premium"], &Answers::new());

    assert_eq!(outcome.value.as_deref(), Some("premium"));
    assert_eq!(err, "Please enter the correct format.\n");
}

#[test]
fn test_queue_name_accepts_anything_without_listing() {
    let completions = StaticCompletions::default();
    let step = QueueName::new(&completions, "regular".to_string());

    let (outcome, err) = run_scripted(&step, &["gpu"], &Answers::new());

    assert_eq!(outcome.value.as_deref(), Some("gpu"));
    assert!(err.is_empty());
}

#[test]
fn test_queue_name_offers_queue_completions() {
    let completions = StaticCompletions::with_queues(&["premium", "regular"]);
    let step = QueueName::new(&completions, "regular".to_string());

    let mut prompt = RecordingPrompt::answering("premium");
    step.run(&mut prompt, &Answers::new()).unwrap();

    let request = prompt.last_request();
    assert_eq!(request.message, "Queue");
    assert_eq!(request.default.as_deref(), Some("regular"));
    assert_eq!(request.completions, vec!["premium", "regular"]);
    assert!(request.has_validator);
}

#[test]
fn test_output_file_defaults_from_job_name() {
    let mut prompt = RecordingPrompt::answering("myjob.%J.out");
    let outcome = OutputFileName
        .run(&mut prompt, &answers_with_job("myjob"))
        .unwrap();

    assert_eq!(
        prompt.last_request().default.as_deref(),
        Some("myjob.%J.out")
    );
    assert_eq!(outcome.flags, vec![Flag::with_arg("-o", "myjob.%J.out")]);
}

#[test]
fn test_error_file_defaults_from_job_name() {
    let (outcome, _) = run_scripted(&ErrorFileName, &[""], &answers_with_job("myjob"));

    assert_eq!(outcome.flags, vec![Flag::with_arg("-e", "myjob.%J.err")]);
}

#[test]
fn test_file_defaults_absent_without_job_name() {
    let mut prompt = RecordingPrompt::new(&[None, None]);
    let out = OutputFileName.run(&mut prompt, &Answers::new()).unwrap();
    let err = ErrorFileName.run(&mut prompt, &Answers::new()).unwrap();

    assert!(prompt.requests.iter().all(|r| r.default.is_none()));
    assert_eq!(out, StepOutcome::skipped());
    assert_eq!(err, StepOutcome::skipped());
}

#[test]
fn test_email_on_begin_yes() {
    let (outcome, _) = run_scripted(&EmailOnBegin, &["y"], &Answers::new());

    assert_eq!(outcome.value.as_deref(), Some("y"));
    assert_eq!(outcome.flags, vec![Flag::bare("-B")]);
}

#[test]
fn test_email_on_begin_no_is_treated_as_unanswered() {
    let (typed, _) = run_scripted(&EmailOnBegin, &["n"], &Answers::new());
    let (defaulted, _) = run_scripted(&EmailOnBegin, &[""], &Answers::new());

    assert_eq!(typed, StepOutcome::skipped());
    assert_eq!(defaulted, StepOutcome::skipped());
}

#[test]
fn test_email_on_finish_rejects_synonyms() {
    let (outcome, err) = run_scripted(&EmailOnFinish, &["yes", "Y", "y"], &Answers::new());

    assert_eq!(outcome.flags, vec![Flag::bare("-N")]);
    assert_eq!(
        err,
        "Please enter the correct format.\nPlease enter the correct format.\n"
    );
}

#[test]
fn test_email_request_shape() {
    let mut prompt = RecordingPrompt::new(&[Some("n"), Some("n")]);
    EmailOnBegin.run(&mut prompt, &Answers::new()).unwrap();
    EmailOnFinish.run(&mut prompt, &Answers::new()).unwrap();

    assert_eq!(prompt.requests[0].message, "Notify by email when job begins?");
    assert_eq!(prompt.requests[1].message, "Notify by email when job finishes?");
    for request in &prompt.requests {
        assert_eq!(request.format_hint.as_deref(), Some("y/n"));
        assert_eq!(request.default.as_deref(), Some("n"));
        assert!(!request.required);
    }
}

#[test]
fn test_prompt_command_returns_raw_text() {
    let mut reader = ScriptedReader::new(&["", "mpirun ./model 'with space'"]);
    let mut prompter = Prompter::new(&mut reader, Vec::new());

    let command = PromptCommand.run(&mut prompter).unwrap();
    drop(prompter);

    assert_eq!(command, "mpirun ./model 'with space'");
    assert_eq!(reader.prompts[0], "Command to run: ");
}

#[test]
fn test_default_catalog_order() {
    let completions = StaticCompletions::default();
    let catalog = default_catalog(&completions, &Config::default());
    let ids: Vec<StepId> = catalog.iter().map(|step| step.id()).collect();

    assert_eq!(
        ids,
        vec![
            StepId::JobName,
            StepId::ProjectCode,
            StepId::TasksPerJob,
            StepId::TasksPerNode,
            StepId::WallClockTime,
            StepId::QueueName,
            StepId::OutputFileName,
            StepId::ErrorFileName,
            StepId::EmailOnBegin,
            StepId::EmailOnFinish,
        ]
    );
}

#[test]
fn test_flag_tokens() {
    let with_arg = Flag::with_arg("-J", "name");
    let bare = Flag::bare("-B");

    assert_eq!(with_arg.tokens().collect::<Vec<_>>(), vec!["-J", "name"]);
    assert_eq!(bare.tokens().collect::<Vec<_>>(), vec!["-B"]);
}

#[test]
fn test_answers_preserve_insertion_order() {
    let mut answers = Answers::new();
    answers.record(StepId::QueueName, "premium".into());
    answers.record(StepId::JobName, "first".into());

    let ids: Vec<StepId> = answers.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![StepId::QueueName, StepId::JobName]);
    assert_eq!(answers.get(StepId::JobName), Some("first"));
    assert_eq!(answers.get(StepId::ProjectCode), None);
}
