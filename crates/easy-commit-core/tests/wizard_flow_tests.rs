//! End-to-end wizard runs driven by scripted keys

use easy_commit_core::{
    CommitConfig, Config, EasyCommitError, Key, NullRenderer, Renderer, Screen, ScreenView,
    ScriptedKeys, ViewContent, WizardOutcome, run_wizard,
};

/// Records every frame it is asked to draw
#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<ScreenView>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &ScreenView) -> Result<(), EasyCommitError> {
        self.frames.push(view.clone());
        Ok(())
    }
}

fn script(parts: &[&[Key]]) -> ScriptedKeys {
    ScriptedKeys::new(parts.iter().flat_map(|p| p.iter().copied()))
}

fn run(config: &Config, keys: &mut ScriptedKeys) -> WizardOutcome {
    run_wizard(config, keys, &mut NullRenderer).expect("wizard should finish")
}

#[test]
fn test_full_flow_creates_message() {
    let mut keys = script(&[
        &[Key::Return],
        &Key::chars("add login"),
        &[Key::Return],
        &Key::chars("auth"),
        &[Key::Return],
        &Key::chars("body text"),
        &[Key::Ctrl('d'), Key::Char('n'), Key::Return, Key::Return],
    ]);

    let mut renderer = RecordingRenderer::default();
    let outcome = run_wizard(&Config::default(), &mut keys, &mut renderer).unwrap();

    let WizardOutcome::Completed(message) = outcome else {
        panic!("expected a completed wizard");
    };
    assert_eq!(message.format(), "feat(auth): add login\n\nbody text");
    assert_eq!(keys.remaining(), 0);

    // Every screen was shown, in order, with matching progress
    let mut screens: Vec<Screen> = renderer.frames.iter().map(|f| f.screen).collect();
    screens.dedup();
    assert_eq!(screens, Screen::SEQUENCE[..7].to_vec());
    for frame in &renderer.frames {
        assert_eq!(frame.step, frame.screen.index() + 1);
        assert_eq!(frame.total_steps, 7);
    }
}

#[test]
fn test_minimal_flow_skips_optional_fields() {
    let mut keys = script(&[
        &[Key::Down, Key::Return],
        &Key::chars("handle empty input"),
        &[Key::Return, Key::Ctrl('s'), Key::Ctrl('d'), Key::Return, Key::Return, Key::Return],
    ]);

    let outcome = run(&Config::default(), &mut keys);
    let WizardOutcome::Completed(message) = outcome else {
        panic!("expected a completed wizard");
    };
    assert_eq!(message.format(), "fix: handle empty input");
    assert_eq!(message.scope(), None);
    assert_eq!(message.body(), None);
}

#[test]
fn test_breaking_change_adds_footer() {
    let mut keys = script(&[
        &[Key::Return],
        &Key::chars("drop v1 api"),
        &[Key::Return, Key::Return, Key::Ctrl('d'), Key::Char('y'), Key::Return, Key::Return],
    ]);

    let WizardOutcome::Completed(message) = run(&Config::default(), &mut keys) else {
        panic!("expected a completed wizard");
    };
    assert!(message.is_breaking());
    assert_eq!(
        message.format(),
        "feat!: drop v1 api\n\nBREAKING CHANGE: This commit introduces breaking changes"
    );
}

#[test]
fn test_cancel_mid_flow() {
    let mut keys = script(&[&[Key::Return], &Key::chars("half"), &[Key::Escape]]);
    assert_eq!(run(&Config::default(), &mut keys), WizardOutcome::Cancelled);
}

#[test]
fn test_cancel_from_confirmation_menu() {
    let mut keys = script(&[
        &[Key::Return],
        &Key::chars("add login"),
        &[Key::Return, Key::Return, Key::Ctrl('d'), Key::Return, Key::Return],
        &[Key::Down, Key::Down, Key::Return],
    ]);
    assert_eq!(run(&Config::default(), &mut keys), WizardOutcome::Cancelled);
}

#[test]
fn test_back_keeps_answers() {
    let mut keys = script(&[
        &[Key::Return],
        &Key::chars("add login"),
        &[Key::Return, Key::Ctrl('b')],
        // Editor is seeded with the previous answer, cursor at the end
        &Key::chars(" flow"),
        &[Key::Return, Key::Return, Key::Ctrl('d'), Key::Return, Key::Return, Key::Return],
    ]);

    let WizardOutcome::Completed(message) = run(&Config::default(), &mut keys) else {
        panic!("expected a completed wizard");
    };
    assert_eq!(message.description(), "add login flow");
}

#[test]
fn test_go_back_and_edit_from_confirmation() {
    let mut keys = script(&[
        &[Key::Return],
        &Key::chars("add login"),
        &[Key::Return],
        &Key::chars("auth"),
        &[Key::Return, Key::Ctrl('d'), Key::Return, Key::Return],
        // Confirmation: "Go back and edit" returns to the preview
        &[Key::Down, Key::Return],
        // Preview -> breaking -> body -> scope -> description
        &[Key::Ctrl('b'); 4],
        &[Key::Backspace; 5],
        &Key::chars("logout"),
        &[Key::Return, Key::Return, Key::Ctrl('d'), Key::Return, Key::Return, Key::Return],
    ]);

    let WizardOutcome::Completed(message) = run(&Config::default(), &mut keys) else {
        panic!("expected a completed wizard");
    };
    assert_eq!(message.format(), "feat(auth): add logout");
}

#[test]
fn test_go_back_from_confirmation_shows_preview() {
    let mut keys = script(&[
        &[Key::Return],
        &Key::chars("add login"),
        &[Key::Return, Key::Return, Key::Ctrl('d'), Key::Return, Key::Return],
        &[Key::Down, Key::Return, Key::Escape],
    ]);
    let mut renderer = RecordingRenderer::default();

    let outcome = run_wizard(&Config::default(), &mut keys, &mut renderer).unwrap();
    assert_eq!(outcome, WizardOutcome::Cancelled);

    let last = renderer.frames.last().unwrap();
    assert_eq!(last.screen, Screen::Preview);
    match &last.content {
        ViewContent::Preview { message, .. } => assert_eq!(message, "feat: add login"),
        other => panic!("unexpected content: {:?}", other),
    }
}

#[test]
fn test_empty_type_list_is_rejected_before_any_frame() {
    let config = Config {
        commit: CommitConfig {
            allowed_types: Vec::new(),
            ..CommitConfig::default()
        },
        ..Config::default()
    };
    let mut keys = script(&[&[Key::Return, Key::Down, Key::Return]]);
    let mut renderer = RecordingRenderer::default();

    let err = run_wizard(&config, &mut keys, &mut renderer).unwrap_err();
    assert!(matches!(err, EasyCommitError::Config(_)));
    assert!(renderer.frames.is_empty());
    assert_eq!(keys.remaining(), 3);
}

#[test]
fn test_validation_errors_are_rendered() {
    let mut keys = script(&[&[Key::Return], &Key::chars("Add login"), &[Key::Return, Key::Escape]]);
    let mut renderer = RecordingRenderer::default();

    let outcome = run_wizard(&Config::default(), &mut keys, &mut renderer).unwrap();
    assert_eq!(outcome, WizardOutcome::Cancelled);

    let last = renderer.frames.last().unwrap();
    assert_eq!(last.screen, Screen::DescriptionInput);
    assert_eq!(last.errors, vec!["Description should start with lowercase letter".to_string()]);
}

#[test]
fn test_empty_description_reports_single_error() {
    let mut keys = script(&[&[Key::Return, Key::Return, Key::Escape]]);
    let mut renderer = RecordingRenderer::default();
    run_wizard(&Config::default(), &mut keys, &mut renderer).unwrap();

    let last = renderer.frames.last().unwrap();
    assert_eq!(last.errors, vec!["Description cannot be empty".to_string()]);
}

#[test]
fn test_description_limit_truncates_typing() {
    let config = Config {
        commit: CommitConfig {
            max_description_length: 5,
            ..CommitConfig::default()
        },
        ..Config::default()
    };
    let mut keys = script(&[&[Key::Return], &Key::chars("abcdefgh"), &[Key::Escape]]);
    let mut renderer = RecordingRenderer::default();
    run_wizard(&config, &mut keys, &mut renderer).unwrap();

    let last = renderer.frames.last().unwrap();
    match &last.content {
        ViewContent::Line { value, counter, .. } => {
            assert_eq!(value, "abcde");
            let counter = counter.expect("description has a counter");
            assert_eq!((counter.current, counter.limit), (5, 5));
            assert!(counter.is_near_limit());
        }
        other => panic!("unexpected content: {:?}", other),
    }
}

#[test]
fn test_body_hard_wraps_while_typing() {
    let config = Config {
        commit: CommitConfig {
            body_line_width: 10,
            ..CommitConfig::default()
        },
        ..Config::default()
    };
    let mut keys = script(&[
        &[Key::Return],
        &Key::chars("add login"),
        &[Key::Return, Key::Return],
        &Key::chars("hello world again"),
        &[Key::Ctrl('d'), Key::Return, Key::Return, Key::Return],
    ]);

    let WizardOutcome::Completed(message) = run(&config, &mut keys) else {
        panic!("expected a completed wizard");
    };
    assert_eq!(message.body(), Some("hello\nworld\nagain"));
}

#[test]
fn test_custom_allowed_types() {
    let config = Config {
        commit: CommitConfig {
            allowed_types: vec!["feat".into(), "fix".into(), "release".into()],
            ..CommitConfig::default()
        },
        ..Config::default()
    };
    let mut keys = script(&[
        &[Key::Up, Key::Return],
        &Key::chars("cut 1.0"),
        &[Key::Return, Key::Return, Key::Ctrl('d'), Key::Return, Key::Return, Key::Return],
    ]);

    let WizardOutcome::Completed(message) = run(&config, &mut keys) else {
        panic!("expected a completed wizard");
    };
    assert_eq!(message.format(), "release: cut 1.0");
}

#[test]
fn test_exhausted_input_is_an_error() {
    let mut keys = script(&[&[Key::Return]]);
    let err = run_wizard(&Config::default(), &mut keys, &mut NullRenderer).unwrap_err();
    assert!(matches!(err, EasyCommitError::Terminal(_)));
}
