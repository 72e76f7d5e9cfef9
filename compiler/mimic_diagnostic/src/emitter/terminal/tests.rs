use super::*;
use crate::ErrorCode;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::M0004)
        .with_message("generic arity mismatch: `Acme.Repo`2` has 2 type parameters, `RepoStandIn` declares 1")
        .with_subject("Acme.Repo`2")
        .with_note("unbound generic mode pairs parameters one-for-one")
        .with_suggestion("declare `RepoStandIn<T1, T2>`")
}

#[test]
fn test_terminal_emitter_no_color() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);

    emitter.emit(&sample_diagnostic());
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("error[M0004]: generic arity mismatch"));
    assert!(text.contains("--> Acme.Repo`2"));
    assert!(text.contains("= note: unbound generic mode"));
    assert!(text.contains("= help: declare"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Always, false);

    emitter.emit(&sample_diagnostic());
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\x1b[1;31merror"));
    assert!(text.contains("[M0004]"));
}

#[test]
fn test_auto_mode_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_summary_wording() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.finish(Tally {
        succeeded: 3,
        failed: 1,
    });
    emitter.finish(Tally {
        succeeded: 1,
        failed: 0,
    });

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("error: 1 request failed; 3 blueprints generated"));
    assert!(text.contains("generated 1 blueprint\n"));
}
