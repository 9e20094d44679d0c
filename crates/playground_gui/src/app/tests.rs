//! Host-side tests: event application, flag ownership, and full-frame rendering.

use super::ui::status_bar::document_summary;
use super::*;
use playground_core::document::DEFAULT_DOCUMENT;

fn make_app(text: &str, config: &Config) -> PlaygroundApp {
    let document = InitialDocument {
        text: text.to_string(),
        source: None,
    };
    PlaygroundApp::with_document(document, Palette::one_dark(), config)
}

fn run_frame(app: &mut PlaygroundApp, ctx: &egui::Context, events: Vec<egui::Event>) {
    let input = egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(960.0, 720.0),
        )),
        modifiers: events
            .iter()
            .find_map(|event| match event {
                egui::Event::Key { modifiers, .. } => Some(*modifiers),
                _ => None,
            })
            .unwrap_or_default(),
        events,
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| app.render(ctx));
}

#[test]
fn first_frame_copies_initial_document_into_host() {
    let mut app = make_app("x := 5", &Config::default());
    assert!(app.text.is_empty());

    let ctx = egui::Context::default();
    run_frame(&mut app, &ctx, Vec::new());

    assert_eq!(app.text, "x := 5");
    assert_eq!(app.document_label, "example");
    assert!(app.style_applied);
}

#[test]
fn host_applies_text_events_last_write_wins() {
    let mut app = make_app("", &Config::default());
    app.apply_event(HostEvent::SetText("a".to_string()));
    app.apply_event(HostEvent::SetText("ab".to_string()));
    assert_eq!(app.text, "ab");
}

#[test]
fn host_clears_flag_after_recording_request() {
    let mut app = make_app("", &Config::default());
    app.apply_event(HostEvent::SetNeedTypecheck(true));
    app.acknowledge_typecheck();
    assert!(!app.need_typecheck);
    assert_eq!(app.typecheck_requests, 1);
    assert!(app.status.is_some());

    app.acknowledge_typecheck();
    assert_eq!(app.typecheck_requests, 1);
}

#[test]
fn shift_enter_reaches_host_as_single_request() {
    let mut app = make_app("x := 5", &Config::default());
    let ctx = egui::Context::default();
    let id = app.editor.id();
    run_frame(&mut app, &ctx, Vec::new());
    ctx.memory_mut(|memory| memory.request_focus(id));
    run_frame(&mut app, &ctx, Vec::new());

    run_frame(
        &mut app,
        &ctx,
        vec![egui::Event::Key {
            key: egui::Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::SHIFT,
        }],
    );

    assert_eq!(app.typecheck_requests, 1);
    assert!(!app.need_typecheck);
    assert_eq!(app.text, "x := 5");
}

#[test]
fn expired_status_is_cleared() {
    let mut app = make_app("", &Config::default());
    let now = Instant::now();
    app.status = Some(StatusMessage {
        text: "old".to_string(),
        expires_at: now,
    });
    app.expire_status(now + Duration::from_millis(1));
    assert!(app.status.is_none());
}

#[test]
fn fixed_height_from_config_is_kept() {
    let config = Config {
        editor_height: Some(480.0),
        ..Config::default()
    };
    let app = make_app(DEFAULT_DOCUMENT, &config);
    assert_eq!(app.fixed_editor_height, Some(480.0));
}

#[test]
fn document_summary_pluralizes() {
    assert_eq!(document_summary(""), "1 line, 0 chars");
    assert_eq!(document_summary("x"), "1 line, 1 char");
    assert_eq!(document_summary("x := 5\ny"), "2 lines, 8 chars");
}
