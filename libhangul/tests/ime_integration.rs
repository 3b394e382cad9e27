// libhangul/tests/ime_integration.rs
//
// End-to-end keyboard flows through the Hangul engine factories.

use libhangul::{
    create_ime_engine, create_ime_engine_dubeolsik, create_ime_engine_kiosk, HangulConfig,
    HangulImeEngine, InputMode, KeyEvent, KeyResult, KeyboardLayout,
};

fn press(engine: &mut HangulImeEngine, keys: &str) {
    for ch in keys.chars() {
        let key = match ch {
            ' ' => KeyEvent::Space,
            c => KeyEvent::Char(c),
        };
        engine.process_key(key);
    }
}

fn backspace(engine: &mut HangulImeEngine, times: usize) {
    for _ in 0..times {
        engine.process_key(KeyEvent::Backspace);
    }
}

#[test]
fn kiosk_name_entry() {
    let mut ime = create_ime_engine_kiosk();
    press(&mut ime, "ㅎㅗㅇㄱㅣㄹㄷㅗㅇ ㅇㅏㅂㅓㅈㅣ");

    let ctx = ime.context();
    assert_eq!(ctx.buffer_text, "홍길동 아버");
    assert_eq!(ctx.preedit_text, "지");
    assert_eq!(ctx.display_text(), "홍길동 아버지");
}

#[test]
fn kiosk_shift_gives_tense_consonant() {
    let mut ime = create_ime_engine_kiosk();
    ime.process_key(KeyEvent::Shift);
    press(&mut ime, "ㄱㅏ");
    // Shift stays latched on the Korean page
    assert!(ime.context().shift_active);
    ime.process_key(KeyEvent::Shift);
    press(&mut ime, "ㅁ");
    assert_eq!(ime.display_text(), "깜");
}

#[test]
fn backspace_unwinds_compound_final() {
    let mut ime = create_ime_engine_kiosk();
    press(&mut ime, "ㄷㅏㄹㄱ");
    assert_eq!(ime.context().preedit_text, "닭");

    let mut seen = Vec::new();
    for _ in 0..4 {
        ime.process_key(KeyEvent::Backspace);
        seen.push(ime.context().preedit_text.clone());
    }
    assert_eq!(seen, ["달", "다", "ㄷ", ""]);
    assert_eq!(ime.display_text(), "");
}

#[test]
fn backspace_reaches_committed_text() {
    let mut ime = create_ime_engine_kiosk();
    press(&mut ime, "ㅎㅏㄴㄱㅡㄹ");
    assert_eq!(ime.context().buffer_text, "한");

    backspace(&mut ime, 3);
    assert_eq!(ime.display_text(), "한");
    // Committed syllables go as a whole
    backspace(&mut ime, 1);
    assert_eq!(ime.display_text(), "");
    assert_eq!(ime.process_key(KeyEvent::Backspace), KeyResult::NotHandled);
}

#[test]
fn vowel_without_lead_commits_previous_syllable() {
    let mut ime = create_ime_engine_kiosk();
    press(&mut ime, "ㄱㅏㅏ");
    assert_eq!(ime.context().buffer_text, "가");
    assert_eq!(ime.context().preedit_text, "ㅏ");

    press(&mut ime, "ㄴ");
    assert_eq!(ime.context().buffer_text, "가ㅏ");
    assert_eq!(ime.context().preedit_text, "ㄴ");
}

#[test]
fn digit_closes_syllable() {
    let mut ime = create_ime_engine_kiosk();
    press(&mut ime, "ㄱㅏ");
    ime.process_key(KeyEvent::Digit(1));
    press(&mut ime, "ㄴ");
    // ㄴ does not become the final of 가
    assert_eq!(ime.display_text(), "가1ㄴ");
}

#[test]
fn mode_switch_keeps_open_syllable() {
    let mut ime = create_ime_engine_kiosk();
    press(&mut ime, "ㅎㅏ");
    ime.process_key(KeyEvent::ToggleMode);
    assert_eq!(ime.context().mode, InputMode::Latin);
    press(&mut ime, "abc");
    assert_eq!(ime.display_text(), "하abc");
}

#[test]
fn dubeolsik_typing() {
    let mut ime = create_ime_engine_dubeolsik();
    press(&mut ime, "gksrmf dkssud");
    assert_eq!(ime.display_text(), "한글 안녕");

    ime.process_key(KeyEvent::Space);
    press(&mut ime, "Rk");
    assert_eq!(ime.display_text(), "한글 안녕 까");
}

#[test]
fn submit_flushes_and_publishes() {
    let mut ime = create_ime_engine_kiosk();
    assert_eq!(ime.process_key(KeyEvent::Submit), KeyResult::NotHandled);

    press(&mut ime, "ㅎㅗㅇㄱㅣㄹㄷㅗㅇ");
    assert!(ime.context().submit_enabled);
    assert_eq!(ime.process_key(KeyEvent::Submit), KeyResult::Submitted);
    assert_eq!(ime.context().submit_text, "홍길동");
    assert_eq!(ime.context().preedit_text, "");
}

#[test]
fn engine_from_toml_config() {
    let config = HangulConfig::from_toml_str(
        "layout = \"dubeolsik\"\ninitial_mode = \"latin\"\n",
    )
    .unwrap();
    let mut ime = create_ime_engine(config);
    assert_eq!(ime.composer().layout(), KeyboardLayout::Dubeolsik);
    assert_eq!(ime.context().mode, InputMode::Latin);

    press(&mut ime, "gk");
    assert_eq!(ime.display_text(), "gk");
    ime.process_key(KeyEvent::ToggleMode);
    press(&mut ime, "gk");
    assert_eq!(ime.display_text(), "gk하");
}
