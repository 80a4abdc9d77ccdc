use eframe::egui;
use floatpad::app::PadApp;
use floatpad::config::{DEFAULT_TEXT, DROP_ERROR_TEXT};
use floatpad::drop::payload_text;
use std::io::Write;

fn bytes_drop(payload: &[u8]) -> egui::DroppedFile {
    egui::DroppedFile {
        bytes: Some(payload.to_vec().into()),
        ..Default::default()
    }
}

#[test]
fn first_drop_replaces_the_placeholder() {
    let mut app = PadApp::new();
    app.handle_dropped_files(&[bytes_drop(b"hola")]);
    assert_eq!(app.text, "hola");
}

#[test]
fn later_drops_append_on_new_lines() {
    let mut app = PadApp::new();
    app.handle_dropped_files(&[bytes_drop(b"uno")]);
    app.handle_dropped_files(&[bytes_drop(b"dos")]);
    app.handle_dropped_files(&[bytes_drop(b"tres")]);
    assert_eq!(app.text, "uno\ndos\ntres");
}

#[test]
fn typed_text_survives_a_drop() {
    let mut app = PadApp::new();
    app.text = "escrito a mano".to_owned();
    app.handle_dropped_files(&[bytes_drop(b"arrastrado")]);
    assert_eq!(app.text, "escrito a mano\narrastrado");
}

#[test]
fn several_payloads_in_one_event_merge_in_order() {
    let mut app = PadApp::new();
    app.handle_dropped_files(&[bytes_drop(b"primero"), bytes_drop(b"segundo")]);
    assert_eq!(app.text, "primero\nsegundo");
}

#[test]
fn empty_payload_appends_the_error_line() {
    let mut app = PadApp::new();
    app.text = "importante".to_owned();
    app.handle_dropped_files(&[egui::DroppedFile::default()]);
    assert_eq!(app.text, format!("importante\n{DROP_ERROR_TEXT}"));
}

#[test]
fn invalid_utf8_appends_the_error_line() {
    let mut app = PadApp::new();
    app.handle_dropped_files(&[bytes_drop(&[0xff, 0xfe, 0xfd])]);
    assert_eq!(app.text, format!("{DEFAULT_TEXT}\n{DROP_ERROR_TEXT}"));
}

#[test]
fn path_payload_reads_the_file_contents() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "desde un fichero").unwrap();

    let dropped = egui::DroppedFile {
        path: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    assert_eq!(payload_text(&dropped).unwrap(), "desde un fichero");
}

#[test]
fn missing_file_appends_the_error_line() {
    let mut app = PadApp::new();
    let dropped = egui::DroppedFile {
        path: Some(std::env::temp_dir().join("no-such-floatpad-drop.txt")),
        ..Default::default()
    };
    app.handle_dropped_files(&[dropped]);
    assert_eq!(app.text, format!("{DEFAULT_TEXT}\n{DROP_ERROR_TEXT}"));
}

#[test]
fn clear_restores_the_placeholder() {
    let mut app = PadApp::new();
    app.text = "algo".to_owned();
    app.clear_text();
    assert_eq!(app.text, DEFAULT_TEXT);
}

#[test]
fn clear_is_idempotent() {
    let mut app = PadApp::new();
    app.clear_text();
    app.clear_text();
    assert_eq!(app.text, DEFAULT_TEXT);
}
