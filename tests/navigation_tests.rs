//! Navigation tests for sakis-navigator
//!
//! These tests drive the [Navigator] with key events over real directory trees built in
//! temporary directories, the same way the terminal loop does.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use sakis_navigator::app::{KeypressResult, Navigator};
use sakis_navigator::config::Config;
use sakis_navigator::core::path;
use std::error;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn utf8(p: &Path) -> Result<String, Box<dyn error::Error>> {
    Ok(p.to_str().ok_or("temp path not UTF-8")?.to_string())
}

fn build_tree(root: &Path) -> Result<(), Box<dyn error::Error>> {
    fs::create_dir_all(root.join("src").join("core"))?;
    fs::create_dir_all(root.join("docs"))?;
    File::create(root.join("Cargo.toml"))?.write_all(b"[package]\n")?;
    File::create(root.join("src").join("main.rs"))?.write_all(&[b'x'; 4096])?;
    File::create(root.join("src").join("core").join("mod.rs"))?;
    File::create(root.join("docs").join(".draft"))?;
    Ok(())
}

#[test]
fn walks_into_nested_directories_and_back() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    build_tree(tmp.path())?;
    let base = utf8(tmp.path())?;
    let config = Config::default();
    let mut nav = Navigator::from_dir(&config, &base)?;

    let names: Vec<&str> = nav.entries().iter().map(|e| e.name()).collect();
    assert_eq!(names, ["..", "Cargo.toml", "docs", "src"]);

    // down to "src" and in
    for _ in 0..3 {
        nav.handle_keypress(key(KeyCode::Char('s')));
    }
    nav.handle_keypress(key(KeyCode::Enter));
    assert_eq!(nav.path(), path::descend(&base, "src"));
    let names: Vec<&str> = nav.entries().iter().map(|e| e.name()).collect();
    assert_eq!(names, ["..", "core", "main.rs"]);
    assert_eq!(nav.entries()[2].size_kb(), 4);

    // "core"
    nav.handle_keypress(key(KeyCode::Down));
    nav.handle_keypress(key(KeyCode::Enter));
    assert!(nav.path().ends_with("/src/core"));

    // ".." twice lands back at the start
    nav.handle_keypress(key(KeyCode::Enter));
    nav.handle_keypress(key(KeyCode::Enter));
    assert_eq!(nav.path(), base);
    assert_eq!(nav.selected_idx(), 0);
    Ok(())
}

#[test]
fn dotfiles_stay_hidden_below_root() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    build_tree(tmp.path())?;
    let config = Config::default();
    let nav = Navigator::from_dir(&config, &utf8(&tmp.path().join("docs"))?)?;

    let names: Vec<&str> = nav.entries().iter().map(|e| e.name()).collect();
    assert_eq!(names, [".."]);
    Ok(())
}

#[test]
fn opening_a_file_yields_its_full_path() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    build_tree(tmp.path())?;
    let base = utf8(tmp.path())?;
    let config = Config::default();
    let mut nav = Navigator::from_dir(&config, &base)?;

    nav.handle_keypress(key(KeyCode::Down));
    let result = nav.handle_keypress(key(KeyCode::Enter));
    assert_eq!(
        result,
        KeypressResult::OpenEditor(tmp.path().join("Cargo.toml"))
    );
    assert_eq!(nav.path(), base);
    Ok(())
}

#[test]
fn custom_key_bindings_from_config_file() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    build_tree(tmp.path())?;
    let config_path = tmp.path().join("navigator.toml");
    fs::write(
        &config_path,
        r#"
        [keys]
        go_up = ["k"]
        go_down = ["j"]
        open = ["l"]
        quit = ["<c-c>"]
        "#,
    )?;
    let config = Config::load_from(&config_path);
    let mut nav = Navigator::from_dir(&config, &utf8(tmp.path())?)?;

    nav.handle_keypress(key(KeyCode::Char('j')));
    nav.handle_keypress(key(KeyCode::Char('j')));
    nav.handle_keypress(key(KeyCode::Char('s')));
    assert_eq!(nav.selected_idx(), 2);
    nav.handle_keypress(key(KeyCode::Char('k')));
    assert_eq!(nav.selected_idx(), 1);

    assert_eq!(
        nav.handle_keypress(key(KeyCode::Char('q'))),
        KeypressResult::Continue
    );
    assert_eq!(
        nav.handle_keypress(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        KeypressResult::Quit
    );
    Ok(())
}

#[test]
fn random_walk_keeps_cursor_and_path_consistent() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    build_tree(tmp.path())?;
    let base = utf8(tmp.path())?;
    let config = Config::default();
    let mut nav = Navigator::from_dir(&config, &base)?;
    let mut rng = rand::rng();

    for _ in 0..500 {
        let code = match rng.random_range(0..3) {
            0 => KeyCode::Char('w'),
            1 => KeyCode::Char('s'),
            _ => KeyCode::Enter,
        };

        // never leave the fixture through its own ".."
        let leaving = code == KeyCode::Enter
            && nav.path() == base
            && nav.selected_entry().is_some_and(|e| e.is_parent());
        if leaving {
            continue;
        }

        let before = nav.path().to_string();
        match nav.handle_keypress(key(code)) {
            KeypressResult::OpenEditor(file) => {
                assert!(file.starts_with(&before));
                assert!(file.is_file());
                assert_eq!(nav.path(), before);
            }
            KeypressResult::Quit => return Err("walk never presses quit".into()),
            KeypressResult::Continue => {}
        }

        assert!(nav.path().starts_with(&base));
        assert!(nav.selected_idx() < nav.entries().len());
        assert_eq!(nav.entries()[0].name(), "..");
        assert!(nav.notice().is_none());
    }
    Ok(())
}
