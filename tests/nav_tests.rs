//! Navigator scenario tests for askfile
//!
//! These tests drive the full prompt loop with scripted input, mostly over the
//! in-memory filesystem so paths and failures can be set up exactly.
//! A few run against a temporary directory on disk.

use askfile::app::{Navigator, Outcome};
use askfile::core::{ExtensionFilter, MemFileSystem, OsFileSystem, SelectionMode};
use askfile::ui::RenderOptions;
use askfile::Error;

use std::error;
use std::fs::{self, File};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn quiet() -> RenderOptions {
    RenderOptions::new(false, "%Y-%m-%d", 58)
}

fn workspace() -> MemFileSystem {
    let mut fs = MemFileSystem::new();
    fs.add_file("/work/notes.txt", 10)
        .add_file("/work/src/lib.rs", 300)
        .add_file("/work/src/main.rs", 120);
    fs
}

fn drive(
    fs: &MemFileSystem,
    mode: SelectionMode,
    start: &str,
    script: &str,
) -> Result<(Outcome, PathBuf, String), Box<dyn error::Error>> {
    let mut nav = Navigator::new(fs, mode, None, start).with_options(quiet());
    let mut out = Vec::new();
    let outcome = nav.run(&mut Cursor::new(script.to_string()), &mut out)?;
    let dir = nav.state().current_dir().to_path_buf();
    Ok((outcome, dir, String::from_utf8(out)?))
}

#[test]
fn index_one_descends_in_file_mode() -> Result<(), Box<dyn error::Error>> {
    let fs = workspace();
    let (outcome, dir, _) = drive(&fs, SelectionMode::File, "/work", "1\n:q\n")?;
    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(dir, PathBuf::from("/work/src"));
    Ok(())
}

#[test]
fn index_one_descends_in_directory_mode_without_select() -> Result<(), Box<dyn error::Error>> {
    let fs = workspace();
    let (_, dir, _) = drive(&fs, SelectionMode::Directory, "/work", "1\n:q\n")?;
    assert_eq!(dir, PathBuf::from("/work/src"));
    Ok(())
}

#[test]
fn sel_selects_directory() -> Result<(), Box<dyn error::Error>> {
    let fs = workspace();
    let (outcome, _, _) = drive(&fs, SelectionMode::Directory, "/work", ":sel 1\n")?;
    assert_eq!(outcome, Outcome::Selected(PathBuf::from("/work/src")));

    let (outcome, _, _) = drive(&fs, SelectionMode::Directory, "/work/src", ":select ..\n")?;
    assert_eq!(outcome, Outcome::Selected(PathBuf::from("/work")));
    Ok(())
}

#[test]
fn file_mode_selects_file_by_stem() -> Result<(), Box<dyn error::Error>> {
    let fs = workspace();
    let (outcome, _, _) = drive(&fs, SelectionMode::File, "/work", "src\nmain\n")?;
    assert_eq!(outcome, Outcome::Selected(PathBuf::from("/work/src/main.rs")));
    Ok(())
}

#[test]
fn parent_of_root_is_root() -> Result<(), Box<dyn error::Error>> {
    let fs = workspace();
    let (outcome, dir, _) = drive(&fs, SelectionMode::File, "/", "..\n..\n:q\n")?;
    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(dir, PathBuf::from("/"));
    Ok(())
}

#[test]
fn quit_after_navigation_selects_nothing() -> Result<(), Box<dyn error::Error>> {
    let fs = workspace();
    let (outcome, _, _) = drive(&fs, SelectionMode::File, "/work", "src\n..\nsrc\n:QUIT\n")?;
    assert_eq!(outcome.into_path(), None);
    Ok(())
}

#[test]
fn unknown_name_redraws_same_listing() -> Result<(), Box<dyn error::Error>> {
    let fs = workspace();
    let (outcome, dir, screen) = drive(&fs, SelectionMode::File, "/work", "missing.txt\n:q\n")?;
    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(dir, PathBuf::from("/work"));
    assert_eq!(screen.matches("current directory : work\n").count(), 2);
    Ok(())
}

#[test]
fn junk_input_never_ends_the_run() -> Result<(), Box<dyn error::Error>> {
    let fs = workspace();
    let script = "99\n0\n:frobnicate\n:\n\n:sel\n:: missing\n:q\n";
    let (outcome, dir, _) = drive(&fs, SelectionMode::Directory, "/work", script)?;
    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(dir, PathBuf::from("/work"));
    Ok(())
}

#[test]
fn files_are_inert_in_directory_mode() -> Result<(), Box<dyn error::Error>> {
    let fs = workspace();
    let (outcome, dir, _) = drive(&fs, SelectionMode::Directory, "/work", "notes\n2\n:q\n")?;
    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(dir, PathBuf::from("/work"));
    Ok(())
}

#[test]
fn entering_unreadable_directory_is_fatal() -> Result<(), Box<dyn error::Error>> {
    let mut fs = workspace();
    fs.lock("/work/src");

    let mut nav = Navigator::new(&fs, SelectionMode::File, None, "/work").with_options(quiet());
    let result = nav.run(&mut Cursor::new("src\n"), &mut Vec::new());
    match result {
        Err(Error::DirectoryUnreadable { path, .. }) => {
            assert_eq!(path, PathBuf::from("/work/src"))
        }
        other => panic!("expected a fatal listing error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn filter_hides_other_files_but_not_directories() -> Result<(), Box<dyn error::Error>> {
    let mut fs = workspace();
    fs.add_file("/work/data.CSV", 5).add_file("/work/readme.md", 5);

    let filter = Some(ExtensionFilter::parse("csv"));
    let mut nav = Navigator::new(&fs, SelectionMode::File, filter, "/work").with_options(quiet());
    let mut out = Vec::new();
    let outcome = nav.run(&mut Cursor::new("readme\n2\n"), &mut out)?;

    // listing is: 1 src, 2 data.CSV
    assert_eq!(outcome, Outcome::Selected(PathBuf::from("/work/data.CSV")));
    let screen = String::from_utf8(out)?;
    assert!(!screen.contains("readme"));
    assert!(screen.contains("select a [csv] file"));
    Ok(())
}

#[test]
fn empty_filter_lists_no_files() -> Result<(), Box<dyn error::Error>> {
    let fs = workspace();
    let filter = Some(ExtensionFilter::new(Vec::<String>::new()));
    let mut nav = Navigator::new(&fs, SelectionMode::File, filter, "/work").with_options(quiet());
    let mut out = Vec::new();
    let outcome = nav.run(&mut Cursor::new("notes\nnotes.txt\n2\n:q\n"), &mut out)?;

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(nav.state().current_dir(), Path::new("/work"));
    let screen = String::from_utf8(out)?;
    assert!(!screen.contains("notes"));
    Ok(())
}

#[test]
fn real_directory_round() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    let root = fs::canonicalize(tmp.path())?;
    let mut notes = File::create(root.join("notes.txt"))?;
    write!(notes, "0123456789")?;
    fs::create_dir(root.join("src"))?;
    File::create(root.join("src").join("main.rs"))?;

    let mut nav =
        Navigator::new(OsFileSystem, SelectionMode::File, None, &root).with_options(quiet());
    let mut out = Vec::new();
    let outcome = nav.run(&mut Cursor::new("1\n..\nnotes.txt\n"), &mut out)?;
    assert_eq!(outcome, Outcome::Selected(root.join("notes.txt")));

    let screen = String::from_utf8(out)?;
    assert!(screen.contains("total file size : 10.00 B"));
    Ok(())
}

#[test]
fn real_directory_can_be_selected_with_dot() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    let root = fs::canonicalize(tmp.path())?;
    fs::create_dir(root.join("inner"))?;

    let mut nav = Navigator::new(OsFileSystem, SelectionMode::Directory, None, root.join("inner"))
        .with_options(quiet());
    let outcome = nav.run(&mut Cursor::new(":sel .\n"), &mut Vec::new())?;
    assert_eq!(outcome.into_path().as_deref(), Some(root.join("inner").as_path()));

    let missing = Path::new("/path/does/not/exist");
    let mut nav = Navigator::new(OsFileSystem, SelectionMode::File, None, missing);
    assert!(nav.run(&mut Cursor::new(""), &mut Vec::new()).is_err());
    Ok(())
}
