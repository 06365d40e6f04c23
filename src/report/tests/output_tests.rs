//! Tests for report file output.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use rstest::{fixture, rstest};

use crate::report::{
    domain::ReportError,
    services::{read_template, write_report},
};

struct ReportDir {
    _temp: tempfile::TempDir,
    dir: Dir,
}

#[fixture]
fn report_dir() -> ReportDir {
    let temp = tempfile::tempdir().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf-8 temp path");
    let dir = Dir::open_ambient_dir(&path, ambient_authority()).expect("open temp dir");
    ReportDir { _temp: temp, dir }
}

#[rstest]
fn written_reports_replace_existing_files(report_dir: ReportDir) {
    write_report(&report_dir.dir, "report.xml", "first").expect("first write");
    write_report(&report_dir.dir, "report.xml", "second").expect("second write");

    let contents = report_dir
        .dir
        .read_to_string("report.xml")
        .expect("read back");
    assert_eq!(contents, "second");
}

#[rstest]
fn templates_are_read_relative_to_the_directory(report_dir: ReportDir) {
    report_dir
        .dir
        .write("custom.html", "$SUMMARY$TASK_SUMMARY$TASK_MAP")
        .expect("write template");

    let template =
        read_template(&report_dir.dir, Utf8Path::new("custom.html")).expect("template read");

    assert_eq!(template, "$SUMMARY$TASK_SUMMARY$TASK_MAP");
}

#[rstest]
fn missing_template_is_an_io_error(report_dir: ReportDir) {
    let result = read_template(&report_dir.dir, Utf8Path::new("absent.html"));

    assert!(matches!(result, Err(ReportError::Io { file, .. }) if file == "absent.html"));
}
