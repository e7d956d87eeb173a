//! End-to-end scenarios S1–S6, driven against a real temp file the way the
//! external interface would see them: load, tokenize, run, save.

use std::io::Write;

use tempfile::NamedTempFile;

fn run_scenario(delimiters: &[u8], command_spec: &[u8], input: &[u8]) -> Vec<u8> {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(input).expect("write input");

    let data = std::fs::read(file.path()).expect("read input back");
    let table = table_core::load_table(&data, delimiters).expect("load table");
    let commands = table_core::tokenize_commands(command_spec).expect("tokenize commands");

    let mut interp = table_core::Interpreter::new(table);
    interp.run(&commands).expect("run commands");

    table_core::dump(&interp.table)
}

#[test]
fn s1_minimal_round_trip() {
    let out = run_scenario(b",", b"", b"a,b,c\nd,e,f\n");
    assert_eq!(out, b"a,b,c\nd,e,f\n");
}

#[test]
fn s2_selector_and_set() {
    let out = run_scenario(b",", b"[2,2];set X", b"1,2,3\n4,5,6\n");
    assert_eq!(out, b"1,2,3\n4,X,6\n");
}

#[test]
fn s3_insert_column() {
    let out = run_scenario(b",", b"[1,1];icol", b"a,b\nc,d\n");
    assert_eq!(out, b",a,b\n,c,d\n");
}

#[test]
fn s4_numeric_sum() {
    let out = run_scenario(b",", b"[1,1,2,3];sum [1,1]", b"1,2,3\n4,5,6\n");
    assert_eq!(out, b"21,2,3\n4,5,6\n");
}

#[test]
fn s5_find_and_clear() {
    let out = run_scenario(b",", b"[_,_];[find ba];clear", b"foo,bar\nbaz,qux\n");
    assert_eq!(out, b"foo,\nbaz,qux\n");
}

#[test]
fn s6_temp_var() {
    let out = run_scenario(b",", b"[1,1];def _0;[2,2];use _0", b"7,8\n9,0\n");
    assert_eq!(out, b"7,8\n9,7\n");
}

#[test]
fn command_failure_means_caller_must_not_persist_output() {
    // table-cli's own `run` only writes the output file after `Interpreter::run`
    // succeeds; this test documents that the library half of that contract
    // is an error return, not a partial write.
    let data = b"a,b\n".to_vec();
    let table = table_core::load_table(&data, b",").unwrap();
    let commands = table_core::tokenize_commands(b"nonsense").unwrap();
    let mut interp = table_core::Interpreter::new(table);
    assert!(interp.run(&commands).is_err());
}
