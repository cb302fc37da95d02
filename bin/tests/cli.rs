use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn climb(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_climb")).args(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn prints_expression_and_tree() {
    let output = climb(&["a ^ b ^ c"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a ^ b ^ c : ^(a,^(b,c))\n");
}

#[test]
fn expression_with_leading_minus() {
    let output = climb(&["-a * b"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "-a * b : -(*(a,b))\n");
}

#[test]
fn missing_expression() {
    let output = climb(&[]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(!stderr(&output).is_empty());
}

#[test]
fn parse_error() {
    let output = climb(&["(a"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).contains("error (c. 3): Expected token ), but got <<end>>"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn evaluates() {
    let output = climb(&["--eval", "--var", "n=6", "--var", "flag=true", "flag && n * 7 = 42"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "flag && n * 7 = 42 : &&(flag,=(*(n,7),42))\n= true\n");
}

#[test]
fn evaluation_error() {
    let output = climb(&["--eval", "1 / 0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Tried to divide by zero"), "{}", stderr(&output));
}
