use crate::classifier::CommentSyntax;
use crate::config::{Config, ContentRule};
use crate::runner::TESTING_TERMINATED;
use crate::violation::{Severity, Violation};

use super::*;

fn package(files: &[&str]) -> Package {
    Package::from_paths("/pkg", files.to_vec())
}

fn run_builtin(package: &Package, config: &Config) -> RunReport {
    let mut runner = Runner::new();
    register_builtin_rules(&mut runner, package, config).unwrap();
    runner.run();
    runner.into_report()
}

fn codes_of(report: &RunReport) -> Vec<&str> {
    report.violations.iter().map(Violation::code).collect()
}

fn content_rule(id: &str, contains: Option<&str>, regex: Option<&str>) -> ContentRule {
    ContentRule {
        id: id.to_string(),
        code: "BANNED".to_string(),
        severity: Severity::Fail,
        contains: contains.map(String::from),
        regex: regex.map(String::from),
        ignore: Vec::new(),
        files: vec!["**/*.php".to_string()],
        comments: None,
    }
}

const VALID: &[&str] = &["license.txt", "install.xml", "contrib/modx.prosilver.en.xsl"];

#[test]
fn valid_package_passes_builtin_rules() {
    let report = run_builtin(&package(VALID), &Config::default());

    assert!(report.failed_tests.is_empty(), "{:?}", report.failed_tests);
    assert!(report.violations.is_empty());
    let ids: Vec<&str> = report.outcomes.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, BUILTIN_RULE_IDS);
}

#[test]
fn empty_package_terminates_run() {
    let report = run_builtin(&package(&[]), &Config::default());

    assert!(report.terminated);
    assert_eq!(report.failed_tests, ["package_files"]);
    assert_eq!(codes_of(&report), [codes::NO_FILES, TESTING_TERMINATED]);
}

#[test]
fn missing_stylesheet_fails_without_terminating() {
    let report = run_builtin(&package(&["license.txt", "install.xml"]), &Config::default());

    assert!(!report.terminated);
    assert_eq!(report.failed_tests, ["xsl"]);
    assert_eq!(codes_of(&report), [codes::NO_XSL_FILE]);
    assert_eq!(report.violations[0].severity(), Severity::Fail);
    assert_eq!(report.outcomes.len(), BUILTIN_RULE_IDS.len());
}

#[test]
fn stylesheet_extension_is_configurable() {
    let mut config = Config::default();
    config.package.stylesheet_extension = "css".to_string();

    let report = run_builtin(&package(&["license.txt", "style.CSS"]), &config);

    assert!(!report.failed_tests.contains(&"xsl".to_string()));
}

#[test]
fn license_found_in_subdirectory_any_case() {
    let report = run_builtin(
        &package(&["docs/LICENSE.TXT", "a.xsl"]),
        &Config::default(),
    );
    assert!(report.failed_tests.is_empty());
}

#[test]
fn missing_license_fails() {
    let report = run_builtin(&package(&["a.xsl", "license.md"]), &Config::default());
    assert_eq!(report.failed_tests, ["license"]);
    assert_eq!(codes_of(&report), [codes::NO_LICENSE]);
}

#[test]
fn misnamed_install_files_are_reported() {
    let report = run_builtin(
        &package(&[
            "license.txt",
            "a.xsl",
            "templates/prosilver.xml",
            "contrib/English_lang.XML",
            "en.xml",
        ]),
        &Config::default(),
    );

    assert_eq!(report.failed_tests, ["prosilver_english"]);
    let reported: Vec<(&str, &str)> = report
        .violations
        .iter()
        .map(|v| (v.code(), v.args()[0].as_str()))
        .collect();
    assert_eq!(
        reported,
        [
            (codes::ENGLISH_NO_MAIN_MODX, "contrib/English_lang.XML"),
            (codes::ENGLISH_NO_MAIN_MODX, "en.xml"),
            (codes::PROSILVER_NO_MAIN_MODX, "templates/prosilver.xml"),
        ]
    );
}

#[test]
fn unwanted_pairs_are_reported_once() {
    let report = run_builtin(
        &package(&["license.txt", "a.xsl", "dir/.svn/x", "DIR/.SVN/y"]),
        &Config::default(),
    );

    let unwanted: Vec<&Violation> = report
        .violations
        .iter()
        .filter(|v| v.code() == codes::UNWANTED_FILE)
        .collect();
    assert_eq!(unwanted.len(), 1);
    assert_eq!(unwanted[0].severity(), Severity::Notice);
    assert_eq!(unwanted[0].args(), ["DIR/", ".SVN"]);
    assert_eq!(report.failed_tests, ["unwanted"]);
}

#[test]
fn unwanted_at_root_reports_dot_slash() {
    let report = run_builtin(
        &package(&["license.txt", "a.xsl", "__MACOSX/._a.xsl", "Thumbs.db"]),
        &Config::default(),
    );

    let args: Vec<Vec<String>> = report
        .violations
        .iter()
        .map(|v| v.args().to_vec())
        .collect();
    assert_eq!(args, [vec!["./", "Thumbs.db"], vec!["./", "__MACOSX"]]);
}

#[test]
fn unwanted_requires_whole_segment() {
    let report = run_builtin(
        &package(&["license.txt", "a.xsl", "my.svn/x", "docs/not.ds_store.txt"]),
        &Config::default(),
    );
    assert!(report.violations.is_empty());
}

#[test]
fn unwanted_nested_occurrences_use_deepest_directory() {
    let report = run_builtin(
        &package(&["license.txt", "a.xsl", "a/.svn/b/.svn/entries"]),
        &Config::default(),
    );
    assert_eq!(report.violations[0].args(), ["a/.svn/b/", ".svn"]);
}

#[test]
fn empty_unwanted_list_always_passes() {
    let mut config = Config::default();
    config.package.unwanted.clear();

    let report = run_builtin(&package(&["license.txt", "a.xsl", ".svn/x"]), &config);

    assert!(report.failed_tests.is_empty());
}

#[test]
fn content_rule_reports_lines_with_subject() {
    let pkg = package(&["license.txt", "a.xsl", "root/index.php", "root/readme.txt"]);
    let mut contents = PackageContents::new();
    contents.insert(
        "root/index.php",
        vec![
            "<?php".to_string(),
            "/* eval( in docs".to_string(),
            "*/ eval($code);".to_string(),
        ],
    );
    contents.insert("root/readme.txt", vec!["eval(".to_string()]);
    let rules = vec![
        CompiledContentRule::compile(
            &content_rule("no_eval", Some("eval("), None),
            &CommentSyntax::c_style(),
        )
        .unwrap(),
    ];

    let mut runner = Runner::new();
    register_content_rules(&mut runner, &rules, &pkg, &contents).unwrap();
    runner.run();
    let report = runner.into_report();

    assert_eq!(report.failed_tests, ["no_eval"]);
    assert_eq!(report.violations.len(), 1);
    let v = &report.violations[0];
    assert_eq!(v.subject(), Some(std::path::Path::new("root/index.php")));
    assert_eq!(v.args(), ["3", "[code]*/ eval($code);[/code]"]);
}

#[test]
fn content_rule_with_regex_sees_comments() {
    let pkg = package(&["x.php"]);
    let mut contents = PackageContents::new();
    contents.insert("x.php", vec!["// eval(1)".to_string()]);
    let rules = vec![
        CompiledContentRule::compile(
            &content_rule("no_eval_re", None, Some(r"eval\(")),
            &CommentSyntax::c_style(),
        )
        .unwrap(),
    ];

    let mut runner = Runner::new();
    register_content_rules(&mut runner, &rules, &pkg, &contents).unwrap();
    runner.run();

    assert!(runner.failed_test("no_eval_re"));
}

#[test]
fn compile_rejects_missing_predicate() {
    let err = CompiledContentRule::compile(
        &content_rule("empty", None, None),
        &CommentSyntax::c_style(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("exactly one of contains or regex"));
}

#[test]
fn compile_uses_rule_comment_override() {
    let mut rule = content_rule("hash", Some("print"), None);
    rule.comments = Some(CommentSyntax::new(vec!["#"], ("", "")));
    rule.files = vec!["*.py".to_string()];
    let compiled = CompiledContentRule::compile(&rule, &CommentSyntax::c_style()).unwrap();

    let pkg = package(&["a.py"]);
    let mut contents = PackageContents::new();
    contents.insert("a.py", vec!["x = 1 # print".to_string(), "// print".to_string()]);
    let rules = [compiled];

    let mut runner = Runner::new();
    register_content_rules(&mut runner, &rules, &pkg, &contents).unwrap();
    runner.run();
    let report = runner.into_report();

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].args()[0], "2");
    assert!(rules[0].selects("a.py"));
    assert!(!rules[0].selects("a.php"));
}

#[test]
fn check_package_runs_builtin_then_content_rules() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("license.txt"), "GPL").unwrap();
    std::fs::write(dir.path().join("a.xsl"), "<xsl/>").unwrap();
    std::fs::write(dir.path().join("index.php"), "<?php\neval($x);\n").unwrap();
    let pkg = Package::scan(dir.path()).unwrap();
    let mut config = Config::default();
    config
        .content
        .rules
        .push(content_rule("no_eval", Some("eval("), None));

    let report = check_package(&pkg, &config).unwrap();

    let ids: Vec<&str> = report.outcomes.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids.last(), Some(&"no_eval"));
    assert_eq!(report.failed_tests, ["no_eval"]);
    assert!(report.has_failures());
}
