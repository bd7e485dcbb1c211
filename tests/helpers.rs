use serde_json::{json, Value};
use similar_asserts::assert_eq;
use solc_helpers::{
    artifacts::{BASE_PATH_PLACEHOLDER, DEFAULT_CONTRACT_OUTPUTS},
    error::SolcError,
    make_solc_input, sol_output, utils, HelperConfig, SolcInput,
};
use std::{fs, path::PathBuf};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// A temporary project root, canonicalized so expected paths match resolved ones.
struct TempRoot {
    _dir: tempfile::TempDir,
    root: PathBuf,
}

impl TempRoot {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = utils::canonicalize(dir.path()).unwrap();
        Self { _dir: dir, root }
    }

    fn base(&self) -> &str {
        self.root.to_str().unwrap()
    }

    fn config(&self) -> HelperConfig {
        HelperConfig::default().with_output_file(self.root.join("temp_input.json"))
    }
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn can_make_solc_input() {
    init_tracing();
    let tmp = TempRoot::new();
    let base = tmp.base();

    let written = make_solc_input(&tmp.config(), base, "contracts/Token.sol", "Token").unwrap();
    assert_eq!(written, tmp.root.join("temp_input.json"));

    let doc = read_json(&written);
    assert_eq!(
        doc,
        json!({
            "language": "Solidity",
            "sources": {
                "contracts/Token.sol": {"urls": [format!("{base}/contracts/Token.sol")]}
            },
            "settings": {
                "remappings": [
                    format!("@openzeppelin/contracts/={base}/node_modules/@openzeppelin/contracts/"),
                    format!("@openzeppelin/contracts-upgradeable/={base}/node_modules/@openzeppelin/contracts-upgradeable/"),
                ],
                "optimizer": {"enabled": true, "runs": 200},
                "metadata": {"useLiteralContent": true},
                "outputSelection": {"contracts/Token.sol": {"Token": ["abi", "devdoc", "userdoc"]}}
            }
        })
    );
}

#[test]
fn written_input_has_stable_layout() {
    let tmp = TempRoot::new();
    let path = make_solc_input(&tmp.config(), "/repo", "a.sol", "A").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let urls = utils::absolute_path("/repo/a.sol").unwrap();
    let expected = format!(
        concat!(
            r#"{{"language": "Solidity", "sources": {{"a.sol": {{"urls": ["{url}"]}}}}, "#,
            r#""settings": {{"remappings": ["#,
            r#""@openzeppelin/contracts/=/repo/node_modules/@openzeppelin/contracts/", "#,
            r#""@openzeppelin/contracts-upgradeable/=/repo/node_modules/@openzeppelin/contracts-upgradeable/"], "#,
            r#""optimizer": {{"enabled": true, "runs": 200}}, "#,
            r#""metadata": {{"useLiteralContent": true}}, "#,
            r#""outputSelection": {{"a.sol": {{"A": ["abi", "devdoc", "userdoc"]}}}}}}}}"#
        ),
        url = utils::path_to_string(&urls)
    );
    assert_eq!(content, expected);
}

#[test]
fn make_solc_input_is_idempotent() {
    let tmp = TempRoot::new();
    let config = tmp.config();

    let first = make_solc_input(&config, tmp.base(), "contracts/Token.sol", "Token").unwrap();
    let first = fs::read(first).unwrap();
    let second = make_solc_input(&config, tmp.base(), "contracts/Token.sol", "Token").unwrap();
    let second = fs::read(second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn make_solc_input_overwrites_previous_document() {
    let tmp = TempRoot::new();
    let config = tmp.config();
    fs::write(&config.output_file, "x".repeat(4096)).unwrap();

    make_solc_input(&config, tmp.base(), "a.sol", "A").unwrap();
    make_solc_input(&config, tmp.base(), "b.sol", "B").unwrap();

    let doc = read_json(&config.output_file);
    assert_eq!(doc["sources"].as_object().unwrap().len(), 1);
    assert!(doc["sources"].get("b.sol").is_some());
    assert_eq!(doc["settings"]["outputSelection"], json!({"b.sol": {"B": DEFAULT_CONTRACT_OUTPUTS}}));
}

#[test]
fn accepts_unvalidated_arguments() {
    let tmp = TempRoot::new();
    let config = tmp.config();

    let path = make_solc_input(&config, tmp.base(), "", "").unwrap();
    let doc = read_json(&path);
    assert_eq!(doc["sources"][""]["urls"][0], json!(tmp.base()));
    assert_eq!(doc["settings"]["outputSelection"][""][""], json!(["abi", "devdoc", "userdoc"]));

    let path = make_solc_input(&config, tmp.base(), "../outside/X.sol", "X").unwrap();
    let doc = read_json(&path);
    let expected = utils::absolute_path(tmp.root.parent().unwrap().join("outside/X.sol")).unwrap();
    assert_eq!(doc["sources"]["../outside/X.sol"]["urls"][0], json!(utils::path_to_string(&expected)));
}

#[test]
fn remappings_never_keep_placeholder() {
    let tmp = TempRoot::new();
    for base in ["/repo", ".", "relative/dir", "/with space", "/x/[BASE_PATH]"] {
        let path = make_solc_input(&tmp.config(), base, "contracts/Token.sol", "Token").unwrap();
        let input: SolcInput = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        for remapping in &input.settings.remappings {
            let prefix = remapping.split_once('=').unwrap().1;
            assert!(prefix.starts_with(&format!("{base}/node_modules/@openzeppelin/")));
            if !base.contains(BASE_PATH_PLACEHOLDER) {
                assert!(!remapping.contains(BASE_PATH_PLACEHOLDER));
            }
        }
    }
}

#[test]
fn fails_on_unwritable_output() {
    let tmp = TempRoot::new();
    let config = HelperConfig::default().with_output_file(tmp.root.join("missing/temp_input.json"));

    let err = make_solc_input(&config, tmp.base(), "a.sol", "A").unwrap_err();
    match err {
        SolcError::Io(err) => {
            assert_eq!(err.path(), tmp.root.join("missing/temp_input.json").as_path())
        }
        err => panic!("unexpected error: {err}"),
    }
}

#[test]
fn can_extract_contract_output() {
    let tmp = TempRoot::new();
    let path = tmp.root.join("out.json");
    fs::write(
        &path,
        r#"{"contracts": {"a.sol": {"Foo": {"abi": []}, "Bar": {"abi": [{"type": "fallback"}]}}}, "sources": {"a.sol": {"id": 0}}}"#,
    )
    .unwrap();

    let value = sol_output(&path, "a.sol", "Foo").unwrap();
    assert_eq!(value, json!({"abi": []}));
    assert_eq!(solc_helpers::json::to_string(&value).unwrap().as_str(), r#"{"abi": []}"#);
}

#[test]
fn sol_output_missing_keys_are_fatal() {
    init_tracing();
    let tmp = TempRoot::new();
    let path = tmp.root.join("out.json");
    fs::write(
        &path,
        r#"{"errors": [{"severity": "error", "type": "ParserError", "message": "Expected ';'"}], "contracts": {"a.sol": {"Foo": {"abi": []}}}}"#,
    )
    .unwrap();

    assert!(matches!(
        sol_output(&path, "a.sol", "Missing").unwrap_err(),
        SolcError::ContractNotFound { .. }
    ));
    assert!(matches!(sol_output(&path, "b.sol", "Foo").unwrap_err(), SolcError::SourceNotFound(_)));

    fs::write(&path, r#"{"errors": []}"#).unwrap();
    assert!(matches!(sol_output(&path, "a.sol", "Foo").unwrap_err(), SolcError::MissingContracts));
}

#[test]
fn sol_output_ignores_malformed_errors() {
    let tmp = TempRoot::new();
    let path = tmp.root.join("out.json");
    for errors in ["null", "{}", r#""ParserError""#] {
        let doc = format!(r#"{{"errors": {errors}, "contracts": {{"a.sol": {{"Foo": {{"abi": []}}}}}}}}"#);
        fs::write(&path, doc).unwrap();
        assert_eq!(sol_output(&path, "a.sol", "Foo").unwrap(), json!({"abi": []}));
    }

    fs::write(&path, r#"{"errors": {}, "contracts": {"a.sol": {}}}"#).unwrap();
    assert!(matches!(
        sol_output(&path, "a.sol", "Foo").unwrap_err(),
        SolcError::ContractNotFound { .. }
    ));
}

#[test]
fn sol_output_keeps_large_numbers() {
    let tmp = TempRoot::new();
    let path = tmp.root.join("out.json");
    fs::write(
        &path,
        r#"{"contracts": {"a.sol": {"Foo": {"n": 100000000000000000000, "gas": {"min": -1, "avg": 21000.50}}}}}"#,
    )
    .unwrap();

    let value = sol_output(&path, "a.sol", "Foo").unwrap();
    assert_eq!(
        solc_helpers::json::to_string(&value).unwrap().as_str(),
        r#"{"n": 100000000000000000000, "gas": {"min": -1, "avg": 21000.50}}"#
    );
}

#[test]
fn sol_output_reports_unreadable_files() {
    let tmp = TempRoot::new();
    let missing = tmp.root.join("missing.json");
    assert!(matches!(sol_output(&missing, "a.sol", "Foo").unwrap_err(), SolcError::Io(_)));

    let invalid = tmp.root.join("invalid.json");
    fs::write(&invalid, "{\"contracts\": ").unwrap();
    assert!(matches!(
        sol_output(&invalid, "a.sol", "Foo").unwrap_err(),
        SolcError::ParseJson { .. }
    ));
}

#[test]
fn round_trips_with_written_input() {
    let tmp = TempRoot::new();
    let written = make_solc_input(&tmp.config(), tmp.base(), "a.sol", "Foo").unwrap();

    // reuse the input's outputSelection as a stand-in compiler output
    let input = read_json(&written);
    let output = json!({"contracts": input["settings"]["outputSelection"]});
    let path = tmp.root.join("out.json");
    fs::write(&path, output.to_string()).unwrap();

    assert_eq!(sol_output(&path, "a.sol", "Foo").unwrap(), json!(["abi", "devdoc", "userdoc"]));
}
