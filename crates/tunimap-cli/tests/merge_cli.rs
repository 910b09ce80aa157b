use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn bin() -> Command {
    let mut c = Command::new(env!("CARGO_BIN_EXE_tunimap-cli"));
    c.env_remove("RUST_LOG");
    c
}

fn run_ok(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn seed_sources(dir: &Path) {
    fs::write(
        dir.join("ecole.json"),
        r#"[{
            "nom_etablissement": "École A",
            "Latitude initiale": "36,8",
            "Longitude initiale": "10,2"
        }]"#,
    )
    .unwrap();
    // Only the unaccented alias exists.
    fs::write(
        dir.join("lycees.json"),
        r#"[{"0": "7001", "1": "Tunis", "2": "Lycée Pilote de Tunis",
            "3": "36,81", "4": "10,17"}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("postes.json"),
        r#"{"data": [{"0": "12345", "1": "Poste Central", "2": "36,5", "3": "10,3"}]}"#,
    )
    .unwrap();
    fs::write(dir.join("ministere.json"), "{ not json").unwrap();
}

#[test]
fn merge_with_builtin_sources_writes_front_end_file() {
    let dir = tempfile::tempdir().unwrap();
    seed_sources(dir.path());

    let out = run_ok(bin().args(["merge", "--dir", dir.path().to_str().unwrap()]));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("total           = 3"), "{stderr}");
    assert!(stderr.contains("missing Maison des Jeunes"), "{stderr}");
    assert!(stderr.contains("error   Ministère"), "{stderr}");

    let written = fs::read(dir.path().join("src/assets/all_locations.json")).unwrap();
    let v: serde_json::Value = serde_json::from_slice(&written).unwrap();
    assert_eq!(
        v,
        serde_json::json!([
            {"nom": "École A", "categorie": "École", "lat": 36.8, "lng": 10.2},
            {"nom": "Lycée Pilote de Tunis", "categorie": "Lycée", "lat": 36.81, "lng": 10.17},
            {"nom": "Poste Central", "categorie": "Poste", "lat": 36.5, "lng": 10.3}
        ])
    );
}

#[test]
fn merge_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    seed_sources(dir.path());
    let d = dir.path().to_str().unwrap();

    run_ok(bin().args(["merge", "--dir", d, "--out", "first.json"]));
    run_ok(bin().args(["merge", "--dir", d, "--out", "second.json"]));

    assert_eq!(
        fs::read(dir.path().join("first.json")).unwrap(),
        fs::read(dir.path().join("second.json")).unwrap()
    );
}

#[test]
fn merge_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("banques.json"),
        r#"[["B1", "Banque du Sud", "33,88", "10,09"]]"#,
    )
    .unwrap();
    let cfg = dir.path().join("sources.toml");
    fs::write(
        &cfg,
        r#"
output = "out/locations.json"

[[sources]]
files = ["banque.json", "banques.json"]
category = "Banque"
[sources.strategy]
kind = "positional_scan"
"#,
    )
    .unwrap();

    run_ok(bin().args([
        "merge",
        "--dir",
        dir.path().to_str().unwrap(),
        "--config",
        cfg.to_str().unwrap(),
    ]));

    let v: serde_json::Value =
        serde_json::from_slice(&fs::read(dir.path().join("out/locations.json")).unwrap()).unwrap();
    assert_eq!(v[0]["nom"], "Banque du Sud");
    assert_eq!(v[0]["categorie"], "Banque");
}

#[test]
fn empty_directory_still_writes_an_array() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_ok(bin().args(["merge", "--dir", dir.path().to_str().unwrap()]));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("zero locations"), "{stderr}");
    assert_eq!(
        fs::read_to_string(dir.path().join("src/assets/all_locations.json")).unwrap(),
        "[]"
    );
}

#[test]
fn inspect_prints_decisions() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("postes.json"),
        r#"[["Poste Central", "36,5", "10,3"], ["12345", "2021"]]"#,
    )
    .unwrap();

    let out = run_ok(bin().args([
        "inspect",
        "--category",
        "Poste",
        "--dir",
        dir.path().to_str().unwrap(),
    ]));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let accepted = r#"ok   {"nom":"Poste Central","categorie":"Poste","lat":36.5,"lng":10.3}"#;
    assert!(stdout.contains(accepted), "{stdout}");
    assert!(stdout.contains("drop no latitude"), "{stdout}");
    assert!(stdout.contains("accepted = 1/2"), "{stdout}");
}

#[test]
fn inspect_unknown_category_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = bin()
        .args(["inspect", "--category", "Hôpital", "--dir", dir.path().to_str().unwrap()])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown category"));
}

#[test]
fn sources_prints_builtin_config() {
    let out = run_ok(bin().arg("sources"));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("lycées.json"), "{stdout}");
    assert!(stdout.contains("positional_scan"), "{stdout}");
    assert!(stdout.contains("nom_etablissement_ar"), "{stdout}");
}
