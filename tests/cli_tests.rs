use assert_cmd::Command;

fn vtarget() -> Command {
    Command::cargo_bin("vtarget").unwrap()
}

#[test]
fn test_subcommand_options() {
    let output = vtarget().output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage: vtarget <COMMAND>"), "{stderr}");
    for command in ["format", "parse", "resolve", "pick", "example"] {
        assert!(stderr.contains(command), "missing {command} in:\n{stderr}");
    }
}

#[test]
fn format_dms() {
    vtarget()
        .args(["format", "45.5083", "-190", "--dms"])
        .assert()
        .success()
        .stdout("45° 30' 29\" N, 170° 00' 00\" E\n");
}

#[test]
fn format_decimal_from_dms_input() {
    vtarget()
        .args(["format", "-0° 30' 00\"", "10", "--precision", "1", "--newline"])
        .assert()
        .success()
        .stdout("0.5° S\n10.0° E\n");
}

#[test]
fn parse_dms() {
    vtarget()
        .args(["parse", "45° 30' 15\""])
        .assert()
        .success()
        .stdout("45.504167\n");
}

#[test]
fn parse_garbage_fails() {
    vtarget()
        .args(["parse", "garbage"])
        .assert()
        .failure();
}

#[test]
fn resolve_onto_plateau() {
    vtarget()
        .args(["resolve", "--body", "tests/data/kerbin.yaml"])
        .args(["--origin", "2000000,0,0", "--direction", "-1,0,0"])
        .assert()
        .success()
        .stdout("0.000° S, 0.000° W (altitude 2000.0 m)\n");
}

#[test]
fn resolve_miss() {
    vtarget()
        .args(["resolve", "--body", "tests/data/kerbin.yaml"])
        .args(["--origin", "2000000,2000000,0", "--direction", "-1,0,0"])
        .assert()
        .success()
        .stdout("No surface point\n");
}

#[test]
fn resolve_without_surface_fails() {
    vtarget()
        .args(["resolve", "--body", "tests/data/kerbol.json"])
        .args(["--origin", "1e9,0,0", "--direction", "-1,0,0"])
        .assert()
        .failure();
}

#[test]
fn resolve_needs_one_direction_per_origin() {
    vtarget()
        .args(["resolve", "--body", "tests/data/kerbin.yaml"])
        .args(["--origin", "2000000,0,0", "--origin", "0,2000000,0", "--direction", "-1,0,0"])
        .assert()
        .failure();
}

#[test]
fn pick_and_confirm() {
    let output = vtarget()
        .args(["pick", "--body", "tests/data/kerbin.yaml", "--confirm"])
        .args(["--origin", "2000000,2000000,0", "--direction", "-1,0,0"])
        .args(["--origin", "0,2000000,0", "--direction", "0,-1,0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Preview: off the surface");
    assert_eq!(lines[1], "Preview: 0.000° S, 90.000° E");
    assert_eq!(lines[2], "State: TargetSelected");
    assert!(lines[3].starts_with("Target: 0° 00' 00\" S, 90° 00' 00\" E on Kerbin"), "{stdout}");
}

#[test]
fn pick_confirm_after_miss_selects_nothing() {
    vtarget()
        .args(["pick", "--body", "tests/data/kerbin.yaml", "--confirm"])
        .args(["--origin", "0,2000000,0", "--direction", "0,-1,0"])
        .args(["--origin", "2000000,2000000,0", "--direction", "-1,0,0"])
        .assert()
        .success()
        .stdout(concat!(
            "Preview: 0.000° S, 90.000° E\n",
            "Preview: off the surface\n",
            "Nothing to confirm: the last ray missed the surface\n",
            "State: NoTargetSelected\n",
        ));
}

#[test]
fn pick_without_confirm_cancels() {
    vtarget()
        .args(["pick", "--body", "tests/data/kerbin.yaml"])
        .args(["--origin", "0,2000000,0", "--direction", "0,-1,0"])
        .assert()
        .success()
        .stdout("Preview: 0.000° S, 90.000° E\nState: NoTargetSelected\n");
}

#[test]
fn example_lists_terrain_models() {
    vtarget()
        .arg("example")
        .assert()
        .success()
        .stdout("Available terrain models: flat, ridged, stepped\n");
}

#[test]
fn example_json() {
    let output = vtarget()
        .args(["example", "--terrain", "ridged", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"model\": \"ridged\""), "{stdout}");
    assert!(stdout.contains("\"name\": \"Kerbin\""), "{stdout}");
}

#[test]
fn example_unknown_terrain_fails() {
    vtarget()
        .args(["example", "--terrain", "cratered"])
        .assert()
        .failure();
}
