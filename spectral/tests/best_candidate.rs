use std::process::Command;
use tempfile::TempDir;
use test_helpers::read_gray;

#[test]
fn small_run_writes_point_sets_spectra_and_row() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");
    let row = temp_dir.path().join("BC.png");

    let status = Command::new(env!("CARGO_BIN_EXE_best_candidate"))
        .args(["--points", "40", "--tests", "3", "--image-size", "32", "--seed", "5"])
        .arg("--output-dir")
        .arg(&out)
        .arg("--row")
        .arg(&row)
        .status()
        .unwrap();
    assert!(status.success());

    for tag in ["MBC", "EBC"] {
        for i in 0..3 {
            let points = read_gray(out.join(format!("{tag}_{i}.png")));
            assert_eq!(points.dim(), (32, 32));
            let marked = points.iter().filter(|&&v| v == 0).count();
            assert!(marked > 0 && marked <= 40, "{tag}_{i}: {marked} marked pixels");
        }
        assert_eq!(read_gray(out.join(format!("_{tag}.png"))).dim(), (32, 32));
    }

    assert_eq!(read_gray(&row).dim(), (32, 32 + 32 + 15));
}

#[test]
fn seeded_runs_are_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    let run = |name: &str| {
        let out = temp_dir.path().join(name);
        let status = Command::new(env!("CARGO_BIN_EXE_best_candidate"))
            .args(["--points", "25", "--tests", "2", "--image-size", "16", "--seed", "9"])
            .arg("--skip-dft")
            .arg("--output-dir")
            .arg(&out)
            .status()
            .unwrap();
        assert!(status.success());
        out
    };

    let first = run("a");
    let second = run("b");
    for file in ["MBC_0.png", "MBC_1.png", "EBC_0.png", "EBC_1.png"] {
        assert_eq!(read_gray(first.join(file)), read_gray(second.join(file)), "{file}");
    }
    assert!(!first.join("_MBC.png").exists());
}
