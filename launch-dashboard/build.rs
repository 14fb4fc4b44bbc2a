use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("spacex_launch_dash.csv");

    // Copy the launch dataset to OUT_DIR for include_str. The header row is
    // checked here so a renamed column fails the build rather than the page.
    let src = Path::new("../fixtures/spacex_launch_dash.csv");
    assert!(
        src.exists(),
        "fixtures/spacex_launch_dash.csv not found; run `launch-cli fetch --output fixtures/spacex_launch_dash.csv`"
    );
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(src)
        .expect("Failed to open spacex_launch_dash.csv");
    let headers = rdr.headers().expect("Failed to read CSV header").clone();
    for required in [
        "Launch Site",
        "Payload Mass (kg)",
        "class",
        "Booster Version Category",
    ] {
        assert!(
            headers.iter().any(|h| h.trim() == required),
            "spacex_launch_dash.csv is missing column {:?}",
            required
        );
    }
    assert!(
        rdr.records().next().is_some(),
        "spacex_launch_dash.csv has no launch records"
    );
    fs::copy(src, &dest).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/spacex_launch_dash.csv");
}
