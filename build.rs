use chrono::Datelike;

fn main() {
    // Capture the year of the build for the footer
    let year = chrono::Utc::now().year();

    // Set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_YEAR={}", year);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
