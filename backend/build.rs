use std::fs;
use std::path::Path;

const PLACEHOLDER_INDEX: &str = "<!DOCTYPE html>\n<html lang=\"fr\"><head><meta charset=\"utf-8\"><title>ImmoConnect</title></head>\n<body><p>Interface non compilée: lancez `trunk build --release` dans frontend/.</p></body></html>\n";

fn main() {
    let out_dir = Path::new("static/dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static/dist");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).content_only(true),
        )
        .expect("copy frontend bundle");
    } else if !out_dir.join("index.html").exists() {
        // include_dir! needs the directory to exist even without a bundle.
        fs::create_dir_all(out_dir).expect("create static/dist");
        fs::write(out_dir.join("index.html"), PLACEHOLDER_INDEX).expect("write placeholder index");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
