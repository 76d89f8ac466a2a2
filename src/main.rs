//! Terraview binary: opens a window whose mouse and keyboard drive the
//! trackball camera.
//!
//! Usage: `terraview [OPTIONS.toml]`

use std::path::Path;

use terraview::{Options, Viewer};

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(opts) => opts,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let viewer = Viewer::builder().with_options(options).build();
    if let Err(e) = viewer.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
