//! `dropgate mime <ext>` – print the MIME type for an extension.

use dropgate_core::content::mime_from_ext;

pub fn run_mime(ext: &str) {
    println!("{}", mime_from_ext(ext));
}
