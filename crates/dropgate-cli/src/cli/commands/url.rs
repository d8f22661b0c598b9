//! `dropgate url <url>` – classify a drop source.

use dropgate_core::url_model::{classify_url, url_scheme, UrlShape};

pub fn run_url(url: &str) {
    println!("{}", describe(url));
}

fn describe(url: &str) -> String {
    let shape = classify_url(url);
    let label = match shape {
        UrlShape::Empty => "empty",
        UrlShape::Relative => "relative",
        UrlShape::Blob => "blob",
        UrlShape::Remote => "remote",
        UrlShape::Data => "data",
    };
    match url_scheme(url) {
        Some(scheme) if shape != UrlShape::Relative => format!("{label} (scheme: {scheme})"),
        _ => label.to_string(),
    }
}
