//! `picproxy schemes` – list wire tags.

use picproxy_core::EncodingScheme;

pub fn run_schemes() -> String {
    EncodingScheme::ALL
        .iter()
        .map(|scheme| {
            if *scheme == EncodingScheme::default() {
                format!("{} (default)", scheme.as_tag())
            } else {
                scheme.as_tag().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
