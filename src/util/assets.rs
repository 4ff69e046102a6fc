//! Styling and icon assets compiled into the binary.

use std::sync::OnceLock;

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets"]
struct PlannerAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| embedded_text("main.css")).as_str()
}

pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS
        .get_or_init(|| embedded_text("tailwind.css"))
        .as_str()
}

/// The lobster favicon as an inline SVG data URI, so the desktop shell needs
/// no asset server.
pub fn favicon_data_uri() -> &'static str {
    FAVICON
        .get_or_init(|| {
            let svg = embedded_text("favicon.svg");
            format!("data:image/svg+xml;base64,{}", base64(svg.as_bytes()))
        })
        .as_str()
}

fn embedded_text(name: &str) -> String {
    let file = PlannerAssets::get(name)
        .unwrap_or_else(|| panic!("Failed to locate embedded asset: {name}"));
    String::from_utf8(file.data.into_owned())
        .unwrap_or_else(|_| panic!("Embedded asset {name} is not valid UTF-8"))
}

fn base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut out = String::with_capacity(input.len().div_ceil(3) * 4);
    for chunk in input.chunks(3) {
        let bits = (u32::from(chunk[0]) << 16)
            | (u32::from(*chunk.get(1).unwrap_or(&0)) << 8)
            | u32::from(*chunk.get(2).unwrap_or(&0));
        for position in 0..4 {
            if position <= chunk.len() {
                let index = (bits >> (18 - 6 * position)) & 0b11_1111;
                out.push(TABLE[index as usize] as char);
            } else {
                out.push('=');
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheets_are_embedded() {
        assert!(!main_css().is_empty());
        assert!(!tailwind_css().is_empty());
    }

    #[test]
    fn favicon_is_an_svg_data_uri() {
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn base64_matches_known_vectors() {
        assert_eq!(base64(b""), "");
        assert_eq!(base64(b"f"), "Zg==");
        assert_eq!(base64(b"fo"), "Zm8=");
        assert_eq!(base64(b"foo"), "Zm9v");
        assert_eq!(base64(b"foobar"), "Zm9vYmFy");
    }
}
