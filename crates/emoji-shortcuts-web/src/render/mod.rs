//! HTML rendering for the landing page.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic XSS protection (all dynamic values are escaped).

pub mod components;

use emoji_shortcuts_core::EmojiEntry;
use emoji_shortcuts_core::export::{CSV_FILENAME, PLIST_FILENAME};
use maud::{Markup, html};

use self::components::{download_link, page_shell};

/// Render the landing page: a preview table and the download links.
///
/// `total` is the size of the full mapping, `examples` the preview sample.
pub fn index_page(site_name: &str, examples: &[EmojiEntry], total: usize) -> Markup {
    let body = html! {
        h1 class="title" { (site_name) }
        p class="tagline" {
            "Type " code { ":fire" } " and get 🔥. Import "
            (total) " emoji shortcuts into your keyboard's text replacements."
        }

        section class="preview" {
            h2 { "Preview" }
            @if examples.is_empty() {
                p class="empty" { "No emoji shortcuts are available." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Shortcut" }
                            th { "Emoji" }
                        }
                    }
                    tbody {
                        @for entry in examples {
                            tr {
                                td { code { (entry.shortcut) } }
                                td class="phrase" { (entry.phrase) }
                            }
                        }
                    }
                }
            }
        }

        section class="downloads" {
            h2 { "Download" }
            div class="download-links" {
                (download_link("/download/ios", "iOS", PLIST_FILENAME))
                (download_link("/download/android", "Android & others", CSV_FILENAME))
            }
        }
    };

    page_shell(site_name, body)
}
