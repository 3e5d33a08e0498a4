//! Shared HTML components for the landing page.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{Markup, PreEscaped, html};

/// Inline CSS for all pages.
///
/// Flat, modern design. Hierarchy comes from spacing and a single accent
/// color. Phosphor icons via inline SVG.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--fg3:#999;--accent:#2f6bff;--accent-hover:#1f4fd1;--border:rgba(47,107,255,.15);--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:560px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
code{font-family:var(--mono);font-size:.9em}
svg.icon{width:18px;height:18px;fill:currentColor;stroke:none;vertical-align:-3px;flex-shrink:0}

.title{font-size:2.25rem;font-weight:800;letter-spacing:-.03em;margin-top:2rem}
.tagline{font-size:1.05rem;color:var(--fg2);margin-top:.5rem}
.tagline code{color:var(--accent)}

section{margin-top:2rem}
section h2{font-size:.8rem;font-weight:600;color:var(--fg3);text-transform:uppercase;letter-spacing:.05em;margin-bottom:.75rem}

table{width:100%;border-collapse:collapse;border:1px solid var(--border);border-radius:8px;overflow:hidden}
th,td{padding:.45rem .85rem;text-align:left;border-bottom:1px solid var(--border)}
th{font-size:.75rem;font-weight:600;color:var(--fg3);text-transform:uppercase;letter-spacing:.05em}
tr:last-child td{border-bottom:none}
td code{color:var(--fg2)}
td.phrase{font-size:1.35rem}
.empty{color:var(--fg3);font-size:.95rem}

.download-links{display:flex;gap:.75rem;flex-wrap:wrap}
.download{display:inline-flex;flex-direction:column;gap:.1rem;padding:.65rem 1.1rem;background:var(--accent);color:#fff;border-radius:6px;transition:background .15s}
.download:hover{background:var(--accent-hover);text-decoration:none}
.download-label{display:flex;align-items:center;gap:.45rem;font-weight:600;font-size:.95rem}
.download-file{font-family:var(--mono);font-size:.72rem;opacity:.8}

.footer{text-align:center;margin-top:2rem;font-size:.8rem;color:var(--fg3)}

@media(prefers-color-scheme:dark){
:root{--bg:#0a0a0f;--fg:#e5e5e5;--fg2:#a0a0a0;--fg3:#666;--accent:#5b8cff;--accent-hover:#7ea4ff;--border:rgba(91,140,255,.2)}
}
"#;

/// Content-Security-Policy header value.
///
/// Inline styles only. No scripts, no frames, no remote resources.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src data:; form-action 'none'; frame-ancestors 'none'";

/// Download icon (Phosphor download-simple, fill)
const ICON_DOWNLOAD: &str = r#"<svg class="icon" viewBox="0 0 256 256"><path d="M224,144v64a8,8,0,0,1-8,8H40a8,8,0,0,1-8-8V144a8,8,0,0,1,16,0v56H208V144a8,8,0,0,1,16,0Zm-101.66,5.66a8,8,0,0,0,11.32,0l40-40A8,8,0,0,0,168,96H136V32a8,8,0,0,0-16,0V96H88a8,8,0,0,0-5.66,13.66Z"/></svg>"#;

/// Render the full HTML page shell with `<head>` and body content.
pub fn page_shell(title: &str, body_content: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content="Emoji text shortcuts for your keyboard, as an iOS property list or CSV.";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (body_content) }
                footer class="footer" {
                    "Emoji names from the Unicode CLDR short names."
                }
            }
        }
    }
}

/// Render a download button showing the platform and the file it produces.
pub fn download_link(href: &str, label: &str, filename: &str) -> Markup {
    html! {
        a class="download" href=(href) download=(filename) {
            span class="download-label" {
                (PreEscaped(ICON_DOWNLOAD))
                (label)
            }
            span class="download-file" { (filename) }
        }
    }
}
