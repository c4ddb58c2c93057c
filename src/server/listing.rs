//! HTML index pages for directories.

use std::path::Path;

use anyhow::Context;

use crate::files::resolver::strip_query;

/// Renders the index page of `dir`, which was requested as `request_path`.
///
/// Entries are sorted by name; directories get a trailing `/`. A `..` entry
/// pointing at the parent path is included unless the request is for `/`.
/// Fails if the directory or any of its entries cannot be stat'ed.
pub async fn render(request_path: &str, dir: &Path) -> anyhow::Result<String> {
    let mut entries = Vec::new();

    let mut read_dir = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("failed to list {}", dir.display()))?;

    while let Some(entry) = read_dir.next_entry().await? {
        let path = entry.path();
        let metadata = tokio::fs::metadata(&path)
            .await
            .with_context(|| format!("failed to stat {}", path.display()))?;

        entries.push((entry.file_name().to_string_lossy().into_owned(), metadata.is_dir()));
    }

    entries.sort();

    let url_path = strip_query(request_path);
    let title = escape_html(url_path);

    let mut html = format!(
        "<html lang=\"en\">\
         <head><title>Index of {title}</title>\
         <style type=\"text/css\">:root {{color-scheme: light dark;}}</style></head>\
         <body>\
         <h1>Directory listing for {title}</h1>\
         <hr>\
         <ul>"
    );

    if url_path != "/" {
        html.push_str(&format!(
            "<li><a href=\"{}\">..</a></li>",
            escape_html(parent_of(url_path))
        ));
    }

    for (name, is_dir) in &entries {
        let slash = if *is_dir { "/" } else { "" };
        html.push_str(&format!(
            "<li><a href=\"{}{slash}\">{}{slash}</a></li>",
            escape_html(&join_url(url_path, name)),
            escape_html(name),
        ));
    }

    html.push_str("</ul><hr></body></html>");
    Ok(html)
}

/// Parent of a URL path: `/a/b/` and `/a/b` both give `/a`.
fn parent_of(url_path: &str) -> &str {
    let trimmed = url_path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => "/",
        Some(i) => &trimmed[..i],
    }
}

fn join_url(base: &str, name: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), name)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_of_handles_trailing_slash() {
        assert_eq!(parent_of("/a/b/"), "/a");
        assert_eq!(parent_of("/a/b"), "/a");
        assert_eq!(parent_of("/a"), "/");
        assert_eq!(parent_of("/a/"), "/");
    }

    #[test]
    fn join_url_avoids_double_slash() {
        assert_eq!(join_url("/", "x"), "/x");
        assert_eq!(join_url("/docs/", "x"), "/docs/x");
        assert_eq!(join_url("/docs", "x"), "/docs/x");
    }

    #[test]
    fn escape_html_replaces_markup() {
        assert_eq!(escape_html("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }
}
