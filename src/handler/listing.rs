//! Directory listing page

use std::fmt::Write;
use std::io;
use std::path::Path;
use tokio::fs;

struct Entry {
    name: String,
    is_dir: bool,
}

/// Render an HTML index of `dir`, entries sorted by name
pub async fn render(dir: &Path) -> io::Result<String> {
    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;
    while let Some(entry) = read_dir.next_entry().await? {
        let is_dir = entry
            .file_type()
            .await
            .is_ok_and(|file_type| file_type.is_dir());
        entries.push(Entry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let mut html = String::from(
        "<!doctype html>\n<meta name=\"viewport\" content=\"width=device-width\">\n<pre>\n",
    );
    for entry in &entries {
        let suffix = if entry.is_dir { "/" } else { "" };
        let _ = writeln!(
            html,
            "<a href=\"{}{suffix}\">{}{suffix}</a>",
            urlencoding::encode(&entry.name),
            escape_html(&entry.name),
        );
    }
    html.push_str("</pre>\n");
    Ok(html)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_render_sorted_with_dir_suffix() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.txt"), b"b").unwrap();
        std::fs::write(dir.path().join("a.txt"), b"a").unwrap();
        std::fs::create_dir(dir.path().join("js")).unwrap();

        let html = render(dir.path()).await.unwrap();
        let a = html.find("<a href=\"a.txt\">a.txt</a>").unwrap();
        let b = html.find("<a href=\"b.txt\">b.txt</a>").unwrap();
        let js = html.find("<a href=\"js/\">js/</a>").unwrap();
        assert!(a < b && b < js);
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.ends_with("</pre>\n"));
    }

    #[tokio::test]
    async fn test_render_escapes_names() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a <b>&c.txt"), b"").unwrap();

        let html = render(dir.path()).await.unwrap();
        assert!(html.contains("href=\"a%20%3Cb%3E%26c.txt\""));
        assert!(html.contains(">a &lt;b&gt;&amp;c.txt</a>"));
    }

    #[tokio::test]
    async fn test_render_missing_dir() {
        let dir = TempDir::new().unwrap();
        let err = render(&dir.path().join("gone")).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("it's \"x\""), "it&#39;s &#34;x&#34;");
    }
}
