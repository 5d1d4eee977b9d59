// src/report/markdown.rs
// =============================================================================
// Turns grouped files into the markdown checklist.
//
// Output format, one block per directory:
//
//   * ###[src/github](https://github.com/o/r/tree/main/src/github)
//   - [ ] [classify](https://github.com/o/r/blob/main/src/github/classify.rs)
//   - [ ] [link](https://github.com/o/r/blob/main/src/github/link.rs)
//   <blank line>
//
// The file is named after the last segment of the repository URL and is
// only written once the crawl has succeeded.
// =============================================================================

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use url::Url;

use super::group::Grouped;

// Heading text for the repository root, whose directory name is empty
const ROOT_DISPLAY_NAME: &str = "/";

pub fn render(grouped: &Grouped) -> String {
    let mut out = String::new();

    for (dir, files) in grouped {
        let dir_name = if dir.name.is_empty() {
            ROOT_DISPLAY_NAME
        } else {
            dir.name.as_str()
        };
        // Writing into a String can't fail
        let _ = writeln!(out, "* ###[{}]({})", dir_name, dir.href);
        for file in files {
            let _ = writeln!(out, "- [ ] [{}]({})", file.name, file.href);
        }
        out.push('\n');
    }

    out
}

// "https://github.com/linksplatform/Setters/" -> "Setters.md"
pub fn file_name(repo_url: &Url) -> String {
    let stem = repo_url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or("checklist");
    format!("{}.md", stem)
}

// Writes the rendered checklist into `dir` (created if needed) and returns
// the path of the new file.
pub fn write(dir: &Path, repo_url: &Url, grouped: &Grouped) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("could not create {}", dir.display()))?;

    let path = dir.join(file_name(repo_url));
    fs::write(&path, render(grouped)).with_context(|| format!("could not write {}", path.display()))?;

    tracing::info!(path = %path.display(), groups = grouped.len(), "wrote checklist");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{DirectoryLink, FileLink};
    use crate::report::group;
    use pretty_assertions::assert_eq;

    fn file(dir: &str, name: &str) -> FileLink {
        let dir_path = if dir.is_empty() { String::new() } else { format!("/{}", dir) };
        FileLink {
            name: name.to_string(),
            href: format!("https://github.com/o/r/blob/main{}/{}.md", dir_path, name),
            parent: DirectoryLink {
                name: dir.to_string(),
                href: format!("https://github.com/o/r/tree/main{}", dir_path),
            },
        }
    }

    #[test]
    fn test_render_checklist() {
        let grouped = group(&[file("docs", "guide"), file("", "readme"), file("docs", "faq")]);

        let expected = "\
* ###[/](https://github.com/o/r/tree/main)
- [ ] [readme](https://github.com/o/r/blob/main/readme.md)

* ###[docs](https://github.com/o/r/tree/main/docs)
- [ ] [guide](https://github.com/o/r/blob/main/docs/guide.md)
- [ ] [faq](https://github.com/o/r/blob/main/docs/faq.md)

";
        assert_eq!(render(&grouped), expected);
    }

    #[test]
    fn test_render_nothing() {
        assert_eq!(render(&group(&[])), "");
    }

    #[test]
    fn test_file_name_from_repo_url() {
        let url = Url::parse("https://github.com/linksplatform/Setters/").unwrap();
        assert_eq!(file_name(&url), "Setters.md");

        let url = Url::parse("https://github.com/o/r/tree/main/src").unwrap();
        assert_eq!(file_name(&url), "src.md");
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = std::env::temp_dir().join(format!("repo-checklist-test-{}", std::process::id()));
        let url = Url::parse("https://github.com/o/r").unwrap();

        let path = write(&dir, &url, &group(&[file("", "readme")])).unwrap();

        assert_eq!(path, dir.join("r.md"));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("* ###[/]"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
