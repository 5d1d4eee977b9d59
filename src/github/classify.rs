// src/github/classify.rs
// =============================================================================
// Decides what a single anchor on a GitHub tree page points at.
//
// A listing row anchor looks like this:
//
//   <a class="js-navigation-open link-gray-dark"
//      href="/owner/repo/tree/main/src/github">github</a>
//   <a class="js-navigation-open link-gray-dark"
//      href="/owner/repo/blob/main/src/github/classify.rs">classify.rs</a>
//
// The path after the origin is always
//   <owner>/<repo>/<tree|blob>/<ref>/<segments...>
// so the directory name is whatever comes after the ref ("tree"), or after
// the ref minus the file name ("blob").
//
// Rust concepts:
// - Option<T> as "no link here": most anchors on a page are not rows
// - The ? operator on Option: bail out with None at the first miss
// =============================================================================

use scraper::ElementRef;
use url::Url;

use super::link::{DirectoryLink, FileLink, TypedLink};
use crate::config::{CrawlConfig, IgnoreSet};

// Position of "tree"/"blob" and of the ref in the path segments
const KIND_SEGMENT: usize = 2;
const REF_SEGMENT: usize = 3;

/// Classifies anchors of one crawl. Cheap to share between fetch tasks.
#[derive(Debug, Clone)]
pub struct LinkClassifier {
    origin: Url,
    extension: String,
    row_class: String,
    ignore: IgnoreSet,
}

impl LinkClassifier {
    pub fn new(
        origin: Url,
        extension: impl Into<String>,
        row_class: impl Into<String>,
        ignore: IgnoreSet,
    ) -> Self {
        Self {
            origin,
            extension: extension.into(),
            row_class: row_class.into(),
            ignore,
        }
    }

    pub fn from_config(config: &CrawlConfig) -> Self {
        Self::new(
            config.origin(),
            config.extension.clone(),
            config.row_class.clone(),
            config.ignore.clone(),
        )
    }

    /// Classifies one `<a>` element. The visible label is the text of its
    /// first child; an anchor without one is never a row.
    pub fn classify(&self, anchor: ElementRef<'_>) -> Option<TypedLink> {
        let element = anchor.value();
        let href = element.attr("href")?;
        let label = anchor.first_child()?.value().as_text()?;

        self.classify_row(element.attr("class"), href, label)
    }

    /// The attribute-level part of [`classify`](Self::classify).
    pub fn classify_row(&self, class: Option<&str>, href: &str, label: &str) -> Option<TypedLink> {
        if class != Some(self.row_class.as_str()) {
            return None;
        }

        let label = label.trim();
        if label.is_empty() {
            return None;
        }

        let url = self.origin.join(href).ok()?;
        let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
        if segments.len() <= REF_SEGMENT + 1 {
            return None;
        }

        match segments[KIND_SEGMENT] {
            "tree" => {
                let name = segments[REF_SEGMENT + 1..].join("/");
                if self.ignore.matches(&name) {
                    return None;
                }

                Some(TypedLink::Directory(DirectoryLink {
                    name,
                    href: url.to_string(),
                }))
            }
            "blob" if url.as_str().ends_with(&self.extension) => {
                let dir_segments = &segments[REF_SEGMENT + 1..segments.len() - 1];
                let dir_name = dir_segments.join("/");
                if self.ignore.matches(&dir_name) {
                    return None;
                }

                let name = label.strip_suffix(self.extension.as_str()).unwrap_or(label);
                let parent = DirectoryLink {
                    href: tree_url(&url, &segments, dir_segments),
                    name: dir_name,
                };

                Some(TypedLink::File(FileLink {
                    name: name.to_string(),
                    href: url.to_string(),
                    parent,
                }))
            }
            _ => None,
        }
    }
}

// Rebuilds the listing URL of the directory a blob lives in:
//   /owner/repo/blob/main/a/b/file.go -> /owner/repo/tree/main/a/b
fn tree_url(blob: &Url, segments: &[&str], dir_segments: &[&str]) -> String {
    let mut path = vec![segments[0], segments[1], "tree", segments[REF_SEGMENT]];
    path.extend_from_slice(dir_segments);

    let mut tree = blob.clone();
    tree.set_query(None);
    tree.set_fragment(None);
    tree.set_path(&format!("/{}", path.join("/")));
    tree.to_string()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why check the class first?
//    - It is the cheapest test and it rejects almost every anchor
//    - Navigation links, breadcrumbs and commit links all point at /tree/
//      or /blob/ too, only the listing rows carry this exact class
//
// 2. Why is the ignore check done before building the link?
//    - An ignored directory is never fetched, so its whole subtree is
//      pruned for free
//    - Files directly inside an ignored directory are dropped the same way
//
// 3. What does url.join() do with an absolute href?
//    - It returns the href itself, so both "/o/r/tree/x" and
//      "https://github.com/o/r/tree/x" work
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: Option<&str> = Some(crate::config::ROW_CLASS);

    fn classifier(extension: &str, ignore: &str) -> LinkClassifier {
        LinkClassifier::new(
            Url::parse("https://github.com").unwrap(),
            extension,
            crate::config::ROW_CLASS,
            IgnoreSet::parse(ignore).unwrap(),
        )
    }

    #[test]
    fn test_directory_row() {
        let link = classifier(".go", "").classify_row(ROW, "/owner/repo/tree/main/a/b", "b");
        assert_eq!(
            link,
            Some(TypedLink::Directory(DirectoryLink {
                name: "a/b".to_string(),
                href: "https://github.com/owner/repo/tree/main/a/b".to_string(),
            }))
        );
    }

    #[test]
    fn test_file_row() {
        let link = classifier(".go", "")
            .classify_row(ROW, "/owner/repo/blob/main/a/b/file.go", "file.go")
            .unwrap();

        let TypedLink::File(file) = link else {
            panic!("expected a file link, got {:?}", link);
        };
        assert_eq!(file.name, "file");
        assert_eq!(file.href, "https://github.com/owner/repo/blob/main/a/b/file.go");
        assert_eq!(file.parent.name, "a/b");
        assert_eq!(file.parent.href, "https://github.com/owner/repo/tree/main/a/b");
    }

    #[test]
    fn test_root_file_has_empty_directory_name() {
        let link = classifier(".md", "").classify_row(ROW, "/owner/repo/blob/main/README.md", "README.md");
        let Some(TypedLink::File(file)) = link else {
            panic!("expected a file link");
        };
        assert_eq!(file.name, "README");
        assert_eq!(file.parent.name, "");
        assert_eq!(file.parent.href, "https://github.com/owner/repo/tree/main");
    }

    #[test]
    fn test_other_extensions_are_not_tracked() {
        let classifier = classifier(".go", "");
        assert_eq!(classifier.classify_row(ROW, "/o/r/blob/main/a/main.rs", "main.rs"), None);
        assert_eq!(classifier.classify_row(ROW, "/o/r/blob/main/a/main.go.bak", "main.go.bak"), None);
    }

    #[test]
    fn test_ignore_prunes_both_shapes() {
        let classifier = classifier(".go", "vendor");
        assert_eq!(classifier.classify_row(ROW, "/o/r/tree/main/vendor", "vendor"), None);
        assert_eq!(classifier.classify_row(ROW, "/o/r/tree/main/x/vendor/y", "y"), None);
        assert_eq!(classifier.classify_row(ROW, "/o/r/blob/main/vendor/lib.go", "lib.go"), None);
        assert!(classifier.classify_row(ROW, "/o/r/tree/main/src", "src").is_some());
    }

    #[test]
    fn test_style_gate() {
        let classifier = classifier(".go", "");
        assert_eq!(classifier.classify_row(None, "/o/r/tree/main/a", "a"), None);
        assert_eq!(classifier.classify_row(Some("js-navigation-open"), "/o/r/tree/main/a", "a"), None);
        assert_eq!(
            classifier.classify_row(Some("link-gray-dark js-navigation-open"), "/o/r/blob/main/a.go", "a.go"),
            None
        );
    }

    #[test]
    fn test_unrecognized_rows_are_absent() {
        let classifier = classifier(".go", "");
        assert_eq!(classifier.classify_row(ROW, "/o/r/commits/main", "commits"), None);
        assert_eq!(classifier.classify_row(ROW, "/o/r/tree/main", "main"), None);
        assert_eq!(classifier.classify_row(ROW, "/o/r/tree/main/a", "   "), None);
    }

    #[test]
    fn test_classify_element_without_label() {
        let html = scraper::Html::parse_fragment(&format!(
            r#"<a class="{}" href="/o/r/tree/main/a"></a>"#,
            crate::config::ROW_CLASS
        ));
        let anchor = html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().name() == "a")
            .unwrap();
        assert_eq!(classifier(".go", "").classify(anchor), None);
    }
}
