use std::fmt;
use std::path::PathBuf;

/// Where a link was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkSource {
    HtmlLink,
    SitemapUrl,
}

impl fmt::Display for LinkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkSource::HtmlLink => write!(f, "html_link"),
            LinkSource::SitemapUrl => write!(f, "sitemap_url"),
        }
    }
}

/// A single URL pulled out of a document, paired with its cleaned form.
#[derive(Debug, Clone)]
pub struct CleanedLink {
    pub original: String,
    pub cleaned: String,
    /// Document the link was found in.
    pub document: PathBuf,
    pub source: LinkSource,
}

impl CleanedLink {
    pub fn needs_update(&self) -> bool {
        self.original != self.cleaned
    }
}

/// One planned rename. Keyed by `old_path` in the plan; exactly one entry
/// per physical file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub old_name: String,
    pub new_name: String,
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    /// True when the file was discovered through an index/sitemap link,
    /// false when it was only found on disk.
    pub referenced: bool,
}

/// Two or more plan entries collapsing onto the same cleaned name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub new_name: String,
    /// Old names mapping to `new_name`, in plan order.
    pub old_names: Vec<String>,
}

/// A rename that actually happened on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedRename {
    pub old_name: String,
    pub new_name: String,
    pub referenced: bool,
}
