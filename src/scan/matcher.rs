//! Per-file eligibility decisions.
//!
//! Wildcards follow shell conventions and are always case-sensitive:
//!
//! - `*` matches any run of characters, including `/`
//! - `?` matches exactly one character
//! - `[seq]` matches one character from `seq`, `[!seq]` one character not in it
//!
//! Nothing else is special. Braces are literal, `**` is the same as `*`,
//! backslash has no escaping role and an unclosed `[` matches itself. A
//! class the glob engine still rejects (such as a reversed range) leaves the
//! pattern matching only its own literal text.

use crate::domain::{extension_of, CandidateFile, FilterConfig};
use crate::utils::to_posix;
use globset::{GlobBuilder, GlobMatcher};
use tracing::debug;

/// One compiled shell-style wildcard.
#[derive(Debug, Clone)]
pub struct Wildcard {
    source: String,
    matcher: Option<GlobMatcher>,
}

impl Wildcard {
    pub fn new(pattern: &str) -> Self {
        let matcher = GlobBuilder::new(&shell_to_glob(pattern))
            .case_insensitive(false)
            .literal_separator(false)
            .backslash_escape(false)
            .build()
            .map(|glob| glob.compile_matcher());
        match matcher {
            Ok(matcher) => Self { source: pattern.to_string(), matcher: Some(matcher) },
            Err(err) => {
                debug!("Treating pattern '{pattern}' literally: {err}");
                Self { source: pattern.to_string(), matcher: None }
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, text: &str) -> bool {
        match &self.matcher {
            Some(matcher) => matcher.is_match(text),
            None => self.source == text,
        }
    }
}

/// Rewrite a shell wildcard so globset sees only `*`, `?` and `[seq]`.
fn shell_to_glob(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push('*');
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            }
            '{' => out.push_str("[{]"),
            '}' => out.push_str("[}]"),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                }
                None => out.push_str("[[]"),
            },
            c => out.push(c),
        }
        i += 1;
    }
    out
}

/// Index of the `]` closing the class opened at `start`.
///
/// A `]` directly after `[` or `[!` is a member, not the terminator.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    let rest = chars.get(j..)?;
    rest.iter().position(|&c| c == ']').map(|offset| j + offset)
}

/// Target patterns, each tried literally and as a `pattern*` prefix.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    pairs: Vec<(Wildcard, Wildcard)>,
}

impl PatternSet {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let pairs = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                (Wildcard::new(&format!("{p}*")), Wildcard::new(p))
            })
            .collect();
        Self { pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// True when no patterns are set or `rel` matches one of them.
    pub fn matches(&self, rel: &str) -> bool {
        self.is_empty()
            || self.pairs.iter().any(|(prefix, exact)| prefix.is_match(rel) || exact.is_match(rel))
    }
}

/// Applies a [`FilterConfig`] with its ignore masks compiled once.
pub struct FileMatcher<'a> {
    filter: &'a FilterConfig,
    masks: Vec<Wildcard>,
}

impl<'a> FileMatcher<'a> {
    pub fn new(filter: &'a FilterConfig) -> Self {
        let masks = filter.ignore_masks.iter().map(|m| Wildcard::new(m)).collect();
        Self { filter, masks }
    }

    /// Keep/reject decision for one candidate, short-circuiting in rule order.
    pub fn keep(&self, candidate: &CandidateFile, patterns: &PatternSet) -> bool {
        let filter = self.filter;

        let in_ignored_dir = candidate
            .path
            .components()
            .any(|c| c.as_os_str().to_str().is_some_and(|s| filter.ignored_dirs.contains(s)));
        if in_ignored_dir {
            return false;
        }

        let name = candidate.path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        if filter.ignored_files.contains(&*name) {
            return false;
        }

        let rel = to_posix(&candidate.relative);
        if self.masks.iter().any(|m| m.is_match(&name) || m.is_match(&rel)) {
            return false;
        }

        let ext = extension_of(&candidate.path);
        if filter.exclude_extensions.contains(&ext) {
            return false;
        }
        if !ext.is_empty() && !filter.effective_allow_set().contains(&ext) {
            return false;
        }

        patterns.matches(&rel)
    }
}

/// One-shot form of [`FileMatcher::keep`].
pub fn should_keep(candidate: &CandidateFile, filter: &FilterConfig, patterns: &[String]) -> bool {
    FileMatcher::new(filter).keep(candidate, &PatternSet::new(patterns))
}
