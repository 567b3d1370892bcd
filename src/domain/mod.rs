//! Core domain types and models
//!
//! Defines the file specifier, filter configuration, candidate files, and the
//! loadable `Config` together with the built-in extension and ignore sets.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Name of the directory the tool writes its chunk files into.
pub const DEFAULT_OUTPUT_DIR: &str = ".vibe";

/// Name of the per-project config file.
pub const CONFIG_FILE_NAME: &str = "vibe.toml";

/// Default chunk capacity in lines when no multiplier is configured.
pub const DEFAULT_MAX_LINES: usize = 10_000;

/// Lines per unit of chunk multiplier.
pub const LINES_PER_MULTIPLIER: usize = 1_000;

/// Shared text between the prompt header and every chunk explaining the protocol.
pub const BASE_PROMPT: &str = concat!(
    "You will receive a codebase in multiple parts (\"chunks\"). Each ",
    "chunk includes a file list and fenced contents with language tags.\n\n",
    "Guidelines:\n",
    "1) After each chunk, reply only with: \"Keep going.\"\n",
    "2) Do not propose changes until I say we finished sending chunks.\n",
    "3) When modifying code later, rewrite only entire functions/methods\n",
    "   that change. Include the full updated function/method.\n",
    "4) Comments and texts in the code must be in English only.\n",
    "5) For programming code (py,go,c/c++,js,ts), keep lines <= 79 characters.\n",
    "6) Do not create migration files unless explicitly requested.\n\n",
    "Acknowledge and wait for parts."
);

static DEFAULT_TEXT_EXTENSIONS: Lazy<BTreeSet<String>> = Lazy::new(|| {
    [
        // programming
        "py", "ts", "js", "go", "c", "cpp", "h", "hpp", "cs", "java", "php", "rb", "lua",
        "dart", "r", "jl", "scala", "rs", "vb", "swift", "kt",
        // web/markup
        "html", "htm", "xml", "css", "scss", "sass", "md", "rst", "tex",
        // config/data
        "yaml", "yml", "ini", "toml", "cfg", "json", "json5", "csv", "sql", "diff", "patch",
        // scripting
        "sh", "bat", "ps1", "jsx", "tsx",
        // misc
        "txt", "proto", "vue", "svelte", "astro", "gradle", "bzl", "cmake",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
});

/// Built-in allow-set used when no explicit allow-list is configured.
pub fn default_text_extensions() -> &'static BTreeSet<String> {
    &DEFAULT_TEXT_EXTENSIONS
}

/// Directory names that are never scanned or shown in a filtered tree.
pub fn default_ignored_dirs() -> BTreeSet<String> {
    ["__pycache__", "migrations", ".git", ".vscode", ".venv", DEFAULT_OUTPUT_DIR]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// File names that are never scanned or shown in a filtered tree.
pub fn default_ignored_files() -> BTreeSet<String> {
    [CONFIG_FILE_NAME, ".gitignore", ".gitkeep", ".env"].iter().map(|s| s.to_string()).collect()
}

/// A resolved scan target: base directory plus optional relative-path patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    /// Absolute base directory
    pub directory: PathBuf,

    /// Relative-path glob patterns; empty means "everything under `directory`"
    pub patterns: Vec<String>,
}

/// A file found under a specifier's base directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CandidateFile {
    /// Absolute path to the file
    pub path: PathBuf,

    /// Path relative to the specifier's base directory
    pub relative: PathBuf,
}

impl CandidateFile {
    /// Build a candidate from an absolute path, or `None` if it is not under `base`.
    pub fn under(base: &Path, path: PathBuf) -> Option<Self> {
        let relative = path.strip_prefix(base).ok()?.to_path_buf();
        Some(Self { path, relative })
    }
}

/// Immutable filtering rules applied to every candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Explicit extension allow-set (lower-case, no dot); empty means use defaults
    pub only_extensions: BTreeSet<String>,

    /// Extension deny-set (lower-case, no dot)
    pub exclude_extensions: BTreeSet<String>,

    /// Shell-style ignore masks matched against base name and relative path
    pub ignore_masks: Vec<String>,

    /// Directory names that exclude any path containing them
    pub ignored_dirs: BTreeSet<String>,

    /// Exact file names to exclude
    pub ignored_files: BTreeSet<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            only_extensions: BTreeSet::new(),
            exclude_extensions: BTreeSet::new(),
            ignore_masks: Vec::new(),
            ignored_dirs: default_ignored_dirs(),
            ignored_files: default_ignored_files(),
        }
    }
}

impl FilterConfig {
    pub fn from_config(config: &Config) -> Self {
        let mut ignored_dirs = default_ignored_dirs();
        ignored_dirs.extend(config.extra_ignored_dirs.iter().cloned());
        if let Some(name) = config.output_dir.file_name().and_then(|n| n.to_str()) {
            ignored_dirs.insert(name.to_string());
        }

        let mut ignored_files = default_ignored_files();
        ignored_files.extend(config.extra_ignored_files.iter().cloned());

        Self {
            only_extensions: normalize_extensions(&config.only_extensions),
            exclude_extensions: normalize_extensions(&config.exclude_extensions),
            ignore_masks: config.ignore_masks.clone(),
            ignored_dirs,
            ignored_files,
        }
    }

    /// The allow-set in effect: the explicit one, or the built-in defaults.
    pub fn effective_allow_set(&self) -> &BTreeSet<String> {
        if self.only_extensions.is_empty() {
            default_text_extensions()
        } else {
            &self.only_extensions
        }
    }
}

/// Normalize extension tokens: trim, lower-case, strip leading dots, drop empties.
pub fn normalize_extensions<S: AsRef<str>>(raw: &[S]) -> BTreeSet<String> {
    raw.iter()
        .map(|e| e.as_ref().trim().trim_start_matches('.').to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Lower-cased extension without the dot; empty for extensionless files.
pub fn extension_of(path: &Path) -> String {
    path.extension().and_then(|e| e.to_str()).map(str::to_lowercase).unwrap_or_default()
}

/// Custom deserializer for string lists: accepts a comma-separated string or an array.
fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ListVisitor;

    impl<'de> Visitor<'de> for ListVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a comma-separated string or an array of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect())
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut result = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                let trimmed = item.trim();
                if !trimmed.is_empty() {
                    result.push(trimmed.to_string());
                }
            }
            Ok(result)
        }
    }

    deserializer.deserialize_any(ListVisitor)
}

/// Main configuration for vibe-pack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // Output options
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Chunk capacity in thousands of lines
    #[serde(default, alias = "sep")]
    pub chunk_multiplier: Option<u32>,

    /// Include the complete file list in the prompt header
    #[serde(default, alias = "files")]
    pub include_file_list: bool,

    /// Replacement for the built-in guidance prompt
    #[serde(default)]
    pub prompt: Option<String>,

    // Collection options
    #[serde(default, alias = "git")]
    pub use_git: bool,

    #[serde(default)]
    pub quiet: bool,

    // Filtering options
    #[serde(default, alias = "ignore", deserialize_with = "deserialize_list")]
    pub ignore_masks: Vec<String>,

    #[serde(default, alias = "miss", deserialize_with = "deserialize_list")]
    pub exclude_extensions: Vec<String>,

    #[serde(default, alias = "only", deserialize_with = "deserialize_list")]
    pub only_extensions: Vec<String>,

    #[serde(default, deserialize_with = "deserialize_list")]
    pub extra_ignored_dirs: Vec<String>,

    #[serde(default, deserialize_with = "deserialize_list")]
    pub extra_ignored_files: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            chunk_multiplier: None,
            include_file_list: false,
            prompt: None,
            use_git: false,
            quiet: false,
            ignore_masks: Vec::new(),
            exclude_extensions: Vec::new(),
            only_extensions: Vec::new(),
            extra_ignored_dirs: Vec::new(),
            extra_ignored_files: Vec::new(),
        }
    }
}

impl Config {
    /// Chunk capacity `C` in lines.
    pub fn max_lines(&self) -> usize {
        match self.chunk_multiplier {
            Some(n) => n as usize * LINES_PER_MULTIPLIER,
            None => DEFAULT_MAX_LINES,
        }
    }

    pub fn prompt_text(&self) -> &str {
        self.prompt.as_deref().unwrap_or(BASE_PROMPT)
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// Language tag for a fenced code block, from special file names or the extension.
pub fn language_for(path: &Path) -> &'static str {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    match name {
        "Makefile" => return "make",
        "Dockerfile" => return "dockerfile",
        "CMakeLists.txt" => return "cmake",
        "BUILD" | "WORKSPACE" => return "bzl",
        "Procfile" | "LICENSE" | "go.mod" | "go.sum" => return "",
        _ => {}
    }

    match extension_of(path).as_str() {
        "py" => "python",
        "ts" => "ts",
        "tsx" => "tsx",
        "js" => "javascript",
        "jsx" => "jsx",
        "go" => "go",
        "rs" => "rust",
        "java" => "java",
        "kt" => "kotlin",
        "c" | "h" => "c",
        "cpp" | "hpp" => "cpp",
        "cs" => "csharp",
        "rb" => "ruby",
        "php" => "php",
        "swift" => "swift",
        "sh" => "bash",
        "ps1" => "powershell",
        "lua" => "lua",
        "html" | "htm" => "html",
        "css" => "css",
        "scss" => "scss",
        "sass" => "sass",
        "xml" => "xml",
        "vue" => "vue",
        "svelte" => "svelte",
        "astro" => "astro",
        "toml" => "toml",
        "ini" | "cfg" => "ini",
        "yaml" | "yml" => "yaml",
        "json" | "json5" => "json",
        "csv" => "csv",
        "md" => "md",
        "rst" => "rst",
        "proto" => "proto",
        "gradle" => "gradle",
        "cmake" => "cmake",
        "bzl" => "bzl",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_normalized() {
        let exts = normalize_extensions(&[".PY", " ts ", "", "..md"]);
        assert_eq!(exts, BTreeSet::from(["py".to_string(), "ts".to_string(), "md".to_string()]));
    }

    #[test]
    fn special_names_take_precedence_over_extension() {
        assert_eq!(language_for(Path::new("proj/CMakeLists.txt")), "cmake");
        assert_eq!(language_for(Path::new("Makefile")), "make");
        assert_eq!(language_for(Path::new("go.mod")), "");
        assert_eq!(language_for(Path::new("src/lib.RS")), "rust");
        assert_eq!(language_for(Path::new("notes.unknown")), "");
    }

    #[test]
    fn max_lines_uses_multiplier_or_default() {
        let mut config = Config::default();
        assert_eq!(config.max_lines(), 10_000);
        config.chunk_multiplier = Some(3);
        assert_eq!(config.max_lines(), 3_000);
    }

    #[test]
    fn filter_config_ignores_custom_output_dir() {
        let config = Config { output_dir: PathBuf::from("build/packs"), ..Config::default() };
        let filter = FilterConfig::from_config(&config);
        assert!(filter.ignored_dirs.contains("packs"));
        assert!(filter.ignored_dirs.contains(".vibe"));
    }
}
