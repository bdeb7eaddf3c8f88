use crate::app::models::Config;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A single recognized configuration directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    GitRoot(PathBuf),
    GitExec(PathBuf),
    PageRoot(String),
    IncludeExt(Vec<String>),
    ExcludeDirs(Vec<String>),
    ExcludeFiles(Vec<String>),
}

/// Result of parsing one configuration line. Unrecognized labels and blank
/// lines are tolerated; a recognized label with no value is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Directive(Directive),
    Ignored,
    Malformed { label: String },
}

/// Parses one line of the configuration file. Labels are matched
/// case-insensitively and must carry the trailing colon.
pub fn parse_line(line: &str) -> ParsedLine {
    let trimmed = line.trim();
    let (label, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((label, rest)) => (label, rest.trim()),
        None => (trimmed, ""),
    };
    if label.is_empty() {
        return ParsedLine::Ignored;
    }

    match label.to_ascii_lowercase().as_str() {
        "git_root:" => single(label, rest, |v| Directive::GitRoot(PathBuf::from(v))),
        "git_exec:" => single(label, rest, |v| Directive::GitExec(PathBuf::from(v))),
        "page_root:" => single(label, rest, |v| Directive::PageRoot(v.to_string())),
        "include_ext:" => multi(label, rest, Directive::IncludeExt),
        "exclude_dir:" => multi(label, rest, Directive::ExcludeDirs),
        "exclude_file:" => multi(label, rest, Directive::ExcludeFiles),
        _ => ParsedLine::Ignored,
    }
}

fn single(label: &str, rest: &str, build: impl FnOnce(&str) -> Directive) -> ParsedLine {
    if rest.is_empty() {
        ParsedLine::Malformed {
            label: label.to_string(),
        }
    } else {
        ParsedLine::Directive(build(rest))
    }
}

fn multi(label: &str, rest: &str, build: impl FnOnce(Vec<String>) -> Directive) -> ParsedLine {
    let values: Vec<String> = rest.split_whitespace().map(str::to_string).collect();
    if values.is_empty() {
        ParsedLine::Malformed {
            label: label.to_string(),
        }
    } else {
        ParsedLine::Directive(build(values))
    }
}

/// Reads and parses the configuration file. A missing or unreadable file is
/// fatal, as is a file that never sets GIT_ROOT or PAGE_ROOT.
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration file {}", path.display()))?;
    parse(&content)
}

/// Builds the settings record from configuration text. Single-value
/// directives overwrite on repetition; multi-value directives accumulate.
pub fn parse(content: &str) -> Result<Config> {
    let mut git_root = None;
    let mut git_exec = None;
    let mut page_root = None;
    let mut include_ext = HashSet::new();
    let mut exclude_dirs = HashSet::new();
    let mut exclude_files = Vec::new();

    for (number, line) in content.lines().enumerate() {
        match parse_line(line) {
            ParsedLine::Directive(directive) => match directive {
                Directive::GitRoot(path) => git_root = Some(path),
                Directive::GitExec(path) => git_exec = Some(path),
                Directive::PageRoot(url) => page_root = Some(url),
                Directive::IncludeExt(values) => {
                    include_ext.extend(values.into_iter().map(|v| v.to_ascii_lowercase()));
                }
                Directive::ExcludeDirs(values) => exclude_dirs.extend(values),
                Directive::ExcludeFiles(mut values) => exclude_files.append(&mut values),
            },
            ParsedLine::Ignored => {}
            ParsedLine::Malformed { label } => {
                log::warn!("config line {}: {} has no value, skipping", number + 1, label);
            }
        }
    }

    Ok(Config {
        git_root: git_root.context("GIT_ROOT is not set in the configuration file")?,
        git_exec: git_exec.unwrap_or_else(|| PathBuf::from("git")),
        page_root: page_root.context("PAGE_ROOT is not set in the configuration file")?,
        include_ext,
        exclude_dirs,
        exclude_files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_value_directive() {
        assert_eq!(
            parse_line("GIT_ROOT: /srv/www/site"),
            ParsedLine::Directive(Directive::GitRoot(PathBuf::from("/srv/www/site")))
        );
    }

    #[test]
    fn labels_match_case_insensitively() {
        assert_eq!(
            parse_line("page_root: https://example.org"),
            ParsedLine::Directive(Directive::PageRoot("https://example.org".to_string()))
        );
        assert_eq!(
            parse_line("Include_Ext: html pdf"),
            ParsedLine::Directive(Directive::IncludeExt(vec![
                "html".to_string(),
                "pdf".to_string()
            ]))
        );
    }

    #[test]
    fn unknown_labels_and_blank_lines_are_ignored() {
        assert_eq!(parse_line("SOMETHING_ELSE: value"), ParsedLine::Ignored);
        assert_eq!(parse_line(""), ParsedLine::Ignored);
        assert_eq!(parse_line("   "), ParsedLine::Ignored);
        // No trailing colon means the label is not recognized.
        assert_eq!(parse_line("GIT_ROOT /srv/www"), ParsedLine::Ignored);
    }

    #[test]
    fn recognized_label_without_value_is_malformed() {
        assert_eq!(
            parse_line("EXCLUDE_DIR:"),
            ParsedLine::Malformed {
                label: "EXCLUDE_DIR:".to_string()
            }
        );
    }

    #[test]
    fn single_value_paths_keep_internal_spaces() {
        assert_eq!(
            parse_line("GIT_EXEC: /opt/git tools/git"),
            ParsedLine::Directive(Directive::GitExec(PathBuf::from("/opt/git tools/git")))
        );
    }

    #[test]
    fn multi_value_directives_accumulate_across_lines() {
        let config = parse(
            "GIT_ROOT: /repo\n\
             PAGE_ROOT: https://example.org\n\
             INCLUDE_EXT: html\n\
             INCLUDE_EXT: PDF\n\
             EXCLUDE_DIR: images\n\
             EXCLUDE_DIR: drafts\n",
        )
        .unwrap();
        assert!(config.include_ext.contains("html"));
        assert!(config.include_ext.contains("pdf"));
        assert!(config.exclude_dirs.contains("images"));
        assert!(config.exclude_dirs.contains("drafts"));
    }

    #[test]
    fn repeated_single_value_directive_overwrites() {
        let config = parse(
            "GIT_ROOT: /old\n\
             GIT_ROOT: /new\n\
             PAGE_ROOT: https://example.org\n",
        )
        .unwrap();
        assert_eq!(config.git_root, PathBuf::from("/new"));
    }

    #[test]
    fn git_exec_defaults_to_path_lookup() {
        let config = parse("GIT_ROOT: /repo\nPAGE_ROOT: https://example.org\n").unwrap();
        assert_eq!(config.git_exec, PathBuf::from("git"));
    }

    #[test]
    fn missing_required_directives_fail() {
        assert!(parse("PAGE_ROOT: https://example.org\n").is_err());
        assert!(parse("GIT_ROOT: /repo\n").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("config.txt")).is_err());
    }
}
