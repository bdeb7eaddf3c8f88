use std::path::{Path, PathBuf};
use std::process::Command;

/// Capability used by the pipeline: given a file path, return the normalized
/// timestamp of its most recent commit, if one can be determined.
pub trait LastModified {
    fn last_modified(&self, file: &Path) -> Option<String>;
}

/// Looks up commit dates by spawning `<exec> log -1 --format=%ci <file>`
/// with the repository root as working directory. Every failure is
/// recoverable: the caller simply gets no timestamp.
pub struct GitLog {
    exec: PathBuf,
    workdir: PathBuf,
}

impl GitLog {
    pub fn new(exec: PathBuf, workdir: PathBuf) -> Self {
        Self { exec, workdir }
    }
}

impl LastModified for GitLog {
    fn last_modified(&self, file: &Path) -> Option<String> {
        let output = match Command::new(&self.exec)
            .args(["log", "-1", "--format=%ci"])
            .arg(file)
            .current_dir(&self.workdir)
            .output()
        {
            Ok(output) => output,
            Err(err) => {
                log::warn!(
                    "Failed to run {} for {}: {}",
                    self.exec.display(),
                    file.display(),
                    err
                );
                return None;
            }
        };
        if !output.status.success() {
            // Reported but not fatal; any stdout produced is still used.
            log::warn!(
                "{} exited with {} for {}",
                self.exec.display(),
                output.status,
                file.display()
            );
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        // Only the most recent entry matters; the last line read wins.
        let line = stdout.lines().filter(|l| !l.trim().is_empty()).last()?;
        normalize_timestamp(line.trim())
    }
}

/// Rewrites `YYYY-MM-DD HH:MM:SS +HHMM` as `YYYY-MM-DDTHH:MM:SS+HH:MM`:
/// a `T` joins date and time, and the UTC offset gains a colon.
pub fn normalize_timestamp(raw: &str) -> Option<String> {
    let mut parts = raw.split_whitespace();
    let date = parts.next()?;
    let time = parts.next()?;
    let offset = parts.next()?;
    if parts.next().is_some() || offset.len() != 5 || !offset.is_ascii() {
        return None;
    }
    let (sign, digits) = offset.split_at(1);
    if (sign != "+" && sign != "-") || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!(
        "{date}T{time}{sign}{}:{}",
        &digits[..2],
        &digits[2..]
    ))
}
