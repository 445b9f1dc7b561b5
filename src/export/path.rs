//! Output file naming.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use sha2::{Digest, Sha256};

use super::types::ExportFormat;
use crate::config::{FILE_STEM_DIGEST_LEN, MAX_FILE_STEM_LEN};

static NON_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9]").expect("Failed to compile file name regex - this is a bug")
});

/// File stem for a query: every non-ASCII-alphanumeric character becomes
/// `_`, then the result is lowercased.
///
/// Stems longer than `MAX_FILE_STEM_LEN` are cut to that length and suffixed
/// with a digest of the full query, so long queries sharing a prefix still
/// get distinct names.
pub fn sanitize_file_name(query: &str) -> String {
    let stem = NON_ALPHANUMERIC.replace_all(query, "_").to_lowercase();
    if stem.len() <= MAX_FILE_STEM_LEN {
        return stem;
    }
    let digest = format!("{:x}", Sha256::digest(query.as_bytes()));
    // The stem is ASCII, so any byte index is a char boundary.
    format!(
        "{}_{}",
        &stem[..MAX_FILE_STEM_LEN],
        &digest[..FILE_STEM_DIGEST_LEN]
    )
}

/// `<dir>/<stem>.<ext>`.
pub fn output_path(dir: &Path, stem: &str, format: ExportFormat) -> PathBuf {
    dir.join(format!("{stem}.{}", format.extension()))
}
