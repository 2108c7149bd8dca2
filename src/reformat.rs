use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::table::Table;

/// Suffix appended to the input path to name the reformatted output.
pub const OUTPUT_SUFFIX: &str = "_MRMV";

/// Derive the output path by appending [`OUTPUT_SUFFIX`] to the full input
/// path, extension included: `foo.txt` becomes `foo.txt_MRMV`.
pub fn derived_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let mut name = input.as_ref().as_os_str().to_os_string();
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Site-specific normalization of the loaded summary statistics.
///
/// Currently a no-op. Rules that depend on the cohort's file layout
/// (rewriting colon-separated SNP IDs, dropping duplicate variants,
/// subsetting columns) belong here; none are applied by default.
pub fn normalize(_table: &mut Table) {}

/// Load `input`, run [`normalize`], and write the result next to the input
/// with the `_MRMV` suffix. Returns the output path on success.
#[tracing::instrument(level = "info", skip(input), fields(path = %input.as_ref().display()))]
pub fn reformat_file<P: AsRef<Path>>(input: P) -> Result<PathBuf> {
    let input = input.as_ref();

    let mut table = Table::load(input)?;
    info!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "loaded summary statistics"
    );

    normalize(&mut table);

    let output = derived_path(input);
    table.save(&output)?;
    info!(output = %output.display(), "wrote reformatted file");

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    #[test]
    fn derived_path_appends_suffix_to_full_path() {
        assert_eq!(derived_path("foo.txt"), PathBuf::from("foo.txt_MRMV"));
        assert_eq!(derived_path("/a/b/c.tsv"), PathBuf::from("/a/b/c.tsv_MRMV"));
    }

    #[test]
    fn normalize_is_identity() {
        let mut table = Table {
            headers: vec!["SNP".into(), "BETA".into()],
            rows: vec![vec!["1:12345".into(), "0.05".into()]],
        };
        let before = table.clone();
        normalize(&mut table);
        assert_eq!(table, before);
    }

    #[test]
    fn reformat_file_writes_identical_content_with_suffix() -> Result<()> {
        init_test_logging();
        let dir = tempdir()?;
        let input = dir.path().join("pheno.txt");
        let content = "SNP\tCHR\tBETA\n1:12345\t1\t0.05\n2:67890\t2\t-0.03\n";
        fs::write(&input, content)?;

        let output = reformat_file(&input)?;
        assert_eq!(output, dir.path().join("pheno.txt_MRMV"));
        assert_eq!(fs::read_to_string(&output)?, content);
        Ok(())
    }

    #[test]
    fn reformat_file_overwrites_existing_output() -> Result<()> {
        init_test_logging();
        let dir = tempdir()?;
        let input = dir.path().join("pheno.txt");
        fs::write(&input, "SNP\tBETA\nrs1\t0.1\n")?;
        fs::write(dir.path().join("pheno.txt_MRMV"), "stale")?;

        let output = reformat_file(&input)?;
        assert_eq!(fs::read_to_string(&output)?, "SNP\tBETA\nrs1\t0.1\n");
        Ok(())
    }

    #[test]
    fn missing_input_creates_no_output() {
        init_test_logging();
        let dir = tempdir().unwrap();
        let input = dir.path().join("absent.txt");

        assert!(reformat_file(&input).is_err());
        assert!(!derived_path(&input).exists());
    }
}
