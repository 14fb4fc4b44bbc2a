//! Download and validate the launch dataset.

use anyhow::Context;
use launch_data::LaunchRecord;
use log::{info, warn};

/// Fetch the launch CSV from `url`, check that every row parses, and write
/// it unchanged to `output`.
///
/// Nothing is written when the download or validation fails.
pub async fn run_fetch(url: &str, output: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    info!("Fetching launch records from {}", url);
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("dataset request failed with HTTP {}", status);
    }
    let body = response.text().await?;

    let records = validate(&body)?;
    if records == 0 {
        warn!("Dataset at {} has a header but no launch rows", url);
    }

    std::fs::write(output, &body).with_context(|| format!("failed to write {}", output))?;
    info!("Wrote {} launch records to {}", records, output);
    Ok(())
}

/// Number of valid records in `csv_data`, or the first row error.
fn validate(csv_data: &str) -> anyhow::Result<usize> {
    let records = LaunchRecord::parse_csv(csv_data).context("downloaded dataset is invalid")?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_counts_fixture_rows() {
        let fixture = include_str!("../../fixtures/spacex_launch_dash.csv");
        let expected = fixture.lines().skip(1).filter(|l| !l.is_empty()).count();
        assert_eq!(validate(fixture).unwrap(), expected);
    }

    #[test]
    fn validate_rejects_html_error_page() {
        let body = "<html><body>Access Denied</body></html>";
        assert!(validate(body).is_err());
    }
}
