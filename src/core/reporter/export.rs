//! Machine-readable exports of a finished run.
//!
//! JSON for scripting, CSV for spreadsheets. Both list duplicate groups
//! only, with full paths regardless of the display mode.

use crate::core::pipeline::DetectionResult;
use crate::error::ReportError;
use serde_json::json;
use std::io::Write;

/// Write the run summary as pretty-printed JSON
pub fn export_json<W: Write>(result: &DetectionResult, mut writer: W) -> Result<(), ReportError> {
    let groups: Vec<_> = result
        .index
        .duplicate_groups()
        .enumerate()
        .map(|(i, group)| {
            json!({
                "index": i,
                "fingerprint": group.fingerprint.to_hex(),
                "files": group.files,
            })
        })
        .collect();

    let output = json!({
        "strategy": result.strategy.mode(),
        "total_candidates": result.total_candidates,
        "total_files": result.index.total_files(),
        "unique_groups": result.index.len(),
        "duplicate_groups": groups,
        "errors": result.errors,
        "duration_ms": result.duration_ms,
    });

    serde_json::to_writer_pretty(&mut writer, &output)?;
    writeln!(writer)?;
    Ok(())
}

/// Write duplicate groups as CSV
///
/// CSV columns: Group, Fingerprint, Path
pub fn export_csv<W: Write>(result: &DetectionResult, mut writer: W) -> Result<(), ReportError> {
    writeln!(writer, "Group,Fingerprint,Path")?;

    for (i, group) in result.index.duplicate_groups().enumerate() {
        for file in &group.files {
            writeln!(
                writer,
                "{:04},{},{}",
                i,
                group.fingerprint,
                escape_csv(&file.display().to_string())
            )?;
        }
    }

    Ok(())
}

fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::comparator::GroupIndex;
    use crate::core::hasher::{Fingerprint, HashStrategy};
    use crate::core::scanner::PathDisplay;
    use std::path::PathBuf;

    fn create_test_result() -> DetectionResult {
        let mut index = GroupIndex::new();
        index.record(Fingerprint::new(0xab), PathBuf::from("/photos/a.png"));
        index.record(Fingerprint::new(0xab), PathBuf::from("/photos/b,copy.png"));
        index.record(Fingerprint::new(0xcd), PathBuf::from("/photos/c.png"));

        DetectionResult {
            index,
            total_candidates: 4,
            errors: vec!["Failed to decode image /photos/d.png: bad".to_string()],
            display: PathDisplay::name_only(),
            strategy: HashStrategy::Content,
            duration_ms: 12,
        }
    }

    #[test]
    fn json_lists_duplicate_groups_only() {
        let mut buffer = Vec::new();
        export_json(&create_test_result(), &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["strategy"], "fast");
        assert_eq!(value["unique_groups"], 2);
        assert_eq!(value["total_files"], 3);
        assert_eq!(value["duplicate_groups"].as_array().unwrap().len(), 1);
        assert_eq!(
            value["duplicate_groups"][0]["fingerprint"],
            "00000000000000ab"
        );
        assert_eq!(value["errors"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn csv_includes_header_and_members() {
        let mut buffer = Vec::new();
        export_csv(&create_test_result(), &mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "Group,Fingerprint,Path");
        assert_eq!(lines[1], "0000,00000000000000ab,/photos/a.png");
        assert_eq!(lines[2], "0000,00000000000000ab,\"/photos/b,copy.png\"");
        assert_eq!(lines.len(), 3);
    }
}
