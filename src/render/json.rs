use crate::Result;
use crate::model::OperationResult;

use anyhow::Context;
use std::fs;
use std::path::Path;

/// Render results as a JSON array, pretty-printed with 2-space indentation.
pub fn render_results(results: &[OperationResult]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(results)?;
    json.push('\n');
    Ok(json)
}

pub fn write_results(path: impl AsRef<Path>, results: &[OperationResult]) -> Result<()> {
    let path = path.as_ref();
    let json = render_results(results)?;
    fs::write(path, json).with_context(|| format!("write output file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn result(name: &str, value: &str) -> OperationResult {
        OperationResult {
            name: name.to_string(),
            rounded_value: value.to_string(),
        }
    }

    #[test]
    fn renders_pretty_array() {
        let json = render_results(&[result("important", "4030418.67")]).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"name\": \"important\",\n    \"roundedValue\": \"4030418.67\"\n  }\n]\n"
        );
    }

    #[test]
    fn empty_results() {
        assert_eq!(render_results(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn reparse_preserves_fields() {
        let results = vec![result("a", "1.5"), result("b", "-0.01"), result("c", "3440441")];
        let parsed: Vec<OperationResult> =
            serde_json::from_str(&render_results(&results).unwrap()).unwrap();
        assert_eq!(parsed, results);
    }

    #[test]
    fn write_to_unwritable_path_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("out.json");
        let err = write_results(&target, &[]).unwrap_err();
        assert!(format!("{err}").starts_with("write output file"));
    }
}
