use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct TestScenario {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    /// Totals file contents before the run; absent means no file
    pub totals: Option<String>,
    /// Batch file contents; absent means no file
    pub incoming: Option<String>,
    pub expect_success: bool,
    /// Totals file contents after the run
    pub expected_totals: Option<String>,
    /// Substrings that must appear on stdout
    #[serde(default)]
    pub stdout_includes: Vec<String>,
    /// Substrings that must appear on stderr
    #[serde(default)]
    pub stderr_includes: Vec<String>,
}

fn default_category() -> String {
    "late".to_string()
}

pub fn load_scenarios_from_json(path: &str) -> Vec<TestScenario> {
    let content = fs::read_to_string(path).expect("Failed to read scenario file");
    serde_json::from_str(&content).expect("Invalid JSON format")
}
