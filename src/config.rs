use anyhow::{ensure, Result};
use std::path::PathBuf;

/// Full configuration for one generation run. Every knob the reference
/// dataset was produced with is a named field here, so a run is described
/// by a single value instead of scattered constants.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of data rows to emit (the header row is not counted).
    pub rows: u64,
    /// Destination path of the generated file.
    pub output: PathBuf,
    /// Size of the base user pool: ids `user_1` through `user_<n>`.
    pub unique_users: u32,
    /// User ids that post far more often than the rest.
    pub power_users: Vec<String>,
    /// Extra sampling weight added per power user, on top of the base
    /// weight of 1. The default of 10 makes an in-range power user 11x as
    /// likely as a plain user.
    pub power_user_weight: u32,
    /// Ordinary message texts, weight 1 each.
    pub common_messages: Vec<String>,
    /// Messages that exercise CSV quoting: embedded commas, doubled
    /// quotes, the empty string. Weight 1 each.
    pub complex_messages: Vec<String>,
    /// Noise messages, each carrying `spam_weight`.
    pub spam_messages: Vec<String>,
    /// Sampling weight of each spam message.
    pub spam_weight: u32,
    /// Optional RNG seed. `None` (the default) gives a fresh entropy seed
    /// per run, so repeated runs produce different files.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 5_000_000,
            output: PathBuf::from("large_input.csv"),
            unique_users: 10_000,
            power_users: to_strings(&["user_101", "user_202", "user_303"]),
            power_user_weight: 10,
            common_messages: to_strings(&[
                "This is a test message.",
                "Having a wonderful day!",
                "I agree with the points made above.",
                "What's everyone having for lunch?",
                "Just checking in.",
                "The weather in Madrid is lovely today.",
                "Thinking about my next vacation.",
            ]),
            complex_messages: to_strings(&[
                "This message, containing a comma, should be handled correctly.",
                r#"She said, ""This is a quote inside a message!"" and it was great."#,
                "Let's discuss A, B, and C.",
                "",
            ]),
            spam_messages: to_strings(&[
                "CHECK OUT THIS AMAZING DEAL NOW!!!",
                "Click here for a free prize, you won't regret it!",
                "Limited time offer, subscribe immediately.",
                " ",
                "Lorem Impsum",
            ]),
            spam_weight: 15,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Rejects configurations that would produce an empty or malformed
    /// file. Runs before the destination is created, so a bad config never
    /// leaves an artifact behind.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.rows > 0, "The configured row count must be positive");
        ensure!(
            self.unique_users > 0,
            "The base user pool must contain at least one user"
        );
        ensure!(
            !self.common_messages.is_empty()
                || !self.complex_messages.is_empty()
                || !self.spam_messages.is_empty(),
            "The message pool must contain at least one message"
        );
        ensure!(
            self.power_user_weight > 0,
            "The power user weight must be positive"
        );
        ensure!(self.spam_weight > 0, "The spam weight must be positive");
        Ok(())
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
