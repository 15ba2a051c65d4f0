use crate::config::GeneratorConfig;
use crate::pool::{message_pool, user_pool, Pool};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// One output row. Borrowed from the pools and serialized immediately; the
/// csv writer derives the `user_id,message` header from the field names.
#[derive(Debug, Serialize)]
struct Record<'a> {
    user_id: &'a str,
    message: &'a str,
}

pub struct Generator {
    rows: u64,
    users: Pool,
    messages: Pool,
    rng: StdRng,
}

impl Generator {
    /// Validates the configuration and builds both pools up front, so any
    /// failure surfaces before the destination file is touched.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rows: config.rows,
            users: user_pool(config)?,
            messages: message_pool(config)?,
            rng: match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            },
        })
    }

    /// Streams the header plus exactly `rows` data rows into `writer`,
    /// sampling `user_id` and `message` independently per row, with
    /// replacement. Rows are serialized as they are produced, so memory use
    /// does not grow with the row count.
    pub fn write_csv<W: Write>(&mut self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        for _ in 0..self.rows {
            let record = Record {
                user_id: self.users.sample(&mut self.rng),
                message: self.messages.sample(&mut self.rng),
            };
            wtr.serialize(record)
                .context("Failed to write a row to the output")?;
        }

        wtr.flush().context("Failed to flush the output")?;
        Ok(())
    }

    /// Creates the destination file and streams the rows into it. A write
    /// failure aborts immediately and may leave a truncated file behind.
    pub fn write_to_path(&mut self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
        self.write_csv(file)
    }
}
