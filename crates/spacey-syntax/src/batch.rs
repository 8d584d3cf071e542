// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Parsing many sources at once.
//!
//! # Features
//!
//! - `parallel`: [`BatchParser`] parses in-memory sources on a rayon pool
//! - `async`: [`parse_file`] and [`parse_files`] read with tokio and parse on
//!   the blocking pool
//!
//! Results always come back in input order.
//!
//! # Example
//!
//! ```ignore
//! use spacey_syntax::batch::BatchParser;
//! use spacey_syntax::{ParserDriver, StartRule};
//!
//! let batch = BatchParser::new(ParserDriver::new(StartRule::Script))?;
//! let results = batch.parse_all(&["a;", "b;"]);
//! ```

#[cfg(feature = "async")]
use std::path::{Path, PathBuf};
#[cfg(feature = "async")]
use std::sync::Arc;

use thiserror::Error;

use crate::driver::ParserDriver;
use crate::error::ParseError;
use crate::tree::Tree;

/// Errors from batch parsing that are not parse failures.
#[derive(Debug, Error)]
pub enum BatchError {
    /// A source file could not be read
    #[cfg(feature = "async")]
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// The file being read
        path: PathBuf,
        /// The underlying error
        source: std::io::Error,
    },

    /// A blocking parse task panicked or was cancelled
    #[cfg(feature = "async")]
    #[error("Parse task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// The rayon pool could not be built
    #[cfg(feature = "parallel")]
    #[error("Failed to create thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Parses in-memory sources in parallel.
#[cfg(feature = "parallel")]
pub struct BatchParser {
    pool: rayon::ThreadPool,
    driver: ParserDriver,
}

#[cfg(feature = "parallel")]
impl BatchParser {
    /// Creates a batch parser with the default number of threads.
    pub fn new(driver: ParserDriver) -> Result<Self, BatchError> {
        let pool = rayon::ThreadPoolBuilder::new().build()?;
        Ok(Self { pool, driver })
    }

    /// Creates a batch parser with a specific number of threads.
    pub fn with_threads(driver: ParserDriver, num_threads: usize) -> Result<Self, BatchError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()?;
        Ok(Self { pool, driver })
    }

    /// The driver every source is parsed with.
    pub fn driver(&self) -> ParserDriver {
        self.driver
    }

    /// Parses every source, returning results in input order.
    pub fn parse_all<'src>(&self, sources: &[&'src str]) -> Vec<Result<Tree<'src>, ParseError>> {
        use rayon::prelude::*;

        let driver = self.driver;
        self.pool.install(|| {
            sources
                .par_iter()
                .map(|source| driver.parse(source))
                .collect()
        })
    }
}

/// Reads `path` and parses it on the blocking pool.
///
/// A tree borrows its source, so it cannot leave the task. `inspect` runs
/// there instead and turns the outcome into an owned result.
#[cfg(feature = "async")]
pub async fn parse_file<R, F>(
    driver: ParserDriver,
    path: impl AsRef<Path>,
    inspect: F,
) -> Result<R, BatchError>
where
    R: Send + 'static,
    F: FnOnce(Result<Tree<'_>, ParseError>) -> R + Send + 'static,
{
    let path = path.as_ref();
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| BatchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let output = tokio::task::spawn_blocking(move || inspect(driver.parse(&source))).await?;
    Ok(output)
}

/// Reads and parses every file concurrently, returning results in input
/// order.
#[cfg(feature = "async")]
pub async fn parse_files<R, F>(
    driver: ParserDriver,
    paths: &[impl AsRef<Path>],
    inspect: F,
) -> Vec<Result<R, BatchError>>
where
    R: Send + 'static,
    F: Fn(Result<Tree<'_>, ParseError>) -> R + Send + Sync + 'static,
{
    let inspect = Arc::new(inspect);
    let tasks = paths.iter().map(|path| {
        let inspect = Arc::clone(&inspect);
        parse_file(driver, path, move |result| inspect(result))
    });
    futures::future::join_all(tasks).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::StartRule;

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parse_all_keeps_order() {
        let batch = BatchParser::with_threads(ParserDriver::new(StartRule::Script), 2).unwrap();
        let results = batch.parse_all(&["a;", "1 +", "b;"]);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        let tree = results[2].as_ref().unwrap();
        assert_eq!(tree.source(), "b;");
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_parse_file_reports_missing_file() {
        let driver = ParserDriver::new(StartRule::Script);
        let result = parse_file(driver, "definitely/not/here.js", |r| r.is_ok()).await;
        assert!(matches!(result, Err(BatchError::Io { .. })));
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_parse_files_in_order() {
        let dir = std::env::temp_dir().join(format!("spacey-batch-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let good = dir.join("good.js");
        let bad = dir.join("bad.js");
        std::fs::write(&good, "let x = 1;\n").unwrap();
        std::fs::write(&bad, "let = ;\n").unwrap();

        let driver = ParserDriver::new(StartRule::Script);
        let results = parse_files(driver, &[&good, &bad], |r| r.map(|t| t.tokens().len())).await;
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], Ok(Ok(6))));
        assert!(matches!(results[1], Ok(Err(_))));
    }
}
