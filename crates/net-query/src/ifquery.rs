//! ifquery backed lookup of existing stanzas

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::{debug, warn};
use tokio::process::Command;
use tokio::time::timeout;

use ifgen_core::{MergeResolver, PortName, Settings, Stanza};

/// Result of a single ifquery run
#[derive(Debug, Clone)]
pub struct IfQueryResult {
    /// Whether the tool exited successfully
    pub success: bool,
    /// Exit code, `None` when killed by a signal
    pub exit_code: Option<i32>,
    /// Standard output followed by standard error
    pub output: String,
    pub duration_ms: u64,
}

/// Resolver that asks `ifquery <port> -i <file>` for existing stanzas
#[derive(Debug, Clone)]
pub struct IfQueryResolver {
    ifquery_path: PathBuf,
    query_timeout: Duration,
}

impl IfQueryResolver {
    /// Create with a custom tool path and wait bound
    pub fn with_config<P: AsRef<Path>>(ifquery_path: P, query_timeout: Duration) -> Self {
        Self {
            ifquery_path: ifquery_path.as_ref().to_path_buf(),
            query_timeout,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_config(&settings.ifquery_path, settings.query_timeout())
    }

    /// Run the query once.
    ///
    /// Returns `None` when the tool could not be started or did not finish
    /// within the configured timeout.
    pub async fn query(&self, port: &PortName, reference_path: &Path) -> Option<IfQueryResult> {
        let mut cmd = Command::new(&self.ifquery_path);
        cmd.arg(port.as_str())
            .arg("-i")
            .arg(reference_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!("Querying {}: {:?}", port, cmd);

        let start_time = Instant::now();
        let result = timeout(self.query_timeout, cmd.output()).await;
        let duration_ms = start_time.elapsed().as_millis() as u64;

        match result {
            Ok(Ok(output)) => {
                let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
                combined.push_str(&String::from_utf8_lossy(&output.stderr));

                Some(IfQueryResult {
                    success: output.status.success(),
                    exit_code: output.status.code(),
                    output: combined,
                    duration_ms,
                })
            }
            Ok(Err(e)) => {
                warn!("Failed to execute {}: {}", self.ifquery_path.display(), e);
                None
            }
            Err(_) => {
                warn!("Query for {} timed out after {:?}", port, self.query_timeout);
                None
            }
        }
    }
}

#[async_trait]
impl MergeResolver for IfQueryResolver {
    async fn resolve_existing(&self, port: &PortName, reference_path: &Path) -> Option<Stanza> {
        let result = self.query(port, reference_path).await?;

        if !result.success {
            debug!(
                "No stanza for {} in {} (exit code {:?})",
                port,
                reference_path.display(),
                result.exit_code
            );
            return None;
        }

        if result.output.is_empty() {
            debug!("Empty query output for {}", port);
            return None;
        }

        debug!("Found stanza for {} in {}ms", port, result.duration_ms);
        Some(Stanza::verbatim(result.output))
    }
}
