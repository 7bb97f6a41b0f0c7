//! Batch classification of chat logs (JSON lines or plain text lines).

use serde::Serialize;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use ventas_core::error::VentasError;
use ventas_core::message::{ChatAction, IncomingMessage};
use ventas_intent::IntentMatcher;

use crate::routing::route;

/// Counters reported after a scan.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub total: usize,
    pub imports: usize,
    pub chats: usize,
    pub errors: usize,
}

/// Route every non-blank line of `reader`, writing one JSON outcome per line.
///
/// Lines that fail to parse are logged and counted, never fatal.
pub async fn scan<R, W>(
    matcher: &IntentMatcher,
    reader: R,
    writer: &mut W,
) -> Result<ScanSummary, VentasError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut summary = ScanSummary::default();
    let mut lines = reader.lines();
    let mut line_no = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }
        summary.total += 1;

        let msg = match IncomingMessage::parse_line(&line) {
            Ok(msg) => msg,
            Err(e) => {
                warn!("scan: line {line_no}: {e}");
                summary.errors += 1;
                continue;
            }
        };

        let outcome = route(matcher, &msg);
        match outcome.action {
            ChatAction::ImportSales => summary.imports += 1,
            ChatAction::Chat => summary.chats += 1,
        }

        let mut out = serde_json::to_string(&outcome)?;
        out.push('\n');
        writer.write_all(out.as_bytes()).await?;
    }

    writer.flush().await?;
    info!(
        "scan: {} messages, {} imports, {} chats, {} errors",
        summary.total, summary.imports, summary.chats, summary.errors
    );
    Ok(summary)
}

/// Scan `path`, or stdin when no path is given.
pub async fn scan_path<W>(
    matcher: &IntentMatcher,
    path: Option<&Path>,
    writer: &mut W,
) -> Result<ScanSummary, VentasError>
where
    W: AsyncWrite + Unpin,
{
    match path {
        Some(p) => {
            let file = tokio::fs::File::open(p).await.map_err(|e| {
                VentasError::Message(format!("failed to open {}: {e}", p.display()))
            })?;
            scan(matcher, BufReader::new(file), writer).await
        }
        None => scan(matcher, BufReader::new(tokio::io::stdin()), writer).await,
    }
}
