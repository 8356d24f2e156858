use crate::core::{Result, ScanEvent, ScanSource, Strategy};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::Instant;

/// Reads one decoded QR text per line.
///
/// Lines starting with `:` are commands (`:strategy <name>`, `:count <n>`,
/// `:generate`, `:quit`). A scan identical to the previous one is dropped if
/// it arrives within `scan_delay`, the way a camera scanner suppresses a
/// code that is still in view.
pub struct LineScanner<R> {
    lines: Lines<R>,
    scan_delay: Duration,
    last_scan: Option<(String, Instant)>,
}

impl LineScanner<BufReader<Stdin>> {
    pub fn stdin(scan_delay: Duration) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), scan_delay)
    }
}

impl<R: AsyncBufRead + Unpin + Send> LineScanner<R> {
    pub fn new(reader: R, scan_delay: Duration) -> Self {
        Self {
            lines: reader.lines(),
            scan_delay,
            last_scan: None,
        }
    }

    fn is_repeat(&mut self, text: &str) -> bool {
        let now = Instant::now();
        let repeat = matches!(
            &self.last_scan,
            Some((last, at)) if last == text && now.duration_since(*at) < self.scan_delay
        );
        if !repeat {
            self.last_scan = Some((text.to_string(), now));
        }
        repeat
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> ScanSource for LineScanner<R> {
    async fn next_event(&mut self) -> Result<Option<ScanEvent>> {
        while let Some(line) = self.lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(command) = line.strip_prefix(':') {
                match parse_command(command) {
                    Some(event) => return Ok(Some(event)),
                    None => continue,
                }
            }

            if self.is_repeat(line) {
                tracing::debug!("Ignoring repeated scan within {:?}", self.scan_delay);
                continue;
            }
            return Ok(Some(ScanEvent::Decoded(line.to_string())));
        }
        Ok(None)
    }
}

fn parse_command(command: &str) -> Option<ScanEvent> {
    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "strategy" => match arg.parse::<Strategy>() {
            Ok(strategy) => Some(ScanEvent::SetStrategy(strategy)),
            Err(e) => {
                tracing::warn!("⚠️ {}", e);
                None
            }
        },
        "count" => Some(ScanEvent::SetCount(arg.to_string())),
        "generate" | "g" => Some(ScanEvent::Generate),
        "quit" | "q" => Some(ScanEvent::Quit),
        other => {
            tracing::warn!("⚠️ Unknown command ':{}'", other);
            None
        }
    }
}

/// Payloads given up front, e.g. on the command line.
#[derive(Debug, Clone, Default)]
pub struct StaticScanner {
    payloads: VecDeque<String>,
}

impl StaticScanner {
    pub fn new(payloads: Vec<String>) -> Self {
        Self {
            payloads: payloads.into(),
        }
    }
}

#[async_trait]
impl ScanSource for StaticScanner {
    async fn next_event(&mut self) -> Result<Option<ScanEvent>> {
        Ok(self.payloads.pop_front().map(ScanEvent::Decoded))
    }
}
