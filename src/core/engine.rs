use crate::core::session::{ScanOutcome, Session};
use crate::core::{RecommendationSink, ScanEvent, ScanSource};
use crate::utils::error::Result;

/// Counters for one engine run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub scans: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub skipped: usize,
    pub published: usize,
}

pub struct ScanEngine<S: ScanSource, K: RecommendationSink> {
    source: S,
    sink: K,
    session: Session,
}

impl<S: ScanSource, K: RecommendationSink> ScanEngine<S, K> {
    pub fn new(source: S, sink: K, session: Session) -> Self {
        Self {
            source,
            sink,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the sink, e.g. to inspect what was written.
    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Handles events until the source runs dry or asks to quit.
    ///
    /// Bad scans are logged and counted; only source and sink failures end
    /// the run with an error.
    pub async fn run(&mut self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        tracing::info!(
            "📷 Waiting for scans (strategy: {}, sets: {})",
            self.session.strategy(),
            self.session.set_count()
        );

        while let Some(event) = self.source.next_event().await? {
            match event {
                ScanEvent::Decoded(text) => {
                    summary.scans += 1;
                    match self.session.handle_scan(&text) {
                        ScanOutcome::Accepted(recommendation) => {
                            summary.accepted += 1;
                            self.sink.publish(&recommendation)?;
                            summary.published += 1;
                        }
                        ScanOutcome::Rejected(_) => summary.rejected += 1,
                        ScanOutcome::Skipped => {
                            tracing::debug!("Skipped scan: {:?}", text);
                            summary.skipped += 1;
                        }
                    }
                }
                ScanEvent::SetStrategy(strategy) => self.session.set_strategy(strategy),
                ScanEvent::SetCount(input) => {
                    self.session.set_count_input(&input);
                }
                ScanEvent::Generate => {
                    let recommendation = self.session.generate();
                    self.sink.publish(&recommendation)?;
                    summary.published += 1;
                }
                ScanEvent::Quit => {
                    tracing::info!("Quit requested");
                    break;
                }
            }
        }

        tracing::info!(
            "✅ Done: {} scans ({} accepted, {} rejected, {} skipped), {} results",
            summary.scans,
            summary.accepted,
            summary.rejected,
            summary.skipped,
            summary.published
        );
        Ok(summary)
    }
}
