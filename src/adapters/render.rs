use crate::core::{Number, OutputFormat, Recommendation, RecommendationSink, Result};
use crate::utils::error::LottoError;
use std::io::Write;

pub fn render(recommendation: &Recommendation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(recommendation)),
        OutputFormat::Csv => render_csv(recommendation),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(recommendation)?),
    }
}

fn join(numbers: &[Number], separator: &str) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Three titled sections; a section with nothing to show is left out.
pub fn render_text(recommendation: &Recommendation) -> String {
    let mut sections = Vec::new();

    if !recommendation.played.is_empty() {
        let mut lines = vec!["Scanned Lotto Numbers".to_string()];
        lines.extend(recommendation.played.sets().iter().map(|set| join(set, ", ")));
        sections.push(lines.join("\n"));
    }

    if !recommendation.pool.is_empty() {
        sections.push(format!(
            "Lucky Numbers\n{}",
            join(recommendation.pool.as_slice(), ", ")
        ));
    }

    if !recommendation.sets.is_empty() {
        let mut lines = vec![format!(
            "Recommended Lotto Numbers ({})",
            recommendation.strategy
        )];
        lines.extend(recommendation.sets.iter().map(|set| join(set, ", ")));
        sections.push(lines.join("\n"));
    }

    sections.join("\n\n")
}

/// `kind,index,numbers` rows; numbers are space separated.
pub fn render_csv(recommendation: &Recommendation) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["kind", "index", "numbers"])?;

    for (i, set) in recommendation.played.sets().iter().enumerate() {
        writer.write_record(["played", (i + 1).to_string().as_str(), join(set, " ").as_str()])?;
    }
    writer.write_record(["pool", "1", join(recommendation.pool.as_slice(), " ").as_str()])?;
    for (i, set) in recommendation.sets.iter().enumerate() {
        writer.write_record([
            "recommended",
            (i + 1).to_string().as_str(),
            join(set, " ").as_str(),
        ])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| LottoError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Writes each recommendation to `writer` in the configured format.
pub struct WriterSink<W: Write + Send> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> RecommendationSink for WriterSink<W> {
    fn publish(&mut self, recommendation: &Recommendation) -> Result<()> {
        let output = render(recommendation, self.format)?;
        writeln!(self.writer, "{}", output)?;
        if self.format == OutputFormat::Text {
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
