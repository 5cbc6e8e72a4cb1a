// Terminal renderer - repaints the dashboard on every snapshot
use crate::application::render::SnapshotRenderer;
use crate::domain::metrics::{MetricsSnapshot, burning_label, format_millis};
use crate::domain::prognosis::Prognosis;
use chrono::Local;
use owo_colors::OwoColorize;
use std::io::{self, Write};

pub struct TermRenderer;

impl TermRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Build one full dashboard frame for a snapshot.
    fn frame(snapshot: &MetricsSnapshot, updated_at: &str) -> String {
        let prognosis = match Prognosis::classify(&snapshot.prognosis) {
            Prognosis::Healthy => snapshot.prognosis.green().to_string(),
            Prognosis::Unhealthy => snapshot.prognosis.red().to_string(),
        };

        let mut frame = format!("Patient burn dashboard  (updated {updated_at})\n\n");
        frame.push_str(&format!("  Status      {}\n", snapshot.status));
        frame.push_str(&format!(
            "  Burning     {}\n",
            burning_label(snapshot.patient_burning)
        ));
        frame.push_str(&format!("  Mean        {}\n", format_millis(snapshot.mean_timing)));
        frame.push_str(&format!("  Last        {}\n", format_millis(snapshot.last_timing)));
        frame.push_str(&format!("  Prognosis   {prognosis}\n"));
        frame.push_str("\ncommands: start | stop | quit\n");
        frame
    }

    fn paint(&self, snapshot: &MetricsSnapshot) -> io::Result<()> {
        let frame = Self::frame(snapshot, &Local::now().format("%H:%M:%S").to_string());
        let mut out = io::stdout().lock();
        // Clear screen, cursor home, then the frame.
        write!(out, "\x1b[2J\x1b[H{frame}")?;
        out.flush()
    }
}

impl SnapshotRenderer for TermRenderer {
    fn render(&self, snapshot: &MetricsSnapshot) {
        if let Err(e) = self.paint(snapshot) {
            tracing::warn!("terminal write failed: {e}");
        }
    }
}
