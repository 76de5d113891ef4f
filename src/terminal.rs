//! Terminal renderer
//!
//! Renders cards, page buttons and the detail panel as plain text. The stat
//! chart is drawn as horizontal bars.

use std::io::Write;

use crate::app::{
    CardView, ChartHandle, DetailTab, DetailView, EvolutionView, Renderer, StatChart, Summary,
};
use crate::catalog::PageControls;

/// Widest bar of the stat chart, in cells
const BAR_WIDTH: u32 = 40;

/// Stat value drawn as a full bar
const STAT_CEILING: u32 = 255;

/// Renderer writing to any `Write` sink
pub struct TerminalRenderer<W: Write> {
    out: W,
    next_chart: u64,
    active_chart: Option<ChartHandle>,
    detail: Option<DetailView>,
    evolution: Option<EvolutionView>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            next_chart: 0,
            active_chart: None,
            detail: None,
            evolution: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn active_chart(&self) -> Option<ChartHandle> {
        self.active_chart
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!("Terminal write failed: {}", e);
        }
    }

    fn section(&self, tab: DetailTab) -> String {
        let mut text = String::new();
        match tab {
            DetailTab::Stats => {
                if let Some(detail) = &self.detail {
                    text.push_str("Base stats:\n");
                    for stat in &detail.stats {
                        text.push_str(&format!("  {:<16} {:>3}\n", stat.name, stat.value));
                    }
                }
            }
            DetailTab::Moves => {
                if let Some(detail) = &self.detail {
                    text.push_str("Moves:\n");
                    if detail.moves.is_empty() {
                        text.push_str("  (none)\n");
                    }
                    for name in &detail.moves {
                        text.push_str(&format!("  - {}\n", name));
                    }
                }
            }
            DetailTab::Evolution => match &self.evolution {
                Some(evolution) => text.push_str(&format_evolution(evolution)),
                None => text.push_str("Evolution: loading...\n"),
            },
        }
        text
    }
}

fn format_types(types: &[String]) -> String {
    if types.is_empty() {
        "-".to_string()
    } else {
        types.join("/")
    }
}

fn format_evolution(evolution: &EvolutionView) -> String {
    let mut text = String::from("Evolution:\n");
    let line: Vec<String> = evolution
        .stages
        .iter()
        .enumerate()
        .map(|(i, s)| format!("[{}] {} (#{})", i + 1, s.name, s.id))
        .collect();
    text.push_str(&format!("  {}\n", line.join(" -> ")));
    if evolution.dropped > 0 {
        text.push_str(&format!(
            "  ({} alternate branch species not shown)\n",
            evolution.dropped
        ));
    }
    text
}

/// Horizontal bar chart, one row per stat
pub fn format_chart(chart: &StatChart) -> String {
    let mut text = format!("{}:\n", chart.title);
    for (label, &value) in chart.labels.iter().zip(&chart.values) {
        let cells = (value.min(STAT_CEILING) * BAR_WIDTH).div_ceil(STAT_CEILING) as usize;
        text.push_str(&format!("  {:<16} {:>3} {}\n", label, value, "█".repeat(cells)));
    }
    text
}

/// Page buttons with the current one in brackets
pub fn format_controls(controls: &PageControls) -> String {
    let buttons: Vec<String> = controls
        .pages()
        .map(|n| {
            if controls.is_current(n) {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect();
    format!("Pages: {}\n", buttons.join(" "))
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_summary(&mut self, summary: &Summary) {
        self.emit(&format!(
            "\n{} of {} shown, {} favorites\n",
            summary.matching, summary.total, summary.favorites
        ));
    }

    fn render_cards(&mut self, cards: &[CardView]) {
        let mut text = String::new();
        if cards.is_empty() {
            text.push_str("  (no matches)\n");
        }
        for card in cards {
            text.push_str(&format!(
                "  {} #{:04} {:<14} {}\n",
                if card.favorite { "♥" } else { "♡" },
                card.id,
                card.name,
                format_types(&card.types)
            ));
        }
        self.emit(&text);
    }

    fn render_pagination(&mut self, controls: &PageControls) {
        self.emit(&format_controls(controls));
    }

    fn render_detail(&mut self, detail: &DetailView) {
        let mut text = format!(
            "\n=== #{:04} {} {} ===\n  types: {}\n",
            detail.id,
            detail.name,
            if detail.favorite { "♥" } else { "" },
            format_types(&detail.types)
        );
        if let Some(url) = &detail.image_url {
            text.push_str(&format!("  image: {}\n", url));
        }
        self.detail = Some(detail.clone());
        self.evolution = None;
        self.emit(&text);
    }

    fn render_evolution(&mut self, evolution: &EvolutionView) {
        self.evolution = Some(evolution.clone());
        self.emit(&format_evolution(evolution));
    }

    fn render_tab(&mut self, tab: DetailTab) {
        let section = self.section(tab);
        self.emit(&section);
    }

    fn draw_chart(&mut self, chart: &StatChart) -> ChartHandle {
        if let Some(stale) = self.active_chart {
            tracing::warn!("Chart {:?} drawn over without being discarded", stale);
        }
        self.next_chart += 1;
        let handle = ChartHandle(self.next_chart);
        self.active_chart = Some(handle);
        self.emit(&format_chart(chart));
        handle
    }

    fn discard_chart(&mut self, handle: ChartHandle) {
        if self.active_chart == Some(handle) {
            self.active_chart = None;
        }
    }

    fn close_detail(&mut self) {
        self.detail = None;
        self.evolution = None;
    }
}
