//! Plain-text rendering of the grid, statistics and detail views.

use std::fmt::Write;

use kanji_config::ui::UiConfig;
use kanji_types::{CategoryChip, DisplayCard, DisplayDetail, StatsSummary};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CELL_WIDTH: usize = 24;
const BAR: char = '█';

/// Result grid. The reset hint only shows when filters narrowed the list.
pub fn render_results(cards: &[DisplayCard], filters_active: bool, ui: &UiConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Found {} Kanji", cards.len());

    if cards.is_empty() {
        out.push('\n');
        out.push_str("No Kanji found matching your criteria.\n");
        if filters_active {
            out.push_str("Type /reset to clear filters.\n");
        }
        return out;
    }

    let columns = (ui.grid_columns as usize).max(1);
    for (row_index, row) in cards.chunks(columns).enumerate() {
        out.push('\n');
        let cells: Vec<[String; 4]> = row
            .iter()
            .enumerate()
            .map(|(i, card)| card_lines(row_index * columns + i + 1, card))
            .collect();

        for line in 0..4 {
            let text: Vec<String> = cells.iter().map(|c| pad(&c[line], CELL_WIDTH)).collect();
            let _ = writeln!(out, "{}", text.join(" ").trim_end());
        }
    }

    out
}

fn card_lines(position: usize, card: &DisplayCard) -> [String; 4] {
    let readings = match (&card.onyomi, &card.kunyomi) {
        (Some(on), Some(kun)) => format!("{on} · {kun}"),
        (Some(reading), None) | (None, Some(reading)) => reading.clone(),
        (None, None) => "-".to_string(),
    };

    [
        format!("{position:>2}. {}  {} st", card.character, card.stroke_count),
        format!("    {}", card.meaning_local),
        format!("    {}", card.meaning_english),
        format!("    {readings}"),
    ]
}

pub fn render_stats(stats: &StatsSummary, ui: &UiConfig) -> String {
    let mut out = String::new();
    out.push_str("Category Distribution\n\n");

    let labels: Vec<String> = stats
        .bars
        .iter()
        .map(|bar| {
            if ui.show_native_labels {
                format!("{} {}", bar.label, bar.label_native)
            } else {
                bar.label.clone()
            }
        })
        .collect();
    let label_width = labels.iter().map(|l| l.width()).max().unwrap_or(0);
    let max_count = stats.bars.iter().map(|b| b.count).max().unwrap_or(0);

    for (label, bar) in labels.iter().zip(&stats.bars) {
        let length = bar_length(bar.count, max_count, ui.chart_width as usize);
        let _ = writeln!(
            out,
            "  {} {} {}",
            pad(label, label_width),
            BAR.to_string().repeat(length),
            bar.count
        );
    }

    out.push('\n');
    let _ = writeln!(
        out,
        "Total Kanji: {}   JLPT Level: {}   Categories: {}",
        stats.total, stats.level, stats.category_count
    );
    out
}

/// Bar length scaled so the largest count fills `width`
pub fn bar_length(count: usize, max_count: usize, width: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    (count * width).div_ceil(max_count)
}

pub fn render_detail(detail: &DisplayDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "┌─ {}  ({} Strokes)", detail.character, detail.stroke_count);
    let _ = writeln!(out, "│ {}", detail.meaning_local);
    let _ = writeln!(out, "│ {}", detail.meaning_english);
    if !detail.meaning_native.is_empty() {
        let _ = writeln!(out, "│ {}", detail.meaning_native);
    }
    out.push_str("│\n");
    let _ = writeln!(out, "│ Onyomi (Chinese):   {}", detail.onyomi);
    let _ = writeln!(out, "│ Kunyomi (Japanese): {}", detail.kunyomi);

    if !detail.examples.is_empty() {
        out.push_str("│\n│ Common Words & Examples\n");
        for example in &detail.examples {
            let _ = writeln!(out, "│   • {example}");
        }
    }

    if !detail.related.is_empty() {
        let _ = writeln!(out, "│\n│ Related Kanji: {}", detail.related.join("  "));
    }

    out.push_str("└─ /close or /esc to dismiss\n");
    out
}

pub fn render_categories(chips: &[CategoryChip]) -> String {
    let mut out = String::from("Categories\n");
    for chip in chips {
        let marker = if chip.selected { '*' } else { ' ' };
        let _ = writeln!(
            out,
            " {marker} {:<14} {} {}",
            chip.id, chip.label, chip.label_native
        );
    }
    out
}

/// Pad or cut `text` to exactly `width` terminal columns
fn pad(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;

    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }

    out.push_str(&" ".repeat(width - used));
    out
}
