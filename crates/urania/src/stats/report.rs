//! Text and HTML renderings of the chart statistics.

use crate::aspects::types::AspectType;
use crate::stats::ChartStats;

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64) * 100.0
    }
}

/// Plain-text statistical report. Timestamps use fixed formats so the
/// output is byte-identical across environments.
pub(crate) fn render_report(stats: &ChartStats) -> String {
    let chart = stats.chart();
    let birth = chart.birth_data();
    let total_planets = chart.planets().len();
    let mut lines: Vec<String> = Vec::new();

    lines.push("=== NATAL CHART STATISTICAL ANALYSIS ===\n".to_string());

    lines.push(format!("Chart for: {}", birth.name));
    lines.push(format!(
        "Birth Date: {}",
        birth.date_time.format("%Y-%m-%d")
    ));
    lines.push(format!("Birth Time: {}", birth.date_time.format("%H:%M:%S")));
    lines.push(format!(
        "Location: {}°, {}°\n",
        birth.coordinates.lat, birth.coordinates.lon
    ));

    let elements = stats.element_distribution();
    lines.push("ELEMENT DISTRIBUTION:".to_string());
    for (name, count) in [
        ("Fire", elements.fire),
        ("Earth", elements.earth),
        ("Air", elements.air),
        ("Water", elements.water),
    ] {
        lines.push(format!(
            "  {}: {} planets ({:.1}%)",
            name,
            count,
            percentage(count, total_planets)
        ));
    }
    lines.push(format!("  Dominant: {}\n", stats.dominant_element().name()));

    let modalities = stats.modality_distribution();
    lines.push("MODALITY DISTRIBUTION:".to_string());
    for (name, count) in [
        ("Cardinal", modalities.cardinal),
        ("Fixed", modalities.fixed),
        ("Mutable", modalities.mutable),
    ] {
        lines.push(format!(
            "  {}: {} planets ({:.1}%)",
            name,
            count,
            percentage(count, total_planets)
        ));
    }
    lines.push(format!("  Dominant: {}\n", stats.dominant_modality().name()));

    let houses = stats.house_distribution();
    lines.push("HOUSE DISTRIBUTION:".to_string());
    lines.push(format!("  Angular: {} planets", houses.angular));
    lines.push(format!("  Succedent: {} planets", houses.succedent));
    lines.push(format!("  Cadent: {} planets\n", houses.cadent));

    let aspect_counts = stats.aspect_counts();
    lines.push("ASPECT SUMMARY:".to_string());
    lines.push(format!("  Major aspects: {}", aspect_counts.major));
    lines.push(format!("  Minor aspects: {}", aspect_counts.minor));
    for kind in AspectType::ALL {
        if let Some(count) = aspect_counts.by_type.get(kind.name()) {
            lines.push(format!("    {}: {}", kind.name(), count));
        }
    }

    let patterns = stats.special_patterns();
    if patterns.grand_trines > 0 {
        lines.push(format!("  Grand Trines: {}", patterns.grand_trines));
    }
    if patterns.t_squares > 0 {
        lines.push(format!("  T-Squares: {}", patterns.t_squares));
    }
    if patterns.grand_crosses > 0 {
        lines.push(format!("  Grand Crosses: {}", patterns.grand_crosses));
    }
    if patterns.yods > 0 {
        lines.push(format!("  Yods: {}", patterns.yods));
    }

    let stelliums = stats.stelliums();
    if !stelliums.is_empty() {
        lines.push("\nSTELLIUMS:".to_string());
        for stellium in &stelliums {
            let names: Vec<&str> = stellium.planets.iter().map(|id| id.name()).collect();
            lines.push(format!("  {}: {}", stellium.sign.name(), names.join(", ")));
        }
    }

    lines.join("\n")
}

/// HTML aspect-grid table: planet names on both axes, aspect glyphs in the
/// cells, `-` on the diagonal.
pub(crate) fn render_aspect_table(stats: &ChartStats) -> String {
    let grid = stats.aspect_grid();
    let names: Vec<&str> = grid.planets().iter().map(|id| id.name()).collect();

    let mut html = String::from("<table border=\"1\" cellpadding=\"3\" cellspacing=\"0\">\n");

    html.push_str("<tr><th></th>");
    for name in &names {
        html.push_str(&format!("<th>{}</th>", name));
    }
    html.push_str("</tr>\n");

    for (row, name) in names.iter().enumerate() {
        html.push_str(&format!("<tr><th>{}</th>", name));
        for col in 0..names.len() {
            if row == col {
                html.push_str("<td>-</td>");
            } else if let Some(aspect) = grid.at(row, col) {
                html.push_str(&format!("<td>{}</td>", aspect.kind.glyph()));
            } else {
                html.push_str("<td></td>");
            }
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>");
    html
}
