use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use hvt_brs::branching::{summary_columns, BrRecord};
use hvt_brs::grid::Grid;
use hvt_brs::point::Particle;
use hvt_brs::scan::{ScanStats, Source};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn right_align(table: &mut Table, from: usize, to: usize) {
    for i in from..=to {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn fmt_value(column: &str, v: f64) -> String {
    if column == "GammaTot" {
        format!("{:.3}", v)
    } else {
        format!("{:.4e}", v)
    }
}

pub fn scan_summary(results: &[(Particle, ScanStats, usize)]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Particle").add_attribute(Attribute::Bold),
        Cell::new("Rows"),
        Cell::new("Cached").fg(Color::Green),
        Cell::new("Computed").fg(Color::Cyan),
        Cell::new("Skipped").fg(Color::Yellow),
        Cell::new("Files"),
    ]);

    for (particle, stats, rows) in results {
        table.add_row(vec![
            Cell::new(particle).add_attribute(Attribute::Bold),
            Cell::new(rows),
            Cell::new(stats.cached).fg(Color::Green),
            Cell::new(stats.computed).fg(Color::Cyan),
            Cell::new(stats.skipped).fg(Color::Yellow),
            Cell::new(stats.files_written),
        ]);
    }
    right_align(&mut table, 1, 5);
    println!("\n{}", table);
}

/// Every column of one record, headline modes marked with their label.
pub fn point_detail(record: &BrRecord, source: Source) {
    println!(
        "\n{} M0={} gv={} gf={:.3} gh={:.3} ({})",
        record.particle, record.mass, record.gv, record.gf, record.gh, source
    );

    let labels = summary_columns(record.particle);
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Mode"),
        Cell::new("Value").fg(Color::Cyan),
    ]);

    for (column, value) in BrRecord::header(record.particle)
        .iter()
        .zip(record.values())
    {
        let label = labels
            .iter()
            .find(|(c, _)| *c == column.as_str())
            .map(|(_, l)| *l)
            .unwrap_or("");
        let value_cell = Cell::new(fmt_value(column, value));
        table.add_row(vec![
            Cell::new(column),
            Cell::new(label),
            if label.is_empty() {
                value_cell
            } else {
                value_cell.fg(Color::Cyan)
            },
        ]);
    }
    right_align(&mut table, 2, 2);
    println!("{}", table);
}

/// Headline decay modes, one row per (benchmark, mass).
pub fn benchmark_table(particle: Particle, rows: &[(String, BrRecord)]) {
    let labels = summary_columns(particle);
    let mut table = new_table();

    let mut header = vec![
        Cell::new("Benchmark").add_attribute(Attribute::Bold),
        Cell::new("M0"),
    ];
    header.extend(labels.iter().map(|(_, l)| Cell::new(l).fg(Color::Cyan)));
    table.set_header(header);

    for (name, record) in rows {
        let mut cells = vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(record.mass),
        ];
        cells.extend(labels.iter().map(|(c, _)| {
            let text = record
                .value(c)
                .map(|v| fmt_value(c, v))
                .unwrap_or_else(|| "-".to_string());
            Cell::new(text)
        }));
        table.add_row(cells);
    }
    right_align(&mut table, 1, labels.len() + 1);
    println!("\n{} benchmarks\n{}", particle, table);
}

pub fn grid_summary(grid: &Grid) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Axis").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Min"),
        Cell::new("Max"),
    ]);

    let axes = [
        ("mass", grid.masses()),
        ("gv", grid.gvs()),
        ("gf", grid.gfs()),
        ("gh", grid.ghs()),
    ];
    for (name, values) in &axes {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(values.len()),
            Cell::new(min),
            Cell::new(max),
        ]);
    }
    right_align(&mut table, 1, 3);
    println!("\n{}", table);
    println!("Points per particle: {}", grid.size());

    let mut bench = new_table();
    bench.set_header(vec![
        Cell::new("Benchmark").add_attribute(Attribute::Bold),
        Cell::new("ch"),
        Cell::new("cq"),
        Cell::new("gv"),
        Cell::new("gh"),
        Cell::new("gf"),
    ]);
    for b in grid.benchmarks() {
        bench.add_row(vec![
            Cell::new(&b.name).add_attribute(Attribute::Bold),
            Cell::new(b.ch),
            Cell::new(b.cq),
            Cell::new(b.gv),
            Cell::new(b.gh),
            Cell::new(b.gf),
        ]);
    }
    right_align(&mut bench, 1, 5);
    println!("\n{}", bench);
}
