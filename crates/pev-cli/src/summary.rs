//! Console rendering of stage results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pev_export::ExportSummary;
use pev_report::{AnalysisReport, SpreadStats};
use pev_store::LoadSummary;
use pev_validate::{SourceOutcome, SourceReport};

use crate::commands::{PipelineResult, StageOutput};

pub fn print_pipeline(result: &PipelineResult) {
    if let Some(load) = &result.load {
        print_load_summary(load);
    }
    match &result.output {
        StageOutput::Export(Ok(summary)) => print_export_summary(summary),
        StageOutput::Export(Err(error)) => eprintln!("error: export failed: {error}"),
        StageOutput::Analysis(report) => print_analysis(report),
    }
}

pub fn print_load_summary(summary: &LoadSummary) {
    println!("{}", load_summary_table(summary));
    match &summary.patient_events {
        Ok(rows) => println!("patient_events: {rows} rows"),
        Err(error) => eprintln!("error: patient_events rebuild failed: {error}"),
    }
    for outcome in &summary.tables {
        if let Err(error) = &outcome.result {
            eprintln!("error: {}: {error}", outcome.table);
        }
    }
}

pub fn load_summary_table(summary: &LoadSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Source"),
        header_cell("Columns"),
        header_cell("Inserted"),
        header_cell("Rejected"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for outcome in &summary.tables {
        let source = Cell::new(outcome.path.display());
        match &outcome.result {
            Ok(load) => table.add_row(vec![
                name_cell(outcome.table),
                source,
                Cell::new(load.columns),
                Cell::new(load.inserted),
                count_cell(load.rejected.len(), Color::Yellow),
            ]),
            Err(error) => table.add_row(vec![
                name_cell(outcome.table),
                source,
                dim_cell("-"),
                dim_cell("-"),
                Cell::new(error.kind()).fg(Color::Red),
            ]),
        };
    }
    table
}

pub fn print_export_summary(summary: &ExportSummary) {
    println!(
        "Wrote {} patient documents to {}",
        summary.written.len(),
        summary.output_dir.display()
    );
    if summary.failures.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Failure"), header_cell("Message")]);
    apply_summary_table_style(&mut table);
    for failure in &summary.failures {
        table.add_row(vec![
            Cell::new(failure.error.kind()).fg(Color::Red),
            Cell::new(&failure.error),
        ]);
    }
    println!("{table}");
}

pub fn print_analysis(report: &AnalysisReport) {
    println!("{}", analysis_table(report));
    for error in report_errors(report) {
        eprintln!("error: {error}");
    }
}

pub fn analysis_table(report: &AnalysisReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Measure"),
        header_cell("Max"),
        header_cell("Min"),
        header_cell("Median"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let patients = match &report.valid_patients {
        Ok(count) => Cell::new(count),
        Err(_) => failed_cell(),
    };
    table.add_row(vec![Cell::new("Valid patients"), patients, dim_cell("-"), dim_cell("-")]);
    table.add_row(spread_row("Timeline (days)", &report.timeline_days));
    table.add_row(spread_row("Age (years)", &report.age_years));
    match &report.gender_counts {
        Ok(counts) if counts.is_empty() => {
            table.add_row(vec![Cell::new("Gender"), dim_cell("-"), dim_cell("-"), dim_cell("-")]);
        }
        Ok(counts) => {
            for (label, count) in counts.iter() {
                table.add_row(vec![
                    Cell::new(format!("Gender {label}")),
                    Cell::new(count),
                    dim_cell("-"),
                    dim_cell("-"),
                ]);
            }
        }
        Err(_) => {
            table.add_row(vec![Cell::new("Gender"), failed_cell(), dim_cell("-"), dim_cell("-")]);
        }
    }
    table
}

fn spread_row(label: &str, stats: &pev_store::Result<Option<SpreadStats>>) -> Vec<Cell> {
    match stats {
        Ok(Some(stats)) => vec![
            Cell::new(label),
            Cell::new(stats.max),
            Cell::new(stats.min),
            Cell::new(stats.median),
        ],
        Ok(None) => vec![Cell::new(label), dim_cell("-"), dim_cell("-"), dim_cell("-")],
        Err(_) => vec![Cell::new(label), failed_cell(), dim_cell("-"), dim_cell("-")],
    }
}

fn report_errors(report: &AnalysisReport) -> Vec<String> {
    let mut errors = Vec::new();
    if let Err(error) = &report.valid_patients {
        errors.push(format!("patient count: {error}"));
    }
    if let Err(error) = &report.timeline_days {
        errors.push(format!("timeline: {error}"));
    }
    if let Err(error) = &report.gender_counts {
        errors.push(format!("gender counts: {error}"));
    }
    if let Err(error) = &report.age_years {
        errors.push(format!("age: {error}"));
    }
    errors
}

pub fn print_validation(outcomes: &[SourceOutcome]) {
    for outcome in outcomes {
        println!("== {} ==", outcome.path.display());
        match &outcome.result {
            Ok(report) => print_source_report(report),
            Err(error) => eprintln!("error: {error}"),
        }
        println!();
    }
}

fn print_source_report(report: &SourceReport) {
    println!("Rows: {}", report.rows);
    println!("{}", column_table(report));

    println!(
        "Rows with malformed {}: {}",
        report.table.date_column(),
        report.malformed_count()
    );
    if report.malformed_count() > 0 {
        println!("{}", report.malformed_dates);
    }

    println!("Distinct patient_id: {}", report.distinct_patients);
    if let Some(coded) = report.coded_patients {
        println!("Distinct patient_id with a code: {coded}");
    }
}

pub fn column_table(report: &SourceReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Non-null"),
        header_cell("Null"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for column in &report.columns {
        table.add_row(vec![
            Cell::new(&column.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&column.dtype),
            Cell::new(column.non_null),
            count_cell(column.nulls, Color::Yellow),
        ]);
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn name_cell(name: impl ToString) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn failed_cell() -> Cell {
    Cell::new("failed").fg(Color::Red)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
