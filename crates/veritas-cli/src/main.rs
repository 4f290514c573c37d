use std::process::ExitCode;

use clap::Parser;
use log::info;
use prettytable::{format::Alignment, Cell, Row, Table};
use veritas_core::{
    build_truth_table_with_limits, evaluate_with_limits, notation, Assignment, Classification,
    Limits, ParseError, TruthTable,
};

/// Print the truth table of a propositional formula.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Formula over A-Z using ¬ ∧ ∨ → ↔ and parentheses.
    formula: String,

    /// Accept ~ ! & | -> => <-> <=> in place of the connective symbols.
    #[arg(long, short)]
    ascii: bool,

    /// Evaluate a single assignment instead, e.g. `P=T,Q=F`.
    #[arg(long)]
    assign: Option<String>,

    /// Only print the classification, not the table.
    #[arg(long, short, default_value_t = false)]
    no_table: bool,

    /// Refuse formulas with more distinct variables than this.
    #[arg(long)]
    max_variables: Option<usize>,
}

impl Cli {
    fn formula(&self) -> String {
        if self.ascii {
            notation::from_ascii(&self.formula)
        } else {
            self.formula.clone()
        }
    }

    fn limits(&self) -> Limits {
        let limits = Limits::default();
        match self.max_variables {
            Some(max) => limits.with_max_variables(max),
            None => limits,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ParseError> {
    let formula = cli.formula();
    let limits = cli.limits();
    info!("formula: {formula}");

    if let Some(bindings) = &cli.assign {
        let assignment = Assignment::parse_bindings(bindings)?;
        let value = evaluate_with_limits(&formula, &assignment, &limits)?;
        println!("{}", truth_letter(value));
        return Ok(());
    }

    let table = build_truth_table_with_limits(&formula, &limits)?;
    if !cli.no_table {
        render(&table).printstd();
    }
    println!("{}", describe(table.classification()));
    Ok(())
}

fn truth_letter(value: bool) -> &'static str {
    if value {
        "T"
    } else {
        "F"
    }
}

fn truth_cell(value: bool) -> Cell {
    let mut cell = if value {
        Cell::new("T").style_spec("Fg")
    } else {
        Cell::new("F").style_spec("Fr")
    };
    cell.align(Alignment::CENTER);
    cell
}

/// Lay out a truth table: one column per variable, then the formula.
fn render(table: &TruthTable) -> Table {
    let mut out = Table::new();

    let mut header = Row::new(
        table
            .variables()
            .iter()
            .map(|var| Cell::new(&var.to_string()))
            .collect(),
    );
    header.add_cell(Cell::new(table.formula()));
    out.set_titles(header);

    for row in table {
        let mut cells: Vec<Cell> = row
            .assignment
            .iter()
            .map(|(_, value)| truth_cell(value))
            .collect();
        cells.push(truth_cell(row.value));
        out.add_row(Row::new(cells));
    }
    out
}

fn describe(classification: Classification) -> &'static str {
    match classification {
        Classification::Tautology => "This is a tautology.",
        Classification::Contradiction => "This is a contradiction.",
        Classification::Contingent => "This is contingent.",
    }
}
