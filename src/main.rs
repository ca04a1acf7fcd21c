//! Clubgrid - table editor core with a command-line front end

mod args;
mod config;
mod error;
mod logger;
mod render;

use anyhow::Context;
use args::{Options, Parsed, USAGE, parse_args};
use clubgrid_core::Document;
use clubgrid_engine::engine::evaluate;

fn run(opts: Options) -> anyhow::Result<()> {
    let (mut defaults, warnings) = config::load_config(opts.config.as_ref(), opts.no_config);
    for warning in warnings {
        log::warn!("{}", warning);
    }
    if let Some(rows) = opts.rows {
        defaults.rows = rows;
    }
    if let Some(cols) = opts.cols {
        defaults.cols = cols;
    }

    let mut doc = Document::with_file(opts.file.clone(), &defaults)?;
    doc.ensure_size(defaults.rows, defaults.cols);
    log::debug!("table spans A1:{}", doc.last_cell_label());

    for edit in &opts.edits {
        let cell_ref = doc
            .resolve_label(&edit.label)
            .with_context(|| format!("--set {}={}", edit.label, edit.input))?;
        doc.set_cell_from_input(cell_ref, &edit.input)?;
    }

    if let Some(formula) = &opts.command {
        println!("{}", evaluate(formula, &doc.grid));
    }
    if let Some(path) = &opts.markdown_out {
        doc.export_markdown(path)?;
        println!("Exported to {}", path.display());
    }
    if let Some(path) = &opts.csv_out {
        doc.export_csv(path)?;
        println!("Exported to {}", path.display());
    }
    if !opts.has_action() {
        let stdout = std::io::stdout();
        render::write_table(&mut stdout.lock(), &doc)?;
    }
    Ok(())
}

fn main() {
    let opts = match parse_args(std::env::args().skip(1)) {
        Ok(Parsed::Help) => {
            println!("{}", USAGE);
            return;
        }
        Ok(Parsed::Run(opts)) => opts,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    logger::init(opts.verbose);

    if let Err(e) = run(opts) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
