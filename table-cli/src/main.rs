//! The external interface: argv parsing, file load/save, and exit-code
//! mapping for the batch spreadsheet processor. The command-interpreter
//! pipeline itself lives in `table-core`; this binary is a thin driver.

mod args;
mod exit;

use table_core::Error;

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).try_init()?;
    Ok(())
}

/// Loads the table, tokenizes and runs the commands, and writes the result
/// back to `INPUT_FILE`. Returns the selector diagnostics collected during
/// the run. On any error, the output file is left untouched.
fn run(argv: &[String]) -> Result<Vec<String>, Error> {
    let args = args::parse(argv)?;

    let data = std::fs::read(&args.input_file).map_err(|source| Error::OpenFile {
        path: args.input_file.display().to_string(),
        source,
    })?;
    let table = table_core::load_table(&data, &args.delimiters)?;
    let commands = table_core::tokenize_commands(&args.command_spec)?;

    let mut interp = table_core::Interpreter::new(table);
    let diagnostics = interp.run(&commands)?;

    let output = table_core::dump(&interp.table);
    std::fs::write(&args.input_file, output).map_err(|source| Error::OpenFile {
        path: args.input_file.display().to_string(),
        source,
    })?;

    Ok(diagnostics)
}

fn main() {
    if let Err(err) = init_tracing() {
        eprintln!("warning: failed to initialize logging: {err:#}");
    }

    let argv: Vec<String> = std::env::args().skip(1).collect();
    match run(&argv) {
        Ok(diagnostics) => {
            for message in diagnostics {
                println!("{message}");
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(exit::ExitCode::from(&err) as i32);
        }
    }
}
