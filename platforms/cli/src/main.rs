use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tmsim::autotool_description;
use tmsim::loader::DescriptionLoader;
use tmsim::machine::Machine;
use tmsim::programs;
use tmsim::types::Description;

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// The machine description file to load
    #[clap(short, long, required_unless_present = "demo", conflicts_with = "demo")]
    file: Option<PathBuf>,

    /// Run an embedded demo machine by name instead of a file
    #[clap(long)]
    demo: Option<String>,

    /// Maximum number of steps to execute
    #[clap(short, long, default_value_t = 25)]
    steps: usize,

    /// Print a snapshot of the machine before every step
    #[clap(short = 'd', long)]
    debug: bool,

    /// Convert the description to autotool syntax instead of running it
    #[clap(short, long)]
    convert: bool,

    /// Extra suffix for the converted output file name
    #[clap(long)]
    suffix: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (description, source) = match load(&cli) {
        Ok(loaded) => loaded,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    if cli.convert {
        return convert(&description, &source, cli.suffix.as_deref());
    }

    run(Machine::from(description), cli.steps, cli.debug);
    ExitCode::SUCCESS
}

/// Resolves the description from `--demo` or `--file`, along with the path
/// the converted output file name is derived from.
fn load(cli: &Cli) -> Result<(Description, PathBuf), String> {
    if let Some(name) = &cli.demo {
        let description = programs::demo(name).ok_or_else(|| {
            format!(
                "unknown demo {:?}; available: {}",
                name,
                programs::demo_names().join(", ")
            )
        })?;
        return Ok((description, PathBuf::from(format!("{name}.tm"))));
    }

    let path = cli.file.clone().expect("clap requires --file or --demo");
    let description = DescriptionLoader::load_description(&path).map_err(|e| e.to_string())?;
    Ok((description, path))
}

fn run(mut machine: Machine, steps: usize, debug: bool) {
    for _ in 0..steps {
        if machine.halted() {
            break;
        }
        if debug {
            println!("{machine}\n");
        }
        machine.step();
    }

    println!("{machine}");
    if machine.halted() {
        println!("halted after {} steps", machine.step_count());
    } else {
        println!("still running after {} steps", machine.step_count());
    }
}

fn convert(description: &Description, source: &Path, suffix: Option<&str>) -> ExitCode {
    let out_path = output_file_name(source, suffix);
    let rendered = autotool_description(description);

    if let Err(e) = fs::write(&out_path, rendered) {
        eprintln!("cannot write {}: {}", out_path.display(), e);
        return ExitCode::FAILURE;
    }

    println!("wrote {}", out_path.display());
    ExitCode::SUCCESS
}

/// Derives the converted output file name from the input path: the stem plus
/// `_autotool`, plus an optional extra suffix, with a `.txt` extension.
fn output_file_name(input: &Path, suffix: Option<&str>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("machine");

    let name = match suffix {
        Some(suffix) if !suffix.is_empty() => format!("{stem}_autotool_{suffix}.txt"),
        _ => format!("{stem}_autotool.txt"),
    };

    input.with_file_name(name)
}
