use color_print::cprintln;
use hackasm::{
    assemble,
    error::Error,
    listing,
    msg::{self, Msg},
    normalize,
};
use std::{fs::File, io::Write, path::Path};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output file [default: <INPUT> with the extension replaced by .hack]
    #[clap(short, long)]
    output: Option<String>,

    /// Dump annotated listing
    #[clap(short, long)]
    dump: bool,

    /// Write the resolved symbol map (YAML)
    #[clap(short, long)]
    symbols: Option<String>,

    /// Only print diagnostics
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    match run(&args) {
        Ok(()) => {}
        Err(Error::Line(err)) => {
            Msg::from(err.as_ref()).print();
            std::process::exit(1);
        }
        Err(err) => {
            cprintln!("<red,bold>error</>: {}", err);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let log = |s: String| {
        if !args.quiet {
            println!("{}", s);
        }
    };
    let output = args.output.clone().unwrap_or_else(|| {
        Path::new(&args.input)
            .with_extension("hack")
            .to_string_lossy()
            .into_owned()
    });

    log("Hack Assembler".to_string());

    log("1. Read Source".to_string());
    log(format!("  < {}", args.input));
    let src = std::fs::read_to_string(&args.input)
        .map_err(|e| Error::FileOpen(args.input.clone(), e))?;
    let lines = normalize(&args.input, &src);
    log(format!("  - {} lines of code", lines.len()));

    log("2. Collect Labels & Generate Binary".to_string());
    let out = assemble(&lines)?;
    msg::dump(&out.msgs);
    log(format!(
        "  - {} labels, {} variables, {} words",
        out.labels.len(),
        out.variables.len(),
        out.words.len()
    ));

    log("3. Write Output".to_string());
    log(format!("  > {}", output));
    let mut file = File::create(&output).map_err(|e| Error::FileCreate(output.clone(), e))?;
    file.write_all(out.to_text().as_bytes())
        .map_err(|e| Error::FileWrite(output.clone(), e))?;

    if let Some(path) = &args.symbols {
        log(format!("  > {}", path));
        let yaml = out.symbol_map()?;
        let mut file = File::create(path).map_err(|e| Error::FileCreate(path.clone(), e))?;
        file.write_all(yaml.as_bytes())
            .map_err(|e| Error::FileWrite(path.clone(), e))?;
    }

    if args.dump {
        listing::print_dump(&args.input, &lines, &out);
    }

    Ok(())
}
