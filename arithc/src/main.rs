use arithc::{CodeGen, Error, Labels};
use color_print::cprintln;

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
    /// Input source file
    input: String,

    /// Output assembly file (overwritten)
    output: String,

    /// Dump the parsed AST as YAML
    #[clap(short, long)]
    ast: bool,

    /// Dump generated assembly code
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();

    println!("1. Read File");
    println!("  < {}", args.input);
    let source = match std::fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(e) => {
            Error::FileRead(args.input.clone(), e).print_diag(&args.input, "");
            std::process::exit(1);
        }
    };

    if let Err(e) = build(&args, &source) {
        e.print_diag(&args.input, &source);
        std::process::exit(1);
    }
    cprintln!("<green,bold>Compiled</> {} to {}", args.input, args.output);
}

fn build(args: &Args, source: &str) -> Result<(), Error> {
    println!("2. Parse");
    let labels = Labels::new();
    let program = arithc::parse(source, &labels)?;
    println!("  {} statements, {} loops", program.0.len(), labels.count());
    if args.ast {
        print!("{}", serde_yaml::to_string(&program)?);
    }

    println!("3. Generate Code");
    let code = CodeGen::generate(&program)?;
    if args.dump {
        println!("{}", code);
    }

    // Nothing is written unless generation succeeded
    println!("4. Write File");
    println!("  > {}", args.output);
    std::fs::write(&args.output, code).map_err(|e| Error::FileWrite(args.output.clone(), e))
}
