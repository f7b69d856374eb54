//! livepath CLI
//!
//! Usage:
//!   livepath [OPTIONS] [FILE]
//!
//! Options:
//!   -W, --width <PX>    Container width to compile against
//!   -H, --height <PX>   Container height to compile against
//!   --svg               Wrap output in a minimal SVG document
//!   --check             Validate every coordinate expression and exit
//!   -e, --expr <EXPR>   Evaluate a single expression and exit

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use livepath::{compile, try_resolve, Descriptors, Dimensions, Viewport};

#[derive(Parser)]
#[command(name = "livepath")]
#[command(about = "Compile symbolic path descriptors against a container size")]
struct Cli {
    /// Input descriptor file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Container width in pixels
    #[arg(short = 'W', long, default_value_t = 100.0)]
    width: f64,

    /// Container height in pixels
    #[arg(short = 'H', long, default_value_t = 100.0)]
    height: f64,

    /// Wrap the compiled paths in a minimal SVG document
    #[arg(long)]
    svg: bool,

    /// Validate every coordinate expression and report problems
    #[arg(long)]
    check: bool,

    /// Evaluate a single coordinate expression and exit
    #[arg(short, long)]
    expr: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Single-expression mode needs no descriptor file
    if let Some(expr) = &cli.expr {
        match try_resolve(expr, cli.width, cli.height) {
            Ok(value) => println!("{}", value),
            Err(e) => {
                eprint!("{}", e.format(expr, "<expr>"));
                std::process::exit(1);
            }
        }
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let descriptors = match Descriptors::from_str(&source) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.check {
        check_descriptors(&descriptors, cli.width, cli.height);
        return;
    }

    let compiled = compile(&descriptors.paths, cli.width, cli.height);

    if cli.svg {
        let viewport = Viewport::of(Dimensions::new(cli.width, cli.height));
        println!(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}">"#, viewport.view_box());
        for path in &compiled {
            if !path.visible {
                continue;
            }
            let stroke = path.style.stroke.as_deref().unwrap_or("#333333");
            let stroke_width = path.style.stroke_width.unwrap_or(1.0);
            let fill = path.style.fill.as_deref().unwrap_or("none");
            println!(
                r#"  <path d="{}" stroke="{}" stroke-width="{}" fill="{}"/>"#,
                path.path_data(),
                stroke,
                stroke_width,
                fill
            );
        }
        println!("</svg>");
    } else {
        for path in &compiled {
            let name = path.name.as_deref().unwrap_or("<anon>");
            let visibility = if path.visible { "" } else { " (hidden)" };
            println!("{}{}: {}", name, visibility, path.path_data());
        }
    }
}

/// Validate every coordinate expression in the collection, printing a
/// full diagnostic per problem. Exits non-zero when anything is wrong.
fn check_descriptors(descriptors: &Descriptors, width: f64, height: f64) {
    let mut problems = 0;

    for (path_index, descriptor) in descriptors.paths.iter().enumerate() {
        let path_name = descriptor
            .name
            .clone()
            .unwrap_or_else(|| format!("path #{}", path_index + 1));

        for (command_index, command) in descriptor.commands.iter().enumerate() {
            for (axis, operand) in [("x", command.x()), ("y", command.y())] {
                // Plain numeric literals never go through the resolver
                let raw = operand.as_str().trim();
                if !raw.contains(['%', '+', '-', '*', '/', '(', ')']) {
                    if raw.parse::<f64>().is_err() {
                        eprintln!(
                            "{}, command {}, {} operand: not a number or expression: '{}'",
                            path_name,
                            command_index + 1,
                            axis,
                            raw
                        );
                        problems += 1;
                    }
                    continue;
                }

                if let Err(e) = try_resolve(raw, width, height) {
                    let label = format!("{}, command {}, {} operand", path_name, command_index + 1, axis);
                    eprint!("{}", e.format(raw, &label));
                    problems += 1;
                }
            }
        }
    }

    if problems > 0 {
        eprintln!("{} problem(s) found", problems);
        std::process::exit(1);
    }
    println!("ok");
}

fn print_intro() {
    println!("livepath - compile symbolic path descriptors against a container size");
    println!();
    println!("Usage:");
    println!("  livepath shape.toml -W 200 -H 100");
    println!("  livepath shape.toml -W 200 -H 100 --svg");
    println!("  livepath shape.toml --check");
    println!("  livepath --expr 'width/2 - 5' -W 200");
    println!("  cat shape.toml | livepath -W 200 -H 100");
    println!();
    println!("Descriptor files are TOML:");
    println!();
    println!("  [[path]]");
    println!("  name = \"brace\"");
    println!("  style = {{ stroke = \"#333333\", stroke_width = 2.0 }}");
    println!("  commands = [");
    println!("    {{ move_to = {{ x = \"10%\", y = \"10%\" }} }},");
    println!("    {{ line_to = {{ x = \"90%\", y = \"50%\" }} }},");
    println!("  ]");
    println!();
    println!("Coordinate operands may be plain numbers (\"42\"), percentages of");
    println!("the container (\"50%\"), or arithmetic over width/height");
    println!("(\"width/2 - 10\"). Run with --help for all options.");
}
