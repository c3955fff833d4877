use std::env;
use std::process::ExitCode;
use std::str::FromStr;

use fashion_mnist_prep::materializer::{materialize, MaterializeConfig, Mode, OutputFormat};

fn usage(program: &str) {
    eprintln!("Usage: {} [train|test] [binary|csv]", program);
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("fashion_mnist_prep");

    let Some(mode_arg) = args.get(1) else {
        usage(program);
        return ExitCode::from(1);
    };
    let mode = match Mode::from_str(mode_arg) {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("{}", err);
            usage(program);
            return ExitCode::from(1);
        }
    };

    let format = match args.get(2) {
        Some(format_arg) => match OutputFormat::from_str(format_arg) {
            Ok(format) => format,
            Err(err) => {
                eprintln!("{}", err);
                usage(program);
                return ExitCode::from(1);
            }
        },
        None => OutputFormat::Binary,
    };

    let config = MaterializeConfig::new(mode).with_format(format);

    println!("Loading files from");
    println!("  {}", config.labels_path().display());
    println!("  {}", config.images_path().display());

    match materialize(&config) {
        Ok(summary) => {
            println!(
                "Wrote {} records ({} bytes) to {}",
                summary.records,
                summary.bytes_written,
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(1)
        }
    }
}
