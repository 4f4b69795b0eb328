use anyhow::Result;
use notemark_config::{Config, OutputFormat};
use notemark_engine::{compile, compile_to_markup};
use std::{env, fs, io::Read, process};

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} [--html|--json] [FILE]");
    eprintln!("Compiles markdown from FILE (or stdin) to rendered output.");
    eprintln!(
        "Without a format flag the default comes from {}",
        Config::config_path().display()
    );
    process::exit(1);
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut format_flag: Option<OutputFormat> = None;
    let mut input_path: Option<String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--html" => format_flag = Some(OutputFormat::Html),
            "--json" => format_flag = Some(OutputFormat::Json),
            flag if flag.starts_with('-') => {
                eprintln!("Error: unknown flag '{flag}'");
                usage(&args[0]);
            }
            path => {
                if input_path.is_some() {
                    eprintln!("Error: more than one input file given");
                    usage(&args[0]);
                }
                input_path = Some(path.to_string());
            }
        }
    }

    let format = match format_flag {
        Some(format) => format,
        None => match Config::load() {
            Ok(Some(config)) => config.output_format,
            Ok(None) => OutputFormat::default(),
            Err(e) => {
                eprintln!("Error: failed to load config file: {e}");
                process::exit(1);
            }
        },
    };

    let markdown = match &input_path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    match format {
        OutputFormat::Html => println!("{}", compile_to_markup(&markdown)?),
        OutputFormat::Json => {
            let tree = compile(&markdown)?;
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
    }

    Ok(())
}
