use std::env;
use std::process::ExitCode;

use log::{
    error,
    info
};

use quadviz::configuration::Configuration;

const CONFIG_ENV: &str = "QUADVIZ_CONFIG";
const USAGE: &str = "usage: quadviz <expression> <a> <b> <n> [left|right|midpoint]";

fn parse_args(args: &[String]) -> Option<(f64, f64, usize)> {
    let a = args.get(2)?.parse::<f64>().ok()?;
    let b = args.get(3)?.parse::<f64>().ok()?;
    let n = args.get(4)?.parse::<usize>().ok()?;
    Some((a, b, n))
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some((a, b, n)) = parse_args(&args) else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };
    let expression = &args[1];

    let config = Configuration::new();
    if let Ok(config_path) = env::var(CONFIG_ENV) {
        if let Err(err) = config.from_reader(&config_path) {
            error!("{}: {}", config_path, err);
            return ExitCode::FAILURE;
        }
        info!("loaded configuration from {}", config_path);
    }

    let integrator = config.integrator();
    let result = match args.get(5) {
        Some(method) => integrator.rectangle_rule(expression, a, b, n, method),
        None => integrator.simpson_rule(expression, a, b, n)
    };

    match result {
        Ok(result) => {
            info!("integral of {} over [{}, {}] with n = {}", expression, a, b, n);
            println!("{}", result.estimate());
            println!("{}", result.image());
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("error computing the integral: {}", err);
            ExitCode::FAILURE
        }
    }
}
