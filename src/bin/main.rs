use std::{env, process};

use itertools::Itertools;
use log::info;
use thiserror::Error;

use satkernel::dimacs;
use satkernel::instance::Literal;
use satkernel::solver::{Solution, Solver};

#[derive(Error, Debug)]
enum Error {
    #[error("failed to parse input")]
    Parsing(#[from] dimacs::DimacsError),
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let filepath = match args.len() {
        2 => args.get(1).unwrap(),
        _ => {
            eprintln!("c satkernel [path to DIMACS problem file]");
            process::exit(-1);
        }
    };
    match run(filepath) {
        Err(err) => {
            eprintln!("c {}", err);
            eprintln!("c execution failed");
            process::exit(-1);
        }
        Ok(()) => (),
    }
}

fn run(filepath: &str) -> Result<(), Error> {
    let parsed = dimacs::parse(filepath)?;
    info!(
        "parsed {} variables, {} clauses",
        parsed.variable_count,
        parsed.clauses.len()
    );

    eprintln!("c solving");
    let solver = Solver::new(parsed.variable_count, parsed.clauses);
    match solver.solve() {
        Solution::Unsatisfiable => println!("s UNSATISFIABLE"),
        Solution::Satisfiable(assignment) => {
            println!("s SATISFIABLE");
            let formatted = assignment
                .iter()
                .map(|&(var, value)| Literal::new(var, value).to_dimacs().to_string());
            let line = Itertools::intersperse(formatted, " ".to_string()).collect::<String>();
            println!("v {} 0", line);
        }
    }
    Ok(())
}
