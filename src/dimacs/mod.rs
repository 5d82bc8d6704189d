use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num,
};

use fnv::FnvHashSet;
use thiserror::Error;

use crate::instance::{Clause, Literal, Variable};

#[derive(Error, Debug)]
pub enum DimacsError {
    #[error("malformed header")]
    MalformedHeader,
    #[error("invalid line: {0}")]
    InvalidLine(String),
    #[error("line must start with p or c: {0}:{1}")]
    UnknownLineType(usize, usize),
    #[error("literal {0} out of range for {1} variables")]
    LiteralOutOfRange(i64, u32),
    #[error("variable {0} appears twice in the same clause")]
    DuplicateVariableInClause(u32),
    #[error("io error")]
    IO(#[from] io::Error),
    #[error("not a valid value")]
    ParseError(#[from] num::ParseIntError),
}

type Result<T> = std::result::Result<T, DimacsError>;

/// The result of parsing a DIMACS file: a variable count and the clauses
/// referencing it, ready to hand straight to `Solver::new`.
#[derive(Debug, Clone)]
pub struct ParsedFormula {
    pub variable_count: u32,
    pub clauses: Vec<Clause>,
}

/// Tokenizes the whole remaining stream after the header rather than
/// enforcing one clause per physical line — a clause's literals may be split
/// across lines, and multiple clauses may share one; only the `0` terminator
/// matters.
pub fn parse(filename: &str) -> Result<ParsedFormula> {
    let file = File::open(filename)?;
    let buffer = BufReader::new(&file);

    let mut words = buffer
        .lines()
        .filter(|l| match l {
            Ok(line) => line.chars().next() != Some('c'),
            _ => true,
        })
        .flat_map(|line| match line {
            Ok(iter) => iter
                .split_ascii_whitespace()
                .map(|w| Ok(w.to_string()))
                .collect::<Vec<Result<String>>>(),
            Err(err) => vec![Err(err.into())],
        });

    let header = DimacsHeader::parse(&mut words)?;

    let mut clauses: Vec<Clause> = vec![];
    let mut current_clause: Vec<Literal> = vec![];
    let mut seen_variables: FnvHashSet<Variable> = FnvHashSet::default();

    for mb_word in words {
        match mb_word?.parse::<i64>()? {
            0 => {
                clauses.push(Clause::new(current_clause));
                current_clause = vec![];
                seen_variables.clear();
            }
            encoded => {
                let magnitude = encoded.unsigned_abs();
                if magnitude == 0 || magnitude > header.variable_count as u64 {
                    return Err(DimacsError::LiteralOutOfRange(encoded, header.variable_count));
                }
                let lit = Literal::from_dimacs(encoded);
                if !seen_variables.insert(lit.var()) {
                    return Err(DimacsError::DuplicateVariableInClause(lit.var().get()));
                }
                current_clause.push(lit);
            }
        }
    }

    Ok(ParsedFormula {
        variable_count: header.variable_count,
        clauses,
    })
}

#[derive(Debug, Clone)]
struct DimacsHeader {
    variable_count: u32,
    _clause_count: u32,
}

impl DimacsHeader {
    fn parse<I>(words: &mut I) -> Result<Self>
    where
        I: Iterator<Item = Result<String>>,
    {
        let mut next = || match words.next() {
            Some(x) => x,
            None => Err(DimacsError::MalformedHeader),
        };

        let p = next()?;
        let cnf = next()?;
        if p != "p" || cnf != "cnf" {
            return Err(DimacsError::MalformedHeader);
        }
        let variable_count = next()?;
        let clause_count = next()?;
        Ok(Self {
            variable_count: variable_count.parse::<u32>().map_err(|_| DimacsError::MalformedHeader)?,
            _clause_count: clause_count.parse::<u32>().map_err(|_| DimacsError::MalformedHeader)?,
        })
    }
}
