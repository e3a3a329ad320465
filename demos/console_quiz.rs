// ============================================================================
// Console Quiz Example
// ============================================================================
//
// Ten rounds of one operation in the terminal.
// Usage: cargo run --example console_quiz [--features logging] [-- <op> [<difficulty>]]
// where <op> is one of + - * / (default +) and <difficulty> is easy, medium
// or hard. Without a difficulty the level is asked for on stdin.

use chrono::Utc;
use mindcalc::prelude::*;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

const ROUNDS: usize = 10;

fn prompt(stdin: &mut impl BufRead, text: &str) -> io::Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn main() -> Result<(), Box<dyn Error>> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    let operation: Operation = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<Operation>())
        .transpose()?
        .unwrap_or(Operation::Add);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let difficulty = match std::env::args().nth(2) {
        Some(arg) => arg.parse::<Difficulty>()?,
        None => {
            println!("Choose a difficulty level: 1 for EASY, 2 for MEDIUM, 3 for HARD");
            let level = prompt(&mut input, "Your choice: ")?;
            // anything unrecognised plays HARD
            Difficulty::from_level(level.parse().unwrap_or(0))
        },
    };

    let config = QuizConfig::console_preset(difficulty, operation);
    let mut quiz = create_from_config(config, Arc::new(LoggingEventHandler))?;

    for _ in 0..ROUNDS {
        let (a, b) = quiz.get_numbers()?;
        println!("What is the {} of {} and {}?", operation.result_name(), a, b);

        let started_at = Utc::now();
        let answer = prompt(&mut input, "> ")?;
        let ended_at = Utc::now();

        let answer: f64 = match answer.parse() {
            Ok(value) => value,
            Err(_) => f64::NAN,
        };

        if quiz.check_answer(answer, started_at, ended_at)? {
            println!("Correct!");
        } else {
            println!("Wrong answer. The correct answer is {}", quiz.correct_answer()?);
        }
    }

    let summary = quiz.summary();
    println!(
        "Results:\nCorrect answers: {}\nWrong answers: {}\n\
         Average time for correct answers: {:.3}s\n\
         Average time for wrong answers: {:.3}s",
        summary.correct_count,
        summary.wrong_count,
        summary.average_correct_secs,
        summary.average_wrong_secs
    );

    Ok(())
}
