use colored::Colorize;

use crate::output::chart;
use crate::output::{GameOutput, Message};


#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }
}

pub fn interpret_message(message: &Message) -> String {
    use Message::*;
    match message {
        AnswerRetry => "You have another chance, try again!".into(),
        DifficultyDefaulted => "Invalid choice, defaulting to Easy".into(),
        Farewell => "\nThanks for trying!".into(),
        FinalScore { score, rounds } => format!("\nYour total score is {}/{}!\n", score, rounds),
        GuessCorrect => "Correct!\n".into(),
        GuessIncorrect(title) => format!("Wrong! The correct answer is {}\n", title),
        QuestionBegins(number, question) => {
            let mut message = format!("Question {}. {}", number, question.prompt);
            for (choice, title) in question.labeled_answers() {
                message += &format!("\n{}. {}", choice, title);
            }
            message
        }
        ScoreChart(history, max_score) => chart::render(history.scores(), *max_score),
        SessionAborted(reason) => format!("The quiz cannot continue: {}", reason),
        TimeRemaining(remaining) => {
            let seconds = remaining.as_secs();
            format!(
                "\nTime remaining: {} minutes {} seconds\n",
                seconds / 60,
                seconds % 60
            )
        }
        TimeUp => "Time's up!".into(),
    }
}

impl GameOutput for TerminalOutput {
    fn say(&mut self, message: &Message) {
        let content = interpret_message(message);
        match message {
            Message::GuessCorrect => println!("{}", content.green().bold()),
            Message::GuessIncorrect(_) | Message::SessionAborted(_) => {
                println!("{}", content.red())
            }
            Message::DifficultyDefaulted | Message::TimeUp => println!("{}", content.yellow()),
            _ => println!("{}", content),
        }
    }
}
