use clap::{Args, Parser, Subcommand};

use quiz_core::{Action, AnimalId, NewAnimal, QuizInputs};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Parser)]
#[command(name = "animal-quiz", about = "Find out which animal you are", version)]
pub struct Cli {
    /// Base URL of the animal registry.
    #[arg(long, env = "ANIMAL_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer the quiz and see your animal.
    Quiz(Quiz),
    /// List registered animals.
    List {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one animal.
    Get { id: String },
    /// Register a new animal.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long = "type")]
        kind: String,
    },
    /// Remove an animal.
    Delete { id: String },
}

#[derive(Debug, Clone, Args)]
pub struct Quiz {
    #[arg(long)]
    pub food: String,
    #[arg(long)]
    pub color: String,
    #[arg(long, default_value = "")]
    pub drink: String,
    #[arg(long, default_value = "")]
    pub tv_show: String,
    #[arg(long, default_value = "")]
    pub time_of_day: String,
    #[arg(long, default_value = "")]
    pub pastime: String,
}

impl From<Quiz> for QuizInputs {
    fn from(q: Quiz) -> Self {
        QuizInputs {
            food: q.food,
            color: q.color,
            drink: q.drink,
            tv_show: q.tv_show,
            time_of_day: q.time_of_day,
            pastime: q.pastime,
        }
    }
}

impl Command {
    pub fn into_action(self) -> Action {
        match self {
            Command::Quiz(quiz) => Action::SubmitQuiz(quiz.into()),
            Command::List { limit: Some(limit) } => Action::ListFirst(limit),
            Command::List { limit: None } => Action::Load,
            Command::Get { id } => Action::ShowAnimal(AnimalId::from(id.as_str())),
            Command::Add { name, kind } => Action::AddAnimal(NewAnimal { name, kind }),
            Command::Delete { id } => Action::DeleteAnimal(AnimalId::from(id.as_str())),
        }
    }
}
