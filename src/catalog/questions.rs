use crate::types::{Question, QuestionOption};

fn option(id: &str, label: &str, description: &str) -> QuestionOption {
    QuestionOption {
        id: id.to_string(),
        label: label.to_string(),
        description: Some(description.to_string()),
    }
}

fn question(id: &str, text: &str, options: Vec<QuestionOption>) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options,
    }
}

pub fn builtin_questions() -> Vec<Question> {
    vec![
        question(
            "task",
            "What are you working on?",
            vec![
                option("coding", "Coding", "Writing or editing code"),
                option("analysis", "Analysis", "Researching or reviewing"),
                option("writing", "Writing / Docs", "Documentation or prose"),
                option("reasoning", "Reasoning", "Complex logic, debugging, tradeoffs"),
                option("vision", "Vision", "Images, screenshots, diagrams"),
            ],
        ),
        question(
            "scope",
            "What's the scope?",
            vec![
                option("targeted", "Quick targeted edit", "One file, one function"),
                option("multifile", "Multi-file feature", "Coordinated changes across files"),
                option("architecture", "Architecture decision", "Design, tradeoffs, structure"),
                option("autonomous", "Full autonomous task", "Run it, verify it, ship it"),
            ],
        ),
        question(
            "stakes",
            "How high are the stakes?",
            vec![
                option("prototype", "Prototype", "Exploring an idea"),
                option("internal", "Internal tool", "Low-risk, team-facing"),
                option("production", "Production code", "User-facing, needs to be right"),
                option("critical", "Critical system", "High consequence if wrong"),
            ],
        ),
        question(
            "priority",
            "What matters more right now?",
            vec![
                option("speed", "Speed", "Ship it fast, iterate later"),
                option("balance", "Balance", "Good enough, reasonably fast"),
                option("accuracy", "Accuracy", "Get it right, take the time"),
            ],
        ),
        question(
            "autonomy",
            "How much should the model drive?",
            vec![
                option("targeted", "Edit what I point at", "Precise, no wandering"),
                option("gaps", "Fill in reasonable gaps", "Some initiative is fine"),
                option("drive", "Drive the whole task", "Run it end-to-end"),
            ],
        ),
    ]
}
