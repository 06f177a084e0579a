use crate::error::{PickerError, Result};
use crate::types::{AnswerSet, Question};
use std::io::{BufRead, Write};

/// Walks a caller through the questions one at a time, with back and restart.
#[derive(Debug, Clone)]
pub struct Questionnaire<'a> {
    questions: &'a [Question],
    step: usize,
    answers: AnswerSet,
}

impl<'a> Questionnaire<'a> {
    pub fn new(questions: &'a [Question]) -> Self {
        Self {
            questions,
            step: 0,
            answers: AnswerSet::new(),
        }
    }

    pub fn current(&self) -> Option<&'a Question> {
        self.questions.get(self.step)
    }

    pub fn is_done(&self) -> bool {
        self.step >= self.questions.len()
    }

    /// (questions answered, total questions)
    pub fn progress(&self) -> (usize, usize) {
        (self.step.min(self.questions.len()), self.questions.len())
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn into_answers(self) -> AnswerSet {
        self.answers
    }

    pub fn answer(&mut self, option_id: &str) -> Result<()> {
        let question = self.current().ok_or(PickerError::QuestionnaireComplete)?;
        if !question.has_option(option_id) {
            return Err(PickerError::UnknownOption {
                dimension: question.id.clone(),
                option: option_id.to_string(),
            });
        }
        self.answers.insert(question.id.as_str(), option_id);
        self.step += 1;
        Ok(())
    }

    /// Steps back one question and forgets its answer. Returns false at the start.
    pub fn back(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        if let Some(question) = self.questions.get(self.step) {
            self.answers.remove(&question.id);
        }
        true
    }

    pub fn restart(&mut self) {
        self.step = 0;
        self.answers.clear();
    }
}

/// Drives a questionnaire over line-based input. Each line is an option number,
/// an option id, `back`, or `restart`. Prompts go to `prompt`.
pub fn run_interactive<R: BufRead, W: Write>(
    questions: &[Question],
    input: R,
    prompt: &mut W,
) -> Result<AnswerSet> {
    let mut session = Questionnaire::new(questions);
    let mut lines = input.lines();

    while let Some(question) = session.current() {
        let (answered, total) = session.progress();
        writeln!(prompt, "[{}/{}] {}", answered + 1, total, question.text)?;
        for (index, option) in question.options.iter().enumerate() {
            match &option.description {
                Some(description) => writeln!(
                    prompt,
                    "  {}) {} - {} [{}]",
                    index + 1,
                    option.label,
                    description,
                    option.id
                )?,
                None => writeln!(prompt, "  {}) {} [{}]", index + 1, option.label, option.id)?,
            }
        }
        write!(prompt, "> ")?;
        prompt.flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Err(PickerError::QuestionnaireIncomplete { answered, total });
        };
        let choice = line.trim();
        match choice {
            "" => continue,
            "back" | "b" => {
                if !session.back() {
                    writeln!(prompt, "already at the first question")?;
                }
                continue;
            }
            "restart" => {
                session.restart();
                continue;
            }
            _ => {}
        }

        let option_id = match choice.parse::<usize>() {
            Ok(number) if (1..=question.options.len()).contains(&number) => {
                question.options[number - 1].id.as_str()
            }
            _ => choice,
        };
        if let Err(err) = session.answer(option_id) {
            writeln!(
                prompt,
                "{err}; pick 1-{} or an option id",
                question.options.len()
            )?;
        }
    }

    Ok(session.into_answers())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::io::Cursor;

    #[test]
    fn walks_all_questions_in_order() {
        let catalog = Catalog::builtin();
        let mut session = Questionnaire::new(&catalog.questions);
        for option in ["vision", "targeted", "production", "accuracy", "targeted"] {
            assert!(!session.is_done());
            session.answer(option).expect("answer should be accepted");
        }
        assert!(session.is_done());
        assert_eq!(session.progress(), (5, 5));
        assert!(session.current().is_none());
        assert_eq!(session.answers().get("autonomy"), Some("targeted"));
        assert!(matches!(
            session.answer("targeted"),
            Err(PickerError::QuestionnaireComplete)
        ));
    }

    #[test]
    fn rejects_option_from_another_question() {
        let catalog = Catalog::builtin();
        let mut session = Questionnaire::new(&catalog.questions);
        let result = session.answer("targeted");
        assert!(matches!(
            result,
            Err(PickerError::UnknownOption { ref dimension, .. }) if dimension == "task"
        ));
        assert_eq!(session.progress(), (0, 5));
    }

    #[test]
    fn back_forgets_previous_answer() {
        let catalog = Catalog::builtin();
        let mut session = Questionnaire::new(&catalog.questions);
        assert!(!session.back());

        session.answer("coding").expect("task answer");
        session.answer("multifile").expect("scope answer");
        assert!(session.back());
        assert_eq!(session.answers().get("scope"), None);
        assert_eq!(session.answers().get("task"), Some("coding"));
        assert_eq!(session.current().map(|q| q.id.as_str()), Some("scope"));
    }

    #[test]
    fn restart_clears_everything() {
        let catalog = Catalog::builtin();
        let mut session = Questionnaire::new(&catalog.questions);
        session.answer("writing").expect("task answer");
        session.restart();
        assert!(session.answers().is_empty());
        assert_eq!(session.current().map(|q| q.id.as_str()), Some("task"));
    }

    #[test]
    fn interactive_accepts_numbers_ids_and_back() {
        let catalog = Catalog::builtin();
        let input = Cursor::new("5\nmultifile\nback\n1\n\nproduction\n3\nzzz\n1\n");
        let mut prompt = Vec::new();

        let answers = run_interactive(&catalog.questions, input, &mut prompt)
            .expect("questionnaire should complete");
        assert_eq!(answers.get("task"), Some("vision"));
        assert_eq!(answers.get("scope"), Some("targeted"));
        assert_eq!(answers.get("stakes"), Some("production"));
        assert_eq!(answers.get("priority"), Some("accuracy"));
        assert_eq!(answers.get("autonomy"), Some("targeted"));

        let transcript = String::from_utf8(prompt).expect("prompt output is utf-8");
        assert!(transcript.contains("[1/5] What are you working on?"));
        assert!(transcript.contains("unknown option 'zzz' for dimension 'autonomy'"));
    }

    #[test]
    fn interactive_fails_when_input_ends_early() {
        let catalog = Catalog::builtin();
        let mut prompt = Vec::new();
        let result = run_interactive(&catalog.questions, Cursor::new("coding\n"), &mut prompt);
        assert!(matches!(
            result,
            Err(PickerError::QuestionnaireIncomplete {
                answered: 1,
                total: 5
            })
        ));
    }
}
