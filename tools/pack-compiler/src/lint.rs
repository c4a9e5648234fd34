use std::collections::BTreeSet;

use wordplay_parser::Lexer;
use wordplay_protocol::{ContentPack, RuleFlags};
use wordplay_rack::Rack;
use wordplay_solver::WordIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn error(message: String) -> Self {
        Self { severity: Severity::Error, message }
    }

    fn warning(message: String) -> Self {
        Self { severity: Severity::Warning, message }
    }
}

pub fn lint(pack: &ContentPack) -> Vec<Finding> {
    let mut findings = Vec::new();

    if pack.passages.is_empty() {
        findings.push(Finding::warning("pack has no passages".to_string()));
    }

    // The game drops these silently, so this is the only place they surface.
    let lexer = Lexer::new(true);
    for passage in &pack.passages {
        let located: BTreeSet<usize> = lexer
            .analyze(&passage.text, &passage.mistakes)
            .spans
            .iter()
            .map(|s| s.definition)
            .collect();
        for (i, mistake) in passage.mistakes.iter().enumerate() {
            if !located.contains(&i) {
                findings.push(Finding::error(format!(
                    "passage {} ({}): mistake {:?} -> {:?} not found in text",
                    passage.id.0, passage.title, mistake.wrong, mistake.correct
                )));
            }
        }
        if passage.mistakes.is_empty() {
            findings.push(Finding::warning(format!("passage {} has no mistakes", passage.id.0)));
        }
    }

    let index = WordIndex::from_words(pack.words.iter());
    for rack in &pack.racks {
        let rules = RuleFlags::from_pack(rack.rules);
        let formable = index.formable(&Rack::new(&rack.letters), rack.min_len as usize);
        if formable.is_empty() {
            findings.push(Finding::error(format!(
                "rack {} ({}) forms no dictionary words of length {}+",
                rack.id.0, rack.letters, rack.min_len
            )));
        } else if rules.contains(RuleFlags::BOT_OPPONENT) && formable.len() < 4 {
            findings.push(Finding::warning(format!(
                "rack {} has only {} words for a bot game",
                rack.id.0,
                formable.len()
            )));
        }
        if rack.rules != rules.bits() {
            findings.push(Finding::warning(format!("rack {} has unknown rule bits {:#x}", rack.id.0, rack.rules)));
        }
    }

    for jumble in &pack.jumbles {
        let letters = jumble.answer.trim().chars().filter(|c| c.is_alphabetic()).count();
        if letters < 3 {
            findings.push(Finding::error(format!(
                "jumble {}: answer {:?} is too short to scramble",
                jumble.id.0, jumble.answer
            )));
        }
    }

    for question in &pack.questions {
        if question.answer as usize >= question.choices.len() {
            findings.push(Finding::error(format!(
                "question {}: answer index {} but {} choices",
                question.id.0,
                question.answer,
                question.choices.len()
            )));
        }
        if question.choices.len() < 2 {
            findings.push(Finding::warning(format!("question {} has fewer than two choices", question.id.0)));
        }
    }

    findings
}
