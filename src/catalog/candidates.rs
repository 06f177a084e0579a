use crate::types::Candidate;

pub const DEFAULT_LINEUP: [&str; 5] = [
    "gemini-flash",
    "sonnet-4.6",
    "opus-4.6",
    "composer-1",
    "composer-1-5",
];

fn candidate(
    id: &str,
    name: &str,
    tagline: &str,
    when_wrong: &str,
    why: &[(&str, &str)],
) -> Candidate {
    let mut candidate = Candidate::new(id, name);
    candidate.tagline = tagline.to_string();
    candidate.when_wrong = when_wrong.to_string();
    for (option, sentence) in why {
        candidate = candidate.with_why(*option, *sentence);
    }
    candidate
}

/// Full model registry. Entries without rules are listed for lineups that
/// want them but always score zero.
pub fn builtin_candidates() -> Vec<Candidate> {
    vec![
        candidate(
            "gemini-flash",
            "Gemini 2.0 Flash",
            "The Careful One",
            "When you need the model to push back, suggest a better approach, or notice that you're solving the wrong problem. Gemini won't do that — you have to ask explicitly.",
            &[
                ("coding", "Gemini executes exactly what you ask — no surprises, no scope creep. For production code where predictability matters, that's a feature."),
                ("analysis", "Gemini stays close to the source material and doesn't over-interpret. Good for structured analysis where you want the facts, not editorializing."),
                ("writing", "Gemini follows your format and constraints reliably. It won't rewrite your voice or restructure what you didn't ask it to touch."),
                ("vision", "Gemini's literal-mindedness works well for vision tasks — it describes what's there, not what it thinks should be there."),
                ("production", "Gemini's risk-averse defaults shine in production contexts. It picks the safest approach and rarely introduces unexpected changes."),
                ("accuracy", "When you need the model to do exactly what you said and nothing more, Gemini's conservative interpretation is the right fit."),
                ("targeted", "Gemini is precise with targeted edits. It won't wander outside the scope you defined."),
            ],
        ),
        candidate(
            "gpt4o-mini",
            "GPT-4o mini",
            "The Balanced One",
            "When you need genuine insight or creative problem-solving. GPT optimizes for giving you what you asked for, not what you actually need. It won't surprise you with a better approach.",
            &[
                ("coding", "GPT produces the kind of code that feels like the accepted Stack Overflow answer — sensible, readable, and something your team will understand."),
                ("everyday", "GPT's pragmatic defaults make it ideal for the steady stream of everyday shipping tasks. It fills in reasonable gaps without overstepping."),
                ("internal", "For internal tools where 'good enough' is genuinely good enough, GPT's balanced approach keeps you moving without overthinking."),
                ("format", "GPT is the most consistent at following output format instructions. If you have structured output requirements, it delivers."),
                ("balance", "GPT sits in the sweet spot between speed and accuracy. It's rarely the best at either extreme, but it's reliably solid across the middle."),
            ],
        ),
        candidate(
            "deepseek-r1",
            "DeepSeek R1",
            "The Open One",
            "When you need tight data privacy guarantees or enterprise support.",
            &[
                ("whenWrong", "When you need tight data privacy guarantees or enterprise support."),
                ("bestFor", "Cost-sensitive pipelines where open weights matter"),
                ("worstFor", "Tasks requiring the latest frontier capabilities"),
            ],
        ),
        candidate(
            "haiku-4.5",
            "Claude Haiku 4.5",
            "The Fast Claude",
            "When the task needs deep reasoning or architectural judgment.",
            &[
                ("whenWrong", "When the task needs deep reasoning or architectural judgment."),
                ("bestFor", "High-volume pipelines and quick structured tasks"),
                ("worstFor", "Complex reasoning or architecture decisions"),
            ],
        ),
        candidate(
            "composer-1",
            "Cursor Composer-1",
            "The Focused One",
            "When the task requires multiple steps, tool use, or verification. Composer-1 is a precise instrument, not an autonomous agent. It won't run tests, read the output, and fix the failures.",
            &[
                ("targeted", "Composer-1 is built for this. It reads your open files and diffs, executes the targeted change cleanly, and doesn't touch anything you didn't point at."),
                ("speed", "The round-trip from prompt to applied diff is fast. You see the change inline, accept or reject, and move on. Tight feedback loop."),
                ("ide", "You don't have to paste code into a chat window — Composer-1 already has your context from the open tabs and recent edits."),
            ],
        ),
        candidate(
            "sonnet-4.6",
            "Claude Sonnet 4.6",
            "The Proactive One",
            "When scope matters. Sonnet's instinct to be helpful means it expands tasks — fixing naming conventions you didn't ask about, restructuring code to match its taste. Set explicit constraints or you'll review a 40-file diff when you asked for 3.",
            &[
                ("feature", "Sonnet is a genuine thought partner for feature design. It'll suggest a better API surface, spot issues in your data model, and notice things you didn't ask about."),
                ("multifile", "Sonnet handles multi-file work well — it understands how changes ripple across a codebase and coordinates them coherently."),
                ("architecture", "Sonnet's creativity and proactiveness make it strong for architecture exploration. It thinks beyond the immediate task."),
                ("writing", "Sonnet gives the clearest, most useful explanations. It connects your specific situation to the general principle in a way other models don't."),
                ("analysis", "Sonnet notices things. While analyzing, it'll surface connections and implications that weren't in your original question."),
            ],
        ),
        candidate(
            "opus-4.6",
            "Claude Opus 4.6",
            "The Deep Thinker",
            "For routine tasks. Opus is expensive and slow, and the depth it provides isn't proportional to the value for scaffolding, simple refactors, or boilerplate. You're paying for a level of reasoning the task doesn't need.",
            &[
                ("coding", "Opus traces actual logic, not just patterns. It catches bugs that require understanding three levels of indirection, identifies race conditions by simulating concurrent execution, and spots type issues TypeScript itself misses. For production code where correctness is non-negotiable, this depth is the difference."),
                ("production", "Opus's deep accuracy shines in production contexts. It doesn't pattern-match — it reasons through the actual logic, catches subtle bugs, and flags the edge cases other models miss."),
                ("multifile", "Opus thinks in systems, not just in code. Across a multi-file change, it tracks how abstractions interact and will tell you when a design decision will cause problems two features from now."),
                ("critical", "Opus traces actual logic, not just patterns. For critical systems where a subtle bug has real consequences, this depth is worth the cost."),
                ("architecture", "Opus thinks in systems and abstractions. It'll identify that your current abstraction will cause problems two features from now — and explain why."),
                ("reasoning", "Opus doesn't pattern-match — it actually reasons. Multi-step logic, constraint satisfaction, debugging subtle interactions — this is the task type where the gap between Opus and everything else is widest."),
                ("hard", "Where other models pattern-match, Opus reasons through the problem. It catches bugs that require understanding three levels of indirection."),
                ("accuracy", "Opus's thoroughness means it considers more options and explores more edge cases. When you need to be right, not just fast, it's the right choice."),
            ],
        ),
        candidate(
            "o3-pro",
            "o3-pro",
            "The Heavy Reasoner",
            "For anything that doesn't require maximum reasoning depth — the cost is hard to justify.",
            &[
                ("whenWrong", "For anything that doesn't require maximum reasoning depth — the cost is hard to justify."),
                ("bestFor", "The hardest problems where cost is secondary to correctness"),
                ("worstFor", "Any task that doesn't require maximum depth"),
            ],
        ),
        candidate(
            "composer-1-5",
            "Cursor Composer-1.5",
            "The Agentic One",
            "When you need tight control. Composer-1.5 can go down wrong paths and make a lot of changes before you realize it's off track. Short task scopes and frequent checkpoints are essential.",
            &[
                ("autonomous", "Composer-1.5 can run terminal commands, read the output, make more edits, and loop until the task is done. It's the closest thing to a developer who can actually execute end-to-end."),
                ("multifile", "It navigates the project, finds the relevant files, and makes coordinated changes across many of them — without you having to specify each one."),
                ("selfcorrect", "It sees the TypeScript error, understands it in context, and fixes it — without you having to copy-paste the error back into a prompt."),
            ],
        ),
    ]
}
