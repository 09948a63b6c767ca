//! The `parse` command: read one value and show how it was chosen.

use tally_interp::{CONTEXT_PRIORITY, ParseOutcome};

use super::{describe, CliOptions};

pub fn parse_text(text: &str, options: &CliOptions) {
    let explanation = options.interpreter().explain(text, options.expect);
    print_outcome(&explanation.outcome);

    let set = explanation.candidates;
    if set.is_empty() {
        return;
    }
    println!();
    println!("candidates:");
    for kind in CONTEXT_PRIORITY {
        for candidate in set.candidates.iter().filter(|c| c.kind == kind) {
            println!("  {:<16} {}", kind.as_str(), candidate.description);
        }
    }
}

fn print_outcome(outcome: &ParseOutcome) {
    println!("value:     {}", describe(outcome));
    println!("tags:      {}", outcome.type_tags);
    println!("languages: {}", outcome.languages);
    if let Some(draws) = &outcome.random_draws {
        for draw in draws {
            println!("random:    {}..={} drew {}", draw.min, draw.max, draw.drawn);
        }
    }
}
