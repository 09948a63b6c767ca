//! The `seq` command: read a run of consecutive values.

use super::CliOptions;

pub fn sequence_text(text: &str, options: &CliOptions) {
    let outcome = options.interpreter().parse_sequence(text, options.expect);
    let values: Vec<String> = outcome.values.iter().map(ToString::to_string).collect();

    println!("values:    [{}] ({})", values.join(", "), outcome.method);
    println!("count:     {}", outcome.count);
    println!("tags:      {}", outcome.type_tags);
    println!("languages: {}", outcome.languages);
    if let Some(draws) = &outcome.random_draws {
        println!("random:    {} draw(s)", draws.len());
    }
}
