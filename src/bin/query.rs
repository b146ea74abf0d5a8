use std::{env, error::Error};
use synonym_finder::{init_logging, Config, Metric, Pipeline, Similarity};


// picks the choice closest in meaning to a word, under every metric of the config.
// arguments to this executable should be:
// path to the json config (only corpus_files, metrics and num_threads are used)
// the word, followed by one or more choices
// example: ... config.json vexed annoyed amused anxious

fn main() -> Result<(), Box<dyn Error>> {

    init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        return Err("usage: query <config.json> <word> <choice> [choice...]".into());
    }

    let params = Config::from_file(&args[1])?.get_params();
    let word = args[2].to_lowercase();
    let choices: Vec<String> = args[3..].iter().map(|x| x.to_lowercase()).collect();

    let table = Pipeline::build_table(&params)?;
    for metric in &params.metrics {
        run_query(&word, &choices, Similarity::new(&table, *metric))?;
    }

    Ok(())
}

fn run_query(word: &str, choices: &[String], similarity_object: Similarity) -> Result<(), Box<dyn Error>> {

    let metric: Metric = similarity_object.metric();
    println!("scoring {} choices for {} using {} similarity", choices.len(), word, metric);

    for (i, choice) in choices.iter().enumerate() {
        match similarity_object.score(word, choice)? {
            Some(score) => println!("{} : {} ? {} = {:.4}", i, word, choice, score),
            None => println!("{} : {} ? {} = unknown", i, word, choice),
        }
    }

    match similarity_object.most_similar(word, choices)? {
        Some(best) => println!("most similar to '{}' is '{}'", word, best),
        None => println!("'{}' does not appear in the corpus", word),
    }
    println!();

    Ok(())
}
