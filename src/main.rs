use std::{env, error::Error};

use synonym_finder::{init_logging, Config, Pipeline};

// expects a single argument, the path to a json config. For example:
// {"corpus_files": ["swanns_way.txt", "war_and_peace.txt"], "questions_file": "test.txt"}

fn main() -> Result<(), Box<dyn Error>> {

    init_logging();

    let args: Vec<String> = env::args().collect();
    let params = Config::new(&args)?.get_params();
    tracing::info!("{}", params);

    for (metric, evaluation) in Pipeline::run(&params)? {
        println!("{} : {:.2}% ({}/{})", metric, evaluation.accuracy(), evaluation.correct, evaluation.total);
    }

    Ok(())
}
