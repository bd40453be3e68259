use emotion_sniffer::utils::{
    validate_country_filter, validate_lexicon_path, validate_records_path, validate_report_path,
};
use emotion_sniffer::{generate_report_from_files, CategoryFilter, Error};
use log::{error, info};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

struct UserInput {
    lexicon_path: PathBuf,
    records_path: PathBuf,
    filter: CategoryFilter,
    report_path: PathBuf,
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let result = ask_user_for_input(&mut input).and_then(|user_input| {
            info!(
                "Analyzing {} with {} (filter: {})",
                user_input.records_path.display(),
                user_input.lexicon_path.display(),
                user_input.filter
            );

            generate_report_from_files(
                &user_input.lexicon_path,
                &user_input.records_path,
                &user_input.filter,
                &user_input.report_path,
            )
        });

        match result {
            Ok(dominant_emotion) => {
                println!("Most common emotion is: {}", dominant_emotion);
                break;
            }
            Err(Error::InputClosed) => {
                error!("{}", Error::InputClosed);
                std::process::exit(1);
            }
            Err(e) if e.is_recoverable() => {
                println!("Error: {}", e);
            }
            Err(e) => {
                println!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn ask_user_for_input<R: BufRead>(input: &mut R) -> Result<UserInput, Error> {
    let lexicon_path =
        validate_lexicon_path(&prompt(input, "Input keyword file (ending in .tsv): ")?)?;

    let records_path =
        validate_records_path(&prompt(input, "Input comment file (ending in .csv): ")?)?;

    let filter = validate_country_filter(&prompt(
        input,
        "Input a country to analyze (or \"all\" for all countries): ",
    )?)?;

    let report_path = validate_report_path(&prompt(
        input,
        "Input the name of the report file (ending in .txt): ",
    )?)?;

    Ok(UserInput {
        lexicon_path,
        records_path,
        filter,
        report_path,
    })
}

fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<String, Error> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InputClosed);
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_line_terminator() {
        let mut input = Cursor::new("keywords.tsv\r\nrest\n");
        assert_eq!(prompt(&mut input, "").unwrap(), "keywords.tsv");
        assert_eq!(prompt(&mut input, "").unwrap(), "rest");
    }

    #[test]
    fn test_closed_input_is_input_closed() {
        let mut input = Cursor::new("");
        assert!(matches!(prompt(&mut input, ""), Err(Error::InputClosed)));
    }

    #[test]
    fn test_input_closed_part_way_through() {
        let mut input = Cursor::new("missing.tsv\n");

        // The first answer is rejected before the stream runs dry
        assert!(matches!(
            ask_user_for_input(&mut input),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            ask_user_for_input(&mut input),
            Err(Error::InputClosed)
        ));
    }
}
