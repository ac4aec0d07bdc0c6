use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wordstack_core::{build_deck, clean_words, parse_deck, Deck, DEFAULT_GROUP_SIZE};

#[derive(Parser)]
#[command(name = "wordstack-cli", version, about = "Authoring tools for wordstack decks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shuffle a word list into numbered groups and write a deck file.
    Group {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "Words")]
        column: String,
        #[arg(long, default_value_t = DEFAULT_GROUP_SIZE)]
        group_size: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print every group of an existing deck file.
    Show {
        #[arg(long, env = "WORDSTACK_DECK")]
        deck: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Group {
            input,
            column,
            group_size,
            seed,
            output,
        } => {
            if group_size == 0 {
                return Err("group size must be at least 1".into());
            }
            let words = read_words(&input, &column)?;
            eprintln!("read {} words from {}", words.len(), input.display());
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let deck = build_deck(words, group_size, &mut rng);
            println!("Word Groups:");
            print!("{}", deck.summary());
            let output = output.unwrap_or_else(default_output_path);
            write_deck(&deck, &output)?;
            eprintln!("Groups have been saved to: {}", output.display());
        }
        Commands::Show { deck } => {
            let deck = load_deck(&deck)?;
            println!("{} groups", deck.len());
            print!("{}", deck.summary());
        }
    }

    Ok(())
}

fn read_words(path: &Path, column: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("file '{}' not found", path.display()).into());
    }
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        read_csv_column(path, column)
    } else {
        let contents = fs::read_to_string(path)?;
        Ok(clean_words(contents.lines()))
    }
}

fn read_csv_column(path: &Path, column: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let Some(index) = headers.iter().position(|header| header.trim() == column) else {
        return Err(format!("column '{column}' not found in {}", path.display()).into());
    };
    let mut words = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(value) = record.get(index) {
            words.push(value.to_string());
        }
    }
    Ok(clean_words(words))
}

fn load_deck(path: &Path) -> Result<Deck, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|err| format!("failed to read deck {}: {err}", path.display()))?;
    Ok(parse_deck(&contents)?)
}

fn write_deck(deck: &Deck, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = deck.to_json_pretty()?;
    fs::write(path, json)?;
    Ok(())
}

fn default_output_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("word_groups_{timestamp}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn plain_text_is_one_word_per_line() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "apple\n  pear \n\nplum").expect("write words");
        let words = read_words(file.path(), "Words").expect("read words");
        assert_eq!(words, vec!["apple", "pear", "plum"]);
    }

    #[test]
    fn csv_reads_named_column() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("words.csv");
        fs::write(&path, "Id,Words\n1,sun\n2,\n3, moon \n").expect("write csv");
        let words = read_words(&path, "Words").expect("read words");
        assert_eq!(words, vec!["sun", "moon"]);
    }

    #[test]
    fn csv_missing_column_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("words.csv");
        fs::write(&path, "Id,Term\n1,sun\n").expect("write csv");
        let err = read_words(&path, "Words").unwrap_err();
        assert!(err.to_string().contains("column 'Words' not found"));
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nope.txt");
        let err = read_words(&path, "Words").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn written_deck_loads_back() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("deck.json");
        let words: Vec<String> = (0..10).map(|i| format!("w{i}")).collect();
        let deck = build_deck(words, 4, &mut StdRng::seed_from_u64(5));
        write_deck(&deck, &path).expect("write deck");
        let loaded = load_deck(&path).expect("load deck");
        assert_eq!(loaded, deck);
        assert_eq!(loaded.len(), 3);
    }

    #[test]
    fn default_output_is_timestamped_json() {
        let path = default_output_path();
        let name = path.to_string_lossy();
        assert!(name.starts_with("word_groups_"));
        assert!(name.ends_with(".json"));
    }
}
