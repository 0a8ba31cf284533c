use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{debug, error};
use serde::Serialize;

use dishlist_search::{
    extract_core_words, filter_dish_lists, filter_recipes, highlight_segments,
    ingredient_appears_in, load_cook_recipe, load_dish_lists, load_recipes, HighlightSegment,
    SearchConfig, SearchError,
};

#[derive(Parser, Debug)]
#[command(name = "dishlist-search")]
#[command(about = "Recipe and DishList text matching", long_about = None)]
struct Cli {
    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file (defaults to ./dishlist.toml when present)
    #[arg(long, global = true, env = "DISHLIST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the core words of an ingredient line
    CoreWords {
        /// Raw ingredient, e.g. "2 cups chopped fresh tomatoes"
        ingredient: String,
    },

    /// Check whether an instruction mentions an ingredient
    Matches { ingredient: String, instruction: String },

    /// Highlight the ingredients mentioned in an instruction
    Highlight {
        instruction: String,
        #[arg(required = true)]
        ingredients: Vec<String>,
    },

    /// Filter recipes or dishlists from a JSON file
    Search {
        /// Search query; every word is tried on its own
        #[arg(required = true)]
        query: Vec<String>,

        /// JSON array of recipes
        #[arg(long, conflicts_with = "dish_lists")]
        recipes: Option<PathBuf>,

        /// JSON array of dishlists
        #[arg(long)]
        dish_lists: Option<PathBuf>,

        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show cook mode steps for a recipe JSON file
    Cook {
        /// JSON object with "ingredients" and "instructions" arrays
        #[arg(long)]
        recipe: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SearchConfig::load_from(path),
        None => SearchConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", SearchError::from(e));
            std::process::exit(2);
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
    debug!("{:?}", config);

    if let Err(e) = run(cli, &config) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &SearchConfig) -> Result<(), SearchError> {
    let json = cli.json || config.output.json;

    match cli.command {
        Commands::CoreWords { ingredient } => {
            let words = extract_core_words(&ingredient);
            if json {
                print_json(&words)?;
            } else {
                println!("{}", words.join(" "));
            }
        }
        Commands::Matches {
            ingredient,
            instruction,
        } => {
            let found = ingredient_appears_in(&ingredient, &instruction);
            if json {
                print_json(&found)?;
            } else {
                println!("{}", found);
            }
        }
        Commands::Highlight {
            instruction,
            ingredients,
        } => {
            let segments = highlight_segments(&instruction, &ingredients);
            if json {
                print_json(&segments)?;
            } else {
                println!("{}", render_segments(&segments));
            }
        }
        Commands::Search {
            query,
            recipes,
            dish_lists,
            limit,
        } => {
            let query = query.join(" ");
            let limit = result_limit(limit, config);

            match data_source(recipes, dish_lists, config)? {
                DataSource::Recipes(path) => {
                    let recipes = load_recipes(path)?;
                    let found: Vec<_> = filter_recipes(&recipes, &query)
                        .into_iter()
                        .take(limit)
                        .collect();
                    print_titles(json, &found, |r| r.title.as_str())?;
                }
                DataSource::DishLists(path) => {
                    let lists = load_dish_lists(path)?;
                    let found: Vec<_> = filter_dish_lists(&lists, &query)
                        .into_iter()
                        .take(limit)
                        .collect();
                    print_titles(json, &found, |l| l.title.as_str())?;
                }
            }
        }
        Commands::Cook { recipe } => {
            let recipe = load_cook_recipe(recipe)?;
            let steps = recipe.cook_steps();
            if json {
                print_json(&steps)?;
            } else {
                if !recipe.title.is_empty() {
                    println!("{}\n", recipe.title);
                }
                for step in &steps {
                    println!("{}. {}", step.index + 1, render_segments(&step.segments));
                    if !step.ingredients.is_empty() {
                        println!("   uses: {}", step.ingredients.join("; "));
                    }
                }
            }
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq)]
enum DataSource {
    Recipes(PathBuf),
    DishLists(PathBuf),
}

/// Command-line paths win over configured ones; recipes before dishlists
fn data_source(
    recipes: Option<PathBuf>,
    dish_lists: Option<PathBuf>,
    config: &SearchConfig,
) -> Result<DataSource, SearchError> {
    if let Some(path) = recipes {
        return Ok(DataSource::Recipes(path));
    }
    if let Some(path) = dish_lists {
        return Ok(DataSource::DishLists(path));
    }
    if let Some(path) = &config.data.recipes_path {
        return Ok(DataSource::Recipes(path.clone()));
    }
    if let Some(path) = &config.data.dish_lists_path {
        return Ok(DataSource::DishLists(path.clone()));
    }
    Err(SearchError::MissingData(
        "pass --recipes or --dish-lists, or set data.recipes_path".to_string(),
    ))
}

/// `--limit` wins over `output.limit`; neither means no cap
fn result_limit(limit: Option<usize>, config: &SearchConfig) -> usize {
    limit.or(config.output.limit).unwrap_or(usize::MAX)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), SearchError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_titles<T: Serialize>(
    json: bool,
    items: &[&T],
    title: impl Fn(&T) -> &str,
) -> Result<(), SearchError> {
    if json {
        return print_json(items);
    }
    for item in items {
        println!("{}", title(*item));
    }
    Ok(())
}

/// Plain-text rendering: highlighted runs wrapped in [brackets]
fn render_segments(segments: &[HighlightSegment]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.is_highlight {
                format!("[{}]", s.text)
            } else {
                s.text.clone()
            }
        })
        .collect()
}
