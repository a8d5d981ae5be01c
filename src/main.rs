use {
  anyhow::Context,
  article_cleaner::{HostIndex, Sanitizer, Whitelist, clean_corpus},
  clap::Parser,
  std::{fs, io, path::PathBuf, process},
};

#[derive(Parser)]
#[command(name = "article-cleaner")]
#[command(
  about = "Reduce an article corpus to canonical markup with classified links",
  long_about = None
)]
struct Arguments {
  /// Path to the ground-truth XML supplying each article's canonical url
  #[arg(value_name = "GROUND_TRUTH")]
  ground_truth: PathBuf,
  /// Path to the article corpus XML to clean
  #[arg(value_name = "ARTICLES")]
  articles: PathBuf,
}

impl Arguments {
  fn run(self) -> Result {
    let ground_truth =
      fs::read_to_string(&self.ground_truth).with_context(|| {
        format!("failed to read file from `{}`", self.ground_truth.display())
      })?;

    let articles = fs::read_to_string(&self.articles).with_context(|| {
      format!("failed to read file from `{}`", self.articles.display())
    })?;

    let hosts = HostIndex::parse(&ground_truth)
      .context("failed to build host index from ground truth")?;

    let sanitizer = Sanitizer::new(Whitelist::default());

    clean_corpus(&articles, &hosts, &sanitizer, io::stdout().lock())
      .context("failed to clean article corpus")?;

    Ok(())
  }
}

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
