use crate::classifier::Classifier;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub struct ModelLogic;

impl ModelLogic {
    /// Load the configured artifacts; any failure is fatal for the command.
    pub fn load(cfg: &Config) -> AppResult<Classifier> {
        Classifier::load(&cfg.model_file(), &cfg.vectorizer_file())
    }

    pub fn print_info(cfg: &Config) -> AppResult<()> {
        let classifier = Self::load(cfg)?;
        let info = classifier.describe();

        header("🧠 Model");
        println!("Model file      : {}", cfg.model_file().display());
        println!("Vectorizer file : {}", cfg.vectorizer_file().display());
        println!("Kind            : {}", info.kind);
        println!("Classes         : {:?}", info.classes);
        println!("Features        : {}", info.n_features);
        println!(
            "Weighting       : {}",
            if info.tfidf { "tf-idf" } else { "counts" }
        );
        println!(
            "N-gram range    : ({}, {})",
            info.ngram_range.0, info.ngram_range.1
        );
        Ok(())
    }
}
