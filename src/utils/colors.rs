//! Colour choices for labels and scores in terminal output.

use crate::models::Label;
use ansi_term::Colour;

/// Red for schizophrenia-like, green for control-like.
pub fn colour_for_label(label: &Label) -> Colour {
    if label.is_positive() {
        Colour::Red
    } else {
        Colour::Green
    }
}

/// Same rule applied to the label name stored in a log row.
pub fn colour_for_prediction(prediction: &str) -> Colour {
    if prediction == Label::SchizophreniaLike.name() {
        Colour::Red
    } else {
        Colour::Green
    }
}

/// Score bands on the 0–100 scale.
pub fn colour_for_score(score: f64) -> Colour {
    if score >= 60.0 {
        Colour::Red
    } else if score >= 40.0 {
        Colour::Yellow
    } else {
        Colour::Green
    }
}

pub fn paint_label(label: &Label) -> String {
    colour_for_label(label).bold().paint(label.name()).to_string()
}

pub fn paint_score(score: f64) -> String {
    colour_for_score(score)
        .paint(crate::utils::formatting::percent(score))
        .to_string()
}
