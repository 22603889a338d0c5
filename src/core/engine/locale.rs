//! Greek display strings: genre labels, prompt templates and the plot
//! lead-in pool. Genres absent from the table pass through unchanged.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static GENRE_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Action", "Δράση"),
        ("Adventure", "Περιπέτεια"),
        ("Animation", "Κινούμενα Σχέδια"),
        ("Comedy", "Κωμωδία"),
        ("Crime", "Έγκλημα"),
        ("Documentary", "Ντοκιμαντέρ"),
        ("Drama", "Δράμα"),
        ("Family", "Οικογενειακή"),
        ("Fantasy", "Φαντασία"),
        ("History", "Ιστορική"),
        ("Horror", "Τρόμου"),
        ("Music", "Μουσική"),
        ("Mystery", "Μυστήριο"),
        ("Romance", "Ρομαντική"),
        ("Science Fiction", "Επιστημονική Φαντασία"),
        ("TV Movie", "Τηλεταινία"),
        ("Thriller", "Θρίλερ"),
        ("War", "Πολεμική"),
        ("Western", "Γουέστερν"),
    ])
});

/// Category used when a movie carries no genres at all.
pub const DEFAULT_CATEGORY: &str = "General";

/// Lead-in phrasings for plot questions, one picked at random per question.
pub const PLOT_INTROS: [&str; 5] = [
    "Ποια ταινία περιγράφεται εδώ:",
    "Μαντέψτε την ταινία από την υπόθεση:",
    "Σε ποια ταινία αναφέρεται η παρακάτω περιγραφή;",
    "Αναγνωρίστε την ταινία:",
    "Ποιο έργο έχει την εξής πλοκή;",
];

/// Appended to duplicated prompts by the bucket balancer.
pub const DUPLICATE_SUFFIX: &str = " (Εναλλακτική ερώτηση)";

pub fn localized_genre(english: &str) -> String {
    GENRE_MAP
        .get(english)
        .map(|g| (*g).to_string())
        .unwrap_or_else(|| english.to_string())
}

/// Category label for a movie: its first listed genre, localized.
pub fn category_for(genres: &[String]) -> String {
    genres
        .first()
        .map(|g| localized_genre(g))
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

pub fn year_prompt(title: &str) -> String {
    format!("Ποια χρονιά κυκλοφόρησε η ταινία «{title}»;")
}

pub fn actor_prompt(character: &str, title: &str) -> String {
    format!("Ποιος ηθοποιός έπαιξε τον ρόλο '{character}' στην ταινία «{title}»;")
}

pub fn plot_prompt(intro: &str, redacted_plot: &str) -> String {
    format!("{intro} \"{redacted_plot}\"")
}
